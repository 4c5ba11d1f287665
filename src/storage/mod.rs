//! Best-effort persistence
//!
//! The cache and preference stores never fail loudly: storage problems degrade
//! to "nothing cached" or "default settings".

mod cache;
mod prefs;

pub use cache::{
    CACHE_MAX_ENTRIES, CACHE_TTL, CacheStore, Clock, ManualClock, NoopCache, SystemClock, TtlCache,
};
pub use prefs::{FilePreferences, MemoryPreferences, Preferences, PreferencesStore};
