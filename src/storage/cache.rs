//! Best-effort key-value cache with expiry
//!
//! Records expire after a TTL and the store never holds more than a fixed
//! number of entries; the oldest-cached entries are evicted first. Nothing in
//! here returns an error: an unreadable or unwritable backing file only means
//! the data has to be fetched again.

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::NamedTempFile;

/// How long a cached record stays valid
pub const CACHE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Maximum number of records kept at once
pub const CACHE_MAX_ENTRIES: usize = 300;

/// Key-value store the game caches fetched data in
///
/// Implementations must be shareable across the reveal workers.
pub trait CacheStore: Send + Sync {
    /// Read a live value, or `None` if absent, expired or unreadable
    fn read(&self, key: &str) -> Option<Value>;

    /// Store a value with the default TTL
    fn write(&self, key: &str, value: Value);

    fn remove(&self, key: &str);
}

/// Cache used when storage is unavailable: every read misses
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

impl CacheStore for NoopCache {
    fn read(&self, _key: &str) -> Option<Value> {
        None
    }

    fn write(&self, _key: &str, _value: Value) {}

    fn remove(&self, _key: &str) {}
}

/// Source of the current time in milliseconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    #[must_use]
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now: AtomicU64::new(start_ms),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheRecord {
    cached_at: u64,
    expires_at: u64,
    data: Value,
}

/// In-memory TTL cache with optional JSON file backing
pub struct TtlCache {
    records: Mutex<FxHashMap<String, CacheRecord>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    max_entries: usize,
    backing: Option<PathBuf>,
}

impl TtlCache {
    /// Cache that lives only as long as the process
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(FxHashMap::default()),
            clock,
            ttl: CACHE_TTL,
            max_entries: CACHE_MAX_ENTRIES,
            backing: None,
        }
    }

    /// Open a cache persisted at `path`
    ///
    /// A missing or corrupt file starts an empty cache.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_clock(path, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn open_with_clock(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        let path = path.into();
        let records = load_records(&path);
        debug!("Opened cache {} with {} records", path.display(), records.len());

        let cache = Self {
            records: Mutex::new(records),
            clock,
            ttl: CACHE_TTL,
            max_entries: CACHE_MAX_ENTRIES,
            backing: Some(path),
        };
        cache.prune(&mut cache.lock(), None);
        cache
    }

    /// Number of records currently held, including not-yet-pruned expired ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<String, CacheRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drop expired records, then evict the oldest beyond the cap
    ///
    /// `keep` is never evicted so a fresh write always survives its own prune.
    fn prune(&self, records: &mut FxHashMap<String, CacheRecord>, keep: Option<&str>) {
        let now = self.clock.now_ms();
        records.retain(|_, record| record.expires_at > now);

        if records.len() <= self.max_entries {
            return;
        }

        let mut by_age: Vec<(u64, String)> = records
            .iter()
            .filter(|(key, _)| Some(key.as_str()) != keep)
            .map(|(key, record)| (record.cached_at, key.clone()))
            .collect();
        by_age.sort_unstable();

        let remove_count = records.len() - self.max_entries;
        for (_, key) in by_age.into_iter().take(remove_count) {
            debug!("Evicting cache entry {key}");
            records.remove(&key);
        }
    }

    fn persist(&self, records: &FxHashMap<String, CacheRecord>) {
        let Some(path) = &self.backing else {
            return;
        };
        if let Err(e) = save_records(path, records) {
            warn!("Cache not persisted to {}: {e}", path.display());
        }
    }
}

impl CacheStore for TtlCache {
    fn read(&self, key: &str) -> Option<Value> {
        let mut records = self.lock();
        let expires_at = records.get(key)?.expires_at;

        if self.clock.now_ms() >= expires_at {
            debug!("Cache entry {key} expired");
            records.remove(key);
            self.persist(&records);
            return None;
        }

        records.get(key).map(|record| record.data.clone())
    }

    fn write(&self, key: &str, value: Value) {
        let now = self.clock.now_ms();
        let mut records = self.lock();
        records.insert(
            key.to_string(),
            CacheRecord {
                cached_at: now,
                expires_at: now + self.ttl.as_millis() as u64,
                data: value,
            },
        );
        self.prune(&mut records, Some(key));
        self.persist(&records);
    }

    fn remove(&self, key: &str) {
        let mut records = self.lock();
        if records.remove(key).is_some() {
            self.persist(&records);
        }
    }
}

fn load_records(path: &Path) -> FxHashMap<String, CacheRecord> {
    let Ok(content) = fs::read_to_string(path) else {
        return FxHashMap::default();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!("Ignoring unreadable cache file {}: {e}", path.display());
        FxHashMap::default()
    })
}

/// Write via a temp file in the same directory, then rename into place
fn save_records(path: &Path, records: &FxHashMap<String, CacheRecord>) -> std::io::Result<()> {
    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer(&mut writer, records)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
