//! Theme word catalogs
//!
//! Raw theme data comes from a [`CatalogProvider`], is turned into
//! [`CatalogEntry`] values by the [`ThemeLoader`], and the entries of the
//! current theme are served by a [`WordCatalog`].

mod active;
mod embedded;
mod entry;
mod loader;
mod provider;

pub use active::{WordCatalog, WordMeta};
pub use embedded::{CAPITALS_JSON, COUNTRIES_JSON, DICTIONARY, DICTIONARY_COUNT};
pub use entry::{
    CatalogEntry, MIN_WORD_LENGTH, dedupe_entries, is_catalog_word, parse_word_list_text,
    sanitize_words, title_case_from_dash_text,
};
pub use loader::ThemeLoader;
pub use provider::{
    CatalogProvider, EmbeddedProvider, HttpProvider, ProviderError, RawCatalog, RawRecord,
    StaticProvider,
};
