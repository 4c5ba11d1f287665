//! Word definitions: remote validation and display meanings

mod client;
mod meaning;

pub use client::{DefinitionLookup, DictionaryApiClient, LookupOutcome, OfflineLookup};
pub use meaning::{MEANING_UNAVAILABLE, MeaningResolver, validate_remotely};
