//! Letter Trail
//!
//! A word game: find words that contain a random set of letters in order.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_trail::core::{calculate_word_score, contains_in_order, normalize_for_match};
//!
//! let word = normalize_for_match("KITE ");
//! assert!(contains_in_order(&word, b"kte"));
//! assert_eq!(calculate_word_score(&word), 12);
//! ```

// Core domain types and pure word functions
pub mod core;

// Theme catalogs and data providers
pub mod catalog;

// Word definitions
pub mod lookup;

// Cache and preferences
pub mod storage;

// Rounds, guesses and the game session
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
