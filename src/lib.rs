//! Spelling suggestions ranked by positional similarity.
//!
//! Load a [`Dictionary`] once, share it with a [`WordRecommender`], and ask for
//! replacements of words the dictionary doesn't contain:
//!
//! ```
//! use std::sync::Arc;
//! use wordrec::{Dictionary, WordRecommender, format_numbered};
//!
//! let dictionary = Arc::new(Dictionary::from_words(["hello", "yellow", "fellow", "mellow"]));
//! let recommender = WordRecommender::new(Arc::clone(&dictionary));
//!
//! assert!(!dictionary.contains("bellow"));
//! let suggestions = recommender.suggest("bellow", 2, 0.5, 2).unwrap();
//! assert_eq!(format_numbered(&suggestions), "1. yellow\n2. fellow");
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod recommender;
pub mod similarity;

pub use config::SuggestionConfig;
pub use dictionary::Dictionary;
pub use error::{Result, SpellError};
pub use recommender::{
    SuggestedCorrection, Suggestion, WordRecommender, format_numbered, most_similar,
};
pub use similarity::{common_percent, similarity, words_with_shared_letters};
