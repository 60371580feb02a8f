//! # Suggest Crate
//!
//! Keyword suggestions for the portfolio landing page.
//!
//! ## Components
//!
//! ### Edit-Distance Scorer
//! Case-insensitive Levenshtein distance, normalized by the length of
//! the category name.
//!
//! ### Suggestion Ranker
//! Orders the category universe by score and keeps the closest ten.
//!
//! ### Keyword Set
//! The visitor's chosen keywords: ordered, de-duplicated.
//!
//! ## Example Usage
//!
//! ```ignore
//! use suggest::{KeywordSet, SuggestionRanker};
//!
//! let universe = catalog.category_universe();
//! let ranker = SuggestionRanker::new();
//!
//! let suggestions = ranker.rank("typscript", universe);
//!
//! let mut keywords = KeywordSet::new();
//! keywords.add(suggestions[0].clone());
//! ```

pub mod distance;
pub mod ranker;
pub mod keywords;

// Re-export commonly used types
pub use distance::{distance, normalized_score};
pub use keywords::KeywordSet;
pub use ranker::{rank, Suggestion, SuggestionRanker, DEFAULT_SUGGESTION_LIMIT};
