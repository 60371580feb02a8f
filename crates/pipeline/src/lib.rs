//! Pipeline for filtering portfolio posts by keyword.
//!
//! This crate provides:
//! - PostFilter trait and the keyword filter implementation
//! - FilterPipeline for composing filters
//! - SearchSession, the explicit state behind the landing page search
//!
//! ## Architecture
//! A session processes a visitor's input in stages:
//! 1. Query text is ranked against the category universe (suggest crate)
//! 2. A chosen suggestion joins the keyword set
//! 3. The filter pipeline re-evaluates the full post listing
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CombinationMode, SearchSession};
//!
//! let mut session = SearchSession::new();
//! session.set_query("typscript");
//! let suggestions = session.suggestions(catalog.category_universe());
//!
//! session.select(suggestions[0].name.clone());
//! session.set_mode(CombinationMode::All);
//! let posts = session.results(catalog.posts())?;
//! ```

pub mod context;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod session;

// Re-export main types
pub use context::{CombinationMode, FilterContext, MatchCase};
pub use traits::PostFilter;
pub use filter_pipeline::FilterPipeline;
pub use filters::{filter_posts, KeywordFilter};
pub use session::SearchSession;
