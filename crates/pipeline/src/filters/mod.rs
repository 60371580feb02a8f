//! Filter implementations for the post pipeline.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod keyword;

// Re-export for convenience
pub use keyword::{filter_posts, post_matches, KeywordFilter};
