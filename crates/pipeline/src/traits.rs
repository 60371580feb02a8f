//! Core traits for the filtering pipeline.
//!
//! This module defines the PostFilter trait that allows composable
//! filters to be applied to a post listing.

use crate::context::FilterContext;
use anyhow::Result;
use catalog::PostSummary;

/// Core trait for filtering posts.
///
/// Filters take ownership of the posts and hand back the ones that pass,
/// in their original relative order.
pub trait PostFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of posts.
    ///
    /// # Arguments
    /// * `posts` - The posts to filter (takes ownership)
    /// * `context` - Active keywords and combination mode
    fn apply(&self, posts: Vec<PostSummary>, context: &FilterContext) -> Result<Vec<PostSummary>>;
}
