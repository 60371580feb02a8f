//! The FilterPipeline orchestrates multiple filters.
//!
//! Filters run in the order they were added; each sees the output of the
//! previous one.

use crate::context::FilterContext;
use crate::traits::PostFilter;
use anyhow::Result;
use catalog::PostSummary;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(KeywordFilter::new(MatchCase::Sensitive));
///
/// let filtered = pipeline.apply(posts, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn PostFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl PostFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the posts.
    ///
    /// An empty pipeline returns its input untouched.
    pub fn apply(&self, posts: Vec<PostSummary>, context: &FilterContext) -> Result<Vec<PostSummary>> {
        let mut current = posts;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
