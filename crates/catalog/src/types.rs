//! Core domain types for the portfolio post listing.
//!
//! These are the validated records the rest of the workspace works with.
//! Raw JSON never leaves the parser; by the time a `PostSummary` exists
//! every category on it has an id and a name.

use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a post (opaque string assigned by the database)
pub type PostId = String;

/// Unique identifier for a category record
pub type CategoryId = String;

/// Detail text used when a category carries none.
pub const DEFAULT_CATEGORY_DETAIL: &str = "No Detail";

// =============================================================================
// Category
// =============================================================================

/// A category attached to a post.
///
/// Several category records may share a `name`; the name is what keyword
/// matching and suggestion ranking look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub detail: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            detail: DEFAULT_CATEGORY_DETAIL.to_string(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

// =============================================================================
// Post
// =============================================================================

/// A portfolio post as listed on the landing page.
///
/// The article body is not part of the summary; filtering and display
/// only need the header fields and categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    /// ISO-8601 creation timestamp, kept verbatim
    pub created_at: String,
    pub repository: String,
    pub app_url: String,
    pub categories: Vec<Category>,
}

impl PostSummary {
    /// Build a summary with only an id and category names.
    ///
    /// Category ids are derived from the post id and position, which is
    /// enough for tests and for callers that only care about names.
    pub fn with_category_names<I, S>(id: impl Into<PostId>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        let categories = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Category::new(format!("{}-{}", id, i), name))
            .collect();

        Self {
            title: id.clone(),
            id,
            created_at: String::new(),
            repository: String::new(),
            app_url: String::new(),
            categories,
        }
    }

    /// Iterate over the names of this post's categories
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

// =============================================================================
// Skill
// =============================================================================

/// One entry of the "Skill" section: a distinct category name and every
/// category record that carries it.
#[derive(Debug, Clone)]
pub struct Skill<'a> {
    pub name: &'a str,
    pub categories: Vec<&'a Category>,
}

// =============================================================================
// Catalog - The In-Memory Post Collection
// =============================================================================

/// Holds a post listing plus the lookups derived from it.
///
/// Posts keep the order of the listing they were loaded from; every
/// filter result is a subsequence of that order.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) posts: Vec<PostSummary>,
    /// Post id -> position in `posts`
    pub(crate) post_index: HashMap<PostId, usize>,
    /// Distinct category names in first-seen order
    pub(crate) category_names: Vec<String>,
    /// Category name -> (post position, category position) pairs
    pub(crate) category_index: HashMap<String, Vec<(usize, usize)>>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            post_index: HashMap::new(),
            category_names: Vec::new(),
            category_index: HashMap::new(),
        }
    }

    /// All posts in listing order
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Get a post by id
    pub fn get_post(&self, id: &str) -> Option<&PostSummary> {
        self.post_index.get(id).map(|&pos| &self.posts[pos])
    }

    /// Distinct category names in the order they first appear in the listing.
    pub fn category_universe(&self) -> &[String] {
        &self.category_names
    }

    /// Get every post carrying a category with exactly this name
    pub fn get_posts_by_category(&self, name: &str) -> Vec<&PostSummary> {
        // links are pushed in post order, so repeats are adjacent
        let mut positions: Vec<usize> = self
            .category_index
            .get(name)
            .map(|links| links.iter().map(|&(post_pos, _)| post_pos).collect())
            .unwrap_or_default();
        positions.dedup();
        positions.into_iter().map(|pos| &self.posts[pos]).collect()
    }

    /// Group category records by name, in first-seen order.
    pub fn skills(&self) -> Vec<Skill<'_>> {
        self.category_names
            .iter()
            .map(|name| {
                let categories = self
                    .category_index
                    .get(name)
                    .map(|links| {
                        links
                            .iter()
                            .map(|&(p, c)| &self.posts[p].categories[c])
                            .collect()
                    })
                    .unwrap_or_default();
                Skill {
                    name: name.as_str(),
                    categories,
                }
            })
            .collect()
    }

    /// Get counts for debugging/validation: (posts, distinct names, category links)
    pub fn counts(&self) -> (usize, usize, usize) {
        let links = self.posts.iter().map(|p| p.categories.len()).sum();
        (self.posts.len(), self.category_names.len(), links)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
