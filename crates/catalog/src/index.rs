//! Catalog building and indexing logic.
//!
//! Builds the lookups a `Catalog` serves from a list of parsed posts:
//! - post id -> position
//! - distinct category names (first-seen order)
//! - category name -> every (post, category) pair carrying it

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Load a post listing file and index it.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading post listing from {:?}", path);

        let posts = parser::parse_posts(path)?;
        let catalog = Self::from_posts(posts)?;

        let (posts, names, links) = catalog.counts();
        info!(
            "Loaded {} posts, {} distinct categories, {} category links",
            posts, names, links
        );
        Ok(catalog)
    }

    /// Parse and index a post listing held in memory
    pub fn from_json_str(json: &str) -> Result<Self> {
        let posts = parser::parse_posts_str(json, "<memory>")?;
        Self::from_posts(posts)
    }

    /// Index already-parsed posts, keeping their order.
    pub fn from_posts(posts: Vec<PostSummary>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for post in posts {
            catalog.insert_post(post)?;
        }
        Ok(catalog)
    }

    /// Append a post and update indices.
    ///
    /// Fails if a post with the same id is already present, or if the post
    /// lists the same category id twice.
    pub fn insert_post(&mut self, post: PostSummary) -> Result<()> {
        if self.post_index.contains_key(&post.id) {
            return Err(CatalogError::DuplicatePost { id: post.id });
        }

        let mut category_ids = HashSet::new();
        for category in &post.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::ValidationError(format!(
                    "post {} lists category {} more than once",
                    post.id, category.id
                )));
            }
        }

        let post_pos = self.posts.len();
        for (cat_pos, category) in post.categories.iter().enumerate() {
            if !self.category_index.contains_key(&category.name) {
                self.category_names.push(category.name.clone());
            }
            self.category_index
                .entry(category.name.clone())
                .or_default()
                .push((post_pos, cat_pos));
        }

        debug!(
            "Indexed post {} with {} categories",
            post.id,
            post.categories.len()
        );
        self.post_index.insert(post.id.clone(), post_pos);
        self.posts.push(post);
        Ok(())
    }
}
