//! # Catalog Crate
//!
//! Loads the portfolio's post listing and indexes it for the suggestion
//! and filtering crates.
//!
//! ## Main Components
//!
//! - **types**: Domain records (PostSummary, Category, Catalog, Skill)
//! - **parser**: Decode and validate the `/api/posts` JSON listing
//! - **index**: Build the category universe and per-name lookups
//! - **profile**: The site owner's profile from the `/api/user` listing
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/posts.json"))?;
//!
//! for name in catalog.category_universe() {
//!     println!("{}", name);
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod profile;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    PostId,
    CategoryId,
    // Core types
    Category,
    PostSummary,
    Skill,
    Catalog,
    DEFAULT_CATEGORY_DETAIL,
};
pub use profile::{Profile, ProfileLink};
