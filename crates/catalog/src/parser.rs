//! Parser for the post listing JSON.
//!
//! The listing is the array served by the site's `/api/posts` endpoint:
//!
//! ```text
//! [{ "id": "...", "title": "...", "repository": "...", "app_url": "...",
//!    "createdAt": "...", "article": [...],
//!    "categories": [{ "category": { "id": "...", "name": "...", "detail": "..." } }] }]
//! ```
//!
//! Each record is decoded into a loose `Raw*` shape first and then checked
//! field by field, so a bad record is reported with its position in the
//! listing instead of surfacing later as an empty name.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawPost {
    id: Value,
    title: Option<String>,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    app_url: Option<String>,
    #[serde(rename = "createdAt", default)]
    created_at: Option<String>,
    #[serde(default)]
    categories: Option<Vec<RawPostCategory>>,
}

/// Join-table row wrapping the actual category
#[derive(Debug, Deserialize)]
struct RawPostCategory {
    category: Option<RawCategory>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    id: Value,
    name: Option<String>,
    detail: Option<String>,
}

/// Ids come out of the database as strings, but numeric ids are accepted too.
pub(crate) fn parse_id(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(CatalogError::InvalidValue {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

fn parse_category(raw: RawPostCategory, index: usize) -> std::result::Result<Category, String> {
    let category = raw
        .category
        .ok_or_else(|| format!("category {} has no `category` object", index))?;

    let id = parse_id("category.id", &category.id).map_err(|e| e.to_string())?;

    let name = category
        .name
        .ok_or_else(|| format!("category {} ({}) is missing a name", index, id))?;

    let detail = match category.detail {
        Some(detail) if !detail.is_empty() => detail,
        _ => DEFAULT_CATEGORY_DETAIL.to_string(),
    };

    Ok(Category { id, name, detail })
}

fn parse_post(value: Value, position: usize, source_name: &str) -> Result<PostSummary> {
    let parse_error = |reason: String| CatalogError::ParseError {
        source_name: source_name.to_string(),
        record: position,
        reason,
    };

    let raw: RawPost = serde_json::from_value(value).map_err(|e| parse_error(e.to_string()))?;

    let id = parse_id("id", &raw.id).map_err(|e| parse_error(e.to_string()))?;

    let title = raw
        .title
        .ok_or_else(|| parse_error(format!("post {} is missing a title", id)))?;

    let raw_categories = raw
        .categories
        .ok_or_else(|| parse_error(format!("post {} has no categories array", id)))?;

    let categories = raw_categories
        .into_iter()
        .enumerate()
        .map(|(i, c)| parse_category(c, i))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(parse_error)?;

    Ok(PostSummary {
        id,
        title,
        created_at: raw.created_at.unwrap_or_default(),
        repository: raw.repository.unwrap_or_default(),
        app_url: raw.app_url.unwrap_or_default(),
        categories,
    })
}

/// Parse a post listing held in memory.
///
/// `source_name` only shows up in error messages.
pub fn parse_posts_str(json: &str, source_name: &str) -> Result<Vec<PostSummary>> {
    let values: Vec<Value> = serde_json::from_str(json)?;

    values
        .into_iter()
        .enumerate()
        .map(|(position, value)| parse_post(value, position, source_name))
        .collect()
}

/// Read a listing file, returning its content and a name for error messages.
pub(crate) fn read_source(path: &Path) -> Result<(String, String)> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok((content, source_name))
}

/// Parse a post listing file
pub fn parse_posts(path: &Path) -> Result<Vec<PostSummary>> {
    let (content, source_name) = read_source(path)?;
    parse_posts_str(&content, &source_name)
}
