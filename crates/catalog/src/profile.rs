//! The site owner's profile.
//!
//! Read from the `/api/user` listing, an array of user records newest
//! first. The landing page only ever shows the first one.

use crate::error::{CatalogError, Result};
use crate::parser::{parse_id, read_source};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// An external link shown on the profile (GitHub, X, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileLink {
    pub url: String,
    /// Icon image URL; empty when none was uploaded
    pub icon: String,
}

/// The "Personal Information" block of the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Free text such as "18/3" (age/grade)
    pub age: String,
    pub affiliation: String,
    pub links: Vec<ProfileLink>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    id: Value,
    name: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    age: Option<String>,
    #[serde(default)]
    affiliation: Option<String>,
    #[serde(default)]
    links: Option<Vec<RawLink>>,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    url: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

/// Parse a `/api/user` listing held in memory and return its first profile.
pub fn parse_profile_str(json: &str, source_name: &str) -> Result<Profile> {
    let parse_error = |reason: String| CatalogError::ParseError {
        source_name: source_name.to_string(),
        record: 0,
        reason,
    };

    let values: Vec<Value> = serde_json::from_str(json)?;
    let first = values.into_iter().next().ok_or_else(|| {
        CatalogError::ValidationError(format!("{} contains no profile", source_name))
    })?;

    let raw: RawProfile = serde_json::from_value(first).map_err(|e| parse_error(e.to_string()))?;
    let id = parse_id("id", &raw.id).map_err(|e| parse_error(e.to_string()))?;
    let name = raw
        .name
        .ok_or_else(|| parse_error(format!("profile {} is missing a name", id)))?;

    let links = raw
        .links
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, link)| -> Result<ProfileLink> {
            let url = link
                .url
                .ok_or_else(|| parse_error(format!("link {} is missing a url", i)))?;
            Ok(ProfileLink {
                url,
                icon: link.icon.unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Profile {
        id,
        name,
        country: raw.country.unwrap_or_default(),
        age: raw.age.unwrap_or_default(),
        affiliation: raw.affiliation.unwrap_or_default(),
        links,
    })
}

impl Profile {
    /// Load the profile from a `/api/user` listing file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let (content, source_name) = read_source(path)?;
        let profile = parse_profile_str(&content, &source_name)?;
        info!("Loaded profile {} with {} links", profile.name, profile.links.len());
        Ok(profile)
    }
}
