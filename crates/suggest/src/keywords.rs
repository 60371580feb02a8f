//! The visitor's active keyword set.
//!
//! Insertion ordered so chips render in the order they were picked, but
//! membership is all the filter cares about. Never holds duplicates.

/// Ordered set of distinct keywords.
///
/// Membership is a linear scan; keyword sets hold a handful of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `keyword` unless already present.
    ///
    /// Returns `true` if the set changed.
    pub fn add(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if self.contains(&keyword) {
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    /// Remove `keyword` if present. Returns `true` if the set changed.
    pub fn remove(&mut self, keyword: &str) -> bool {
        match self.keywords.iter().position(|k| k == keyword) {
            Some(pos) => {
                self.keywords.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Builder-style `add`
    pub fn with(mut self, keyword: impl Into<String>) -> Self {
        self.add(keyword);
        self
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn clear(&mut self) {
        self.keywords.clear();
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keywords in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.add(keyword);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for KeywordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for keyword in iter {
            self.add(keyword);
        }
    }
}
