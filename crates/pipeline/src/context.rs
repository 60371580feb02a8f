//! Inputs shared by every post filter.

use suggest::KeywordSet;

/// How multiple keywords combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombinationMode {
    /// A post passes if any of its categories contains any keyword
    #[default]
    Any,
    /// A post passes only if every keyword is contained in one of its categories
    All,
}

/// Whether keyword containment compares case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCase {
    #[default]
    Sensitive,
    Insensitive,
}

impl MatchCase {
    /// Does `haystack` contain `needle` under this case policy?
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            MatchCase::Sensitive => haystack.contains(needle),
            MatchCase::Insensitive => haystack.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

/// The keyword set and mode a filter pass runs against.
#[derive(Debug, Clone, Default)]
pub struct FilterContext {
    pub keywords: KeywordSet,
    pub mode: CombinationMode,
}

impl FilterContext {
    pub fn new(keywords: KeywordSet, mode: CombinationMode) -> Self {
        Self { keywords, mode }
    }
}
