//! Suggestion Ranker - closest category names for a query
//!
//! Scores every name in the category universe against the query and
//! returns the best few, most similar first.
//!
//! ## Algorithm
//! 1. Score each non-empty name with `distance / len(name)`
//! 2. Stable-sort ascending by score, so ties keep universe order
//! 3. Keep the first `limit` entries (10 by default)
//!
//! Empty names are skipped: they can't be normalized and are never a
//! useful suggestion.

use crate::distance::normalized_score;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Number of suggestions returned when no limit is configured
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// A category name together with its score against the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    /// Length-normalized edit distance; lower is better
    pub score: f64,
}

/// Ranks category names by similarity to a query
#[derive(Debug, Clone)]
pub struct SuggestionRanker {
    /// Maximum number of suggestions returned
    limit: usize,
}

impl SuggestionRanker {
    /// Create a ranker with the default limit
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Configure how many suggestions to return (default: 10)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Score and order the universe, returning at most `limit` suggestions.
    ///
    /// Output is a pure function of `query` and `universe`; the parallel
    /// scoring pass collects in universe order before the stable sort.
    #[instrument(skip(self, universe), fields(universe_size = universe.len()))]
    pub fn rank_scored<S>(&self, query: &str, universe: &[S]) -> Vec<Suggestion>
    where
        S: AsRef<str> + Sync,
    {
        let mut scored: Vec<Suggestion> = universe
            .par_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                normalized_score(query, name).map(|score| Suggestion {
                    name: name.to_string(),
                    score,
                })
            })
            .collect();

        scored.sort_by(|a, b| a.score.total_cmp(&b.score));
        scored.truncate(self.limit);

        debug!("Ranked {} suggestions for {:?}", scored.len(), query);
        scored
    }

    /// Same as [`rank_scored`](Self::rank_scored) but only the names.
    pub fn rank<S>(&self, query: &str, universe: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        self.rank_scored(query, universe)
            .into_iter()
            .map(|s| s.name)
            .collect()
    }
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank with the default limit of 10.
pub fn rank<S>(query: &str, universe: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    SuggestionRanker::new().rank(query, universe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("category{}", i)).collect()
    }

    #[test]
    fn test_result_size_is_capped() {
        assert_eq!(rank("cat", &universe(25)).len(), 10);
        assert_eq!(rank("cat", &universe(10)).len(), 10);
        assert_eq!(rank("cat", &universe(3)).len(), 3);
        assert!(rank("cat", &Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_empty_query_keeps_universe_order() {
        let ranker = SuggestionRanker::new();
        let scored = ranker.rank_scored("", &["Go", "Rust"]);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].name, "Go");
        assert_eq!(scored[1].name, "Rust");
        assert!(scored.iter().all(|s| s.score == 1.0));
    }

    #[test]
    fn test_closest_first() {
        let names = ["TypeScript", "Rust", "Ruby", "Go"];
        let ranked = rank("rust", &names);

        assert_eq!(ranked[0], "Rust");
        // "ruby": distance 2 / 4 = 0.5, ahead of Go (1.0) and TypeScript
        assert_eq!(ranked[1], "Ruby");
    }

    #[test]
    fn test_ties_keep_universe_order() {
        // both are distance 1 from "ab" with length 2
        let ranked = rank("ab", &["ax", "xb", "ab"]);
        assert_eq!(ranked, vec!["ab", "ax", "xb"]);
    }

    #[test]
    fn test_empty_query_ties_with_expanding_lowercase() {
        let scored = SuggestionRanker::new().rank_scored("", &["İstanbul", "Go"]);

        assert!(scored.iter().all(|s| s.score == 1.0));
        assert_eq!(scored[0].name, "İstanbul");
        assert_eq!(scored[1].name, "Go");
    }

    #[test]
    fn test_empty_names_are_skipped() {
        let ranked = rank("go", &["", "Go", ""]);
        assert_eq!(ranked, vec!["Go"]);
    }

    #[test]
    fn test_custom_limit() {
        let ranker = SuggestionRanker::new().with_limit(2);
        assert_eq!(ranker.limit(), 2);
        assert_eq!(ranker.rank("c", &universe(5)).len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let names = universe(40);
        let first = rank("categ", &names);
        for _ in 0..5 {
            assert_eq!(rank("categ", &names), first);
        }
    }
}
