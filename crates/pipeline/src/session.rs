//! A visitor's search session.
//!
//! Owns everything the landing page used to keep as component state: the
//! query being typed, the chosen keywords and the combination mode. The
//! category universe and post listing are passed in by the caller on each
//! call, so the session never goes stale against a reloaded catalog.

use crate::context::{CombinationMode, FilterContext, MatchCase};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::KeywordFilter;
use anyhow::Result;
use catalog::PostSummary;
use suggest::{KeywordSet, Suggestion, SuggestionRanker};
use tracing::debug;

/// Query text, keyword set and mode for one interactive session.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    keywords: KeywordSet,
    mode: CombinationMode,
    ranker: SuggestionRanker,
    match_case: MatchCase,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a differently configured ranker (e.g. another limit)
    pub fn with_ranker(mut self, ranker: SuggestionRanker) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_match_case(mut self, match_case: MatchCase) -> Self {
        self.match_case = match_case;
        self
    }

    pub fn with_mode(mut self, mode: CombinationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn mode(&self) -> CombinationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CombinationMode) {
        self.mode = mode;
    }

    pub fn match_case(&self) -> MatchCase {
        self.match_case
    }

    /// Closest category names to the current query.
    pub fn suggestions<S>(&self, universe: &[S]) -> Vec<Suggestion>
    where
        S: AsRef<str> + Sync,
    {
        self.ranker.rank_scored(&self.query, universe)
    }

    /// Add a keyword (usually a clicked suggestion) and clear the query.
    ///
    /// Returns `true` if the keyword was new.
    pub fn select(&mut self, keyword: impl Into<String>) -> bool {
        let added = self.keywords.add(keyword);
        self.query.clear();
        added
    }

    /// Drop a keyword. Returns `true` if it was present.
    pub fn deselect(&mut self, keyword: &str) -> bool {
        self.keywords.remove(keyword)
    }

    pub fn clear_keywords(&mut self) {
        self.keywords.clear();
    }

    /// Snapshot of the filter inputs
    pub fn context(&self) -> FilterContext {
        FilterContext::new(self.keywords.clone(), self.mode)
    }

    /// Posts passing the current keywords and mode, in listing order.
    pub fn results(&self, posts: &[PostSummary]) -> Result<Vec<PostSummary>> {
        let pipeline = FilterPipeline::new().add_filter(KeywordFilter::new(self.match_case));
        let results = pipeline.apply(posts.to_vec(), &self.context())?;
        debug!(
            "Session filter kept {} of {} posts ({} keywords, {:?})",
            results.len(),
            posts.len(),
            self.keywords.len(),
            self.mode
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts() -> Vec<PostSummary> {
        vec![
            PostSummary::with_category_names("P1", ["Go", "Web"]),
            PostSummary::with_category_names("P2", ["Rust"]),
            PostSummary::with_category_names("P3", ["Web3"]),
        ]
    }

    fn ids(posts: &[PostSummary]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_new_session_shows_everything() {
        let session = SearchSession::new();
        assert_eq!(session.query(), "");
        assert_eq!(session.mode(), CombinationMode::Any);
        assert_eq!(ids(&session.results(&posts()).unwrap()), vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_select_clears_query() {
        let mut session = SearchSession::new();
        session.set_query("rus");

        let universe = ["Go", "Web", "Rust", "Web3"];
        let top = session.suggestions(&universe)[0].name.clone();
        assert_eq!(top, "Rust");

        assert!(session.select(top));
        assert_eq!(session.query(), "");
        assert_eq!(ids(&session.results(&posts()).unwrap()), vec!["P2"]);
    }

    #[test]
    fn test_select_twice_and_deselect() {
        let mut session = SearchSession::new();
        assert!(session.select("Go"));
        assert!(!session.select("Go"));
        assert_eq!(session.keywords().len(), 1);

        assert!(session.deselect("Go"));
        assert!(!session.deselect("Go"));
        assert!(session.keywords().is_empty());
    }

    #[test]
    fn test_mode_switch() {
        let mut session = SearchSession::new();
        session.select("Go");
        session.select("Rust");
        assert_eq!(ids(&session.results(&posts()).unwrap()), vec!["P1", "P2"]);

        session.set_mode(CombinationMode::All);
        assert!(session.results(&posts()).unwrap().is_empty());
    }

    #[test]
    fn test_case_insensitive_session() {
        let mut session = SearchSession::new().with_match_case(MatchCase::Insensitive);
        session.select("web");
        assert_eq!(ids(&session.results(&posts()).unwrap()), vec!["P1", "P3"]);
    }

    #[test]
    fn test_ranker_limit() {
        let session = SearchSession::new().with_ranker(SuggestionRanker::new().with_limit(1));
        assert_eq!(session.suggestions(&["Go", "Rust"]).len(), 1);
    }

    #[test]
    fn test_clear_keywords() {
        let mut session = SearchSession::new().with_mode(CombinationMode::All);
        session.select("Go");
        session.select("Web");
        session.clear_keywords();
        assert_eq!(session.results(&posts()).unwrap().len(), 3);
        assert_eq!(session.context().mode, CombinationMode::All);
    }
}
