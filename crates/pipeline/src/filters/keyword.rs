//! Filter posts by the active keyword set.
//!
//! A keyword matches a category when the category name *contains* it, so
//! "web" matches "webdev". An empty keyword set lets every post through.

use crate::context::{CombinationMode, FilterContext, MatchCase};
use crate::traits::PostFilter;
use anyhow::Result;
use catalog::PostSummary;
use suggest::KeywordSet;

/// Does `post` pass `keywords` under `mode`?
///
/// - `Any`: some category name contains some keyword
/// - `All`: every keyword is contained in some category name
pub fn post_matches(
    post: &PostSummary,
    keywords: &KeywordSet,
    mode: CombinationMode,
    match_case: MatchCase,
) -> bool {
    if keywords.is_empty() {
        return true;
    }

    let keyword_hit = |keyword: &str| {
        post.category_names()
            .any(|name| match_case.contains(name, keyword))
    };

    match mode {
        CombinationMode::Any => keywords.iter().any(keyword_hit),
        CombinationMode::All => keywords.iter().all(keyword_hit),
    }
}

/// Borrowing, case-sensitive filter over a post slice.
///
/// Result keeps the relative order of `posts`.
pub fn filter_posts<'a>(
    posts: &'a [PostSummary],
    keywords: &KeywordSet,
    mode: CombinationMode,
) -> Vec<&'a PostSummary> {
    posts
        .iter()
        .filter(|post| post_matches(post, keywords, mode, MatchCase::Sensitive))
        .collect()
}

/// Keeps posts whose categories match the context's keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordFilter {
    match_case: MatchCase,
}

impl KeywordFilter {
    pub fn new(match_case: MatchCase) -> Self {
        Self { match_case }
    }
}

impl PostFilter for KeywordFilter {
    fn name(&self) -> &str {
        "KeywordFilter"
    }

    fn apply(&self, posts: Vec<PostSummary>, context: &FilterContext) -> Result<Vec<PostSummary>> {
        let filtered: Vec<PostSummary> = posts
            .into_iter()
            .filter(|post| post_matches(post, &context.keywords, context.mode, self.match_case))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posts() -> Vec<PostSummary> {
        vec![
            PostSummary::with_category_names("P1", ["Go", "Web"]),
            PostSummary::with_category_names("P2", ["Rust"]),
            PostSummary::with_category_names("P3", ["Web3"]),
        ]
    }

    fn ids(posts: &[&PostSummary]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    fn keywords(words: &[&str]) -> KeywordSet {
        words.iter().copied().collect()
    }

    #[test]
    fn test_empty_keywords_pass_everything() {
        let posts = sample_posts();
        for mode in [CombinationMode::Any, CombinationMode::All] {
            let filtered = filter_posts(&posts, &KeywordSet::new(), mode);
            assert_eq!(ids(&filtered), vec!["P1", "P2", "P3"]);
        }
    }

    #[test]
    fn test_any_substring_match() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, &keywords(&["Web"]), CombinationMode::Any);
        assert_eq!(ids(&filtered), vec!["P1", "P3"]);
    }

    #[test]
    fn test_all_requires_every_keyword() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, &keywords(&["Go", "Rust"]), CombinationMode::All);
        assert!(filtered.is_empty());

        let filtered = filter_posts(&posts, &keywords(&["Go", "Web"]), CombinationMode::All);
        assert_eq!(ids(&filtered), vec!["P1"]);
    }

    #[test]
    fn test_any_matches_either_keyword() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, &keywords(&["Go", "Rust"]), CombinationMode::Any);
        assert_eq!(ids(&filtered), vec!["P1", "P2"]);
    }

    #[test]
    fn test_all_keywords_may_hit_same_category() {
        // "We" and "b3" are both inside "Web3"
        let posts = sample_posts();
        let filtered = filter_posts(&posts, &keywords(&["We", "b3"]), CombinationMode::All);
        assert_eq!(ids(&filtered), vec!["P3"]);
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, &keywords(&["web"]), CombinationMode::Any);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_case_insensitive_filter() {
        let filter = KeywordFilter::new(MatchCase::Insensitive);
        let context = FilterContext::new(keywords(&["web"]), CombinationMode::Any);

        let filtered = filter.apply(sample_posts(), &context).unwrap();
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P3"]);
    }

    #[test]
    fn test_post_without_categories() {
        let post = PostSummary::with_category_names("P4", Vec::<String>::new());

        assert!(post_matches(&post, &KeywordSet::new(), CombinationMode::All, MatchCase::Sensitive));
        assert!(!post_matches(&post, &keywords(&["Go"]), CombinationMode::Any, MatchCase::Sensitive));
        assert!(!post_matches(&post, &keywords(&["Go"]), CombinationMode::All, MatchCase::Sensitive));
    }

    #[test]
    fn test_filter_does_not_mutate_posts() {
        let posts = sample_posts();
        let before = posts.clone();
        let _ = filter_posts(&posts, &keywords(&["Web"]), CombinationMode::Any);
        assert_eq!(posts, before);
    }
}
