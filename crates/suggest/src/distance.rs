//! Edit distance between a query and a category name.
//!
//! Plain Levenshtein: insertions, deletions and substitutions all cost 1.
//! Comparison is case-insensitive and counts Unicode scalar values, so
//! "Rust" and "rust" are distance 0 and "日本" has length 2. Lengths are
//! taken after lowercasing, so a name like "İ" (lowercased to "i̇") has
//! length 2 for both the distance and the normalization.

/// Lowercased chars, the unit both distance and length are measured in.
fn lowered(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

/// Levenshtein distance between `a` and `b`, ignoring case.
///
/// ## Algorithm
/// Fills a `(len(a)+1) × (len(b)+1)` table where `cell(i, j)` is the distance
/// between the first `i` chars of `a` and the first `j` chars of `b`:
/// - `cell(i, 0) = i`, `cell(0, j) = j`
/// - equal chars: `cell(i, j) = cell(i-1, j-1)`
/// - otherwise: `1 + min(cell(i-1, j), cell(i, j-1), cell(i-1, j-1))`
pub fn distance(a: &str, b: &str) -> usize {
    distance_chars(&lowered(a), &lowered(b))
}

fn distance_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let width = b.len() + 1;
    // Row-major table, cell(i, j) lives at i * width + j
    let mut table = vec![0usize; (a.len() + 1) * width];

    for i in 0..=a.len() {
        table[i * width] = i;
    }
    for j in 0..=b.len() {
        table[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i * width + j] = if a[i - 1] == b[j - 1] {
                table[(i - 1) * width + (j - 1)]
            } else {
                1 + table[(i - 1) * width + j]
                    .min(table[i * width + (j - 1)])
                    .min(table[(i - 1) * width + (j - 1)])
            };
        }
    }

    table[a.len() * width + b.len()]
}

/// Length-normalized dissimilarity of `query` against `category`.
///
/// `distance(query, category) / len(category)`; lower is more similar and
/// 0.0 is an exact (case-insensitive) match. Returns `None` for an empty
/// category name, which has no meaningful score.
pub fn normalized_score(query: &str, category: &str) -> Option<f64> {
    let category = lowered(category);
    if category.is_empty() {
        return None;
    }
    let distance = distance_chars(&lowered(query), &category);
    Some(distance as f64 / category.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for s in ["", "a", "Rust", "Next.js", "日本語"] {
            assert_eq!(distance(s, s), 0);
        }
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("Go", "Rust"), 4);
    }

    #[test]
    fn test_symmetry() {
        let words = ["kitten", "sitting", "", "Web3", "webdev", "TypeScript"];
        for a in words {
            for b in words {
                assert_eq!(distance(a, b), distance(b, a), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(distance("RUST", "rust"), 0);
        assert_eq!(distance("TypeScript", "typescrip"), 1);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(distance("日本", "日本語"), 1);
        assert_eq!(distance("", "カテゴリ"), 4);
    }

    #[test]
    fn test_normalized_score() {
        assert_eq!(normalized_score("rust", "Rust"), Some(0.0));
        assert_eq!(normalized_score("", "Go"), Some(1.0));
        assert_eq!(normalized_score("rus", "Rust"), Some(0.25));
    }

    #[test]
    fn test_normalized_score_uses_lowercased_length() {
        // "İ" lowercases to two chars: 'i' + combining dot above
        assert_eq!(normalized_score("", "İstanbul"), Some(1.0));
        assert_eq!(normalized_score("İstanbul", "İstanbul"), Some(0.0));
        assert_eq!(distance("", "İstanbul"), 9);
    }

    #[test]
    fn test_normalized_score_empty_category() {
        assert_eq!(normalized_score("anything", ""), None);
        assert_eq!(normalized_score("", ""), None);
    }
}
