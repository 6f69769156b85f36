//! Top-language breakdown by repository count.

use std::collections::HashMap;

use crate::github::Repository;

/// Maximum number of languages surfaced on the card.
pub const TOP_LANGUAGES_COUNT: usize = 6;

/// One language's share of the user's classified repositories.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    /// Repositories whose primary language is `language`.
    pub count: u32,
    /// Share of all classified repositories, rounded to one decimal place.
    pub percentage: f64,
}

/// Rank languages by how many repositories use them as primary language.
///
/// Repositories without a primary language count towards neither a language
/// nor the total.  Languages are ordered by count descending; equal counts
/// keep the order in which the languages were first seen.  At most
/// [`TOP_LANGUAGES_COUNT`] entries are returned, and none at all when no
/// repository has a language.
pub fn compute_language_shares(repos: &[Repository]) -> Vec<LanguageShare> {
    // Insertion-ordered tally: `order` preserves first-seen order, `index`
    // maps a name to its slot.
    let mut order: Vec<(&str, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for lang in repos.iter().filter_map(Repository::language) {
        match index.get(lang) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(lang, order.len());
                order.push((lang, 1));
            }
        }
    }

    let total: u32 = order.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Vec::new();
    }

    // `sort_by` is stable, which gives the first-seen tie-break.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(TOP_LANGUAGES_COUNT);

    order
        .into_iter()
        .map(|(language, count)| LanguageShare {
            language: language.to_owned(),
            count,
            percentage: round1(count as f64 / total as f64 * 100.0),
        })
        .collect()
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Language;

    fn repo(lang: Option<&str>) -> Repository {
        Repository {
            stargazer_count: 0,
            primary_language: lang.map(|name| Language {
                name: name.to_owned(),
            }),
        }
    }

    fn repos(langs: &[&str]) -> Vec<Repository> {
        langs.iter().map(|l| repo(Some(l))).collect()
    }

    fn names(shares: &[LanguageShare]) -> Vec<&str> {
        shares.iter().map(|s| s.language.as_str()).collect()
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert!(compute_language_shares(&[]).is_empty());
    }

    #[test]
    fn no_known_language_gives_empty_list() {
        let shares = compute_language_shares(&[repo(None), repo(None)]);
        assert!(shares.is_empty());
    }

    #[test]
    fn sorted_by_count_descending() {
        let shares =
            compute_language_shares(&repos(&["Go", "Rust", "Rust", "Python", "Rust", "Go"]));
        assert_eq!(names(&shares), vec!["Rust", "Go", "Python"]);
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[1].count, 2);
        assert_eq!(shares[2].count, 1);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let shares =
            compute_language_shares(&repos(&["Shell", "Ruby", "CSS", "Ruby", "CSS", "Shell"]));
        assert_eq!(names(&shares), vec!["Shell", "Ruby", "CSS"]);
    }

    #[test]
    fn unclassified_repos_excluded_from_total() {
        let shares = compute_language_shares(&[
            repo(Some("Rust")),
            repo(None),
            repo(Some("Go")),
            repo(None),
        ]);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].percentage, 50.0);
        assert_eq!(shares[1].percentage, 50.0);
    }

    #[test]
    fn percentages_rounded_to_one_decimal() {
        let shares = compute_language_shares(&repos(&["A", "B", "B"]));
        assert_eq!(shares[0].language, "B");
        assert_eq!(shares[0].percentage, 66.7);
        assert_eq!(shares[1].percentage, 33.3);
    }

    #[test]
    fn capped_at_top_six() {
        let langs = ["A", "B", "C", "D", "E", "F", "G", "H", "A", "B"];
        let shares = compute_language_shares(&repos(&langs));
        assert_eq!(shares.len(), TOP_LANGUAGES_COUNT);
        assert_eq!(names(&shares), vec!["A", "B", "C", "D", "E", "F"]);
        // Percentages are still against the full total of 10.
        assert_eq!(shares[0].percentage, 20.0);
        assert_eq!(shares[5].percentage, 10.0);
    }

    #[test]
    fn percentages_sum_to_roughly_100_when_all_classified() {
        let cases: [&[&str]; 4] = [
            &["Rust"],
            &["Rust", "Go", "Go"],
            &["A", "B", "C"],
            &["A", "A", "B", "C", "C", "C", "D"],
        ];
        for langs in cases {
            let shares = compute_language_shares(&repos(langs));
            let sum: f64 = shares.iter().map(|s| s.percentage).sum();
            assert!((sum - 100.0).abs() <= 0.05 * shares.len() as f64, "{langs:?} summed to {sum}");
        }
    }

    #[test]
    fn counts_are_non_increasing() {
        let langs = ["C", "B", "A", "B", "C", "C", "D", "E", "F", "G", "A", "A", "A"];
        let shares = compute_language_shares(&repos(&langs));
        assert!(shares.len() <= TOP_LANGUAGES_COUNT);
        assert!(shares.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
