//! Word similarity measures.
//!
//! Both measures work on `char`s and are case-sensitive. Neither one is an edit
//! distance: [`similarity`] counts positional matches and [`common_percent`]
//! compares the sets of distinct characters.

use std::collections::HashSet;

fn distinct_chars(word: &str) -> HashSet<char> {
    word.chars().collect()
}

/// Positional similarity of two words.
///
/// Counts equal characters at equal offsets from the start, then from the end,
/// over the length of the shorter word, and returns the mean of both counts.
/// The result is an absolute count, so `similarity(w, w)` equals the length of `w`.
pub fn similarity(w1: &str, w2: &str) -> f64 {
    let left = w1.chars().zip(w2.chars()).filter(|(a, b)| a == b).count();
    let right = w1
        .chars()
        .rev()
        .zip(w2.chars().rev())
        .filter(|(a, b)| a == b)
        .count();
    (left + right) as f64 / 2.0
}

/// Jaccard index of the distinct characters of two words.
///
/// Returns 0.0 when neither word has any characters.
pub fn common_percent(w1: &str, w2: &str) -> f64 {
    let d1 = distinct_chars(w1);
    let d2 = distinct_chars(w2);
    let common = d1.intersection(&d2).count();
    let union = d1.len() + d2.len() - common;
    if union == 0 {
        return 0.0;
    }
    common as f64 / union as f64
}

/// Number of distinct characters the two words have in common.
pub fn shared_letter_count(w1: &str, w2: &str) -> usize {
    count_shared(&distinct_chars(w1), w2)
}

fn count_shared(letters: &HashSet<char>, word: &str) -> usize {
    distinct_chars(word)
        .iter()
        .filter(|c| letters.contains(c))
        .count()
}

/// Keeps the words sharing at least `n` distinct characters with `query`, in input order.
pub fn words_with_shared_letters<'a, S: AsRef<str>>(
    query: &str,
    words: &'a [S],
    n: usize,
) -> Vec<&'a str> {
    let query_chars = distinct_chars(query);
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| count_shared(&query_chars, w) >= n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_identical_words() {
        for w in ["a", "hello", "zebra", "straße"] {
            assert_eq!(similarity(w, w), w.chars().count() as f64);
        }
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_similarity_counts_both_ends() {
        // left: e,l,l,o,w = 5, right: w,o,l,l,e = 5
        assert_eq!(similarity("bellow", "yellow"), 5.0);
        // left: e,l,l,o = 4, right: only the middle l = 1
        assert_eq!(similarity("bellow", "hello"), 2.5);
        // left 0, right "oast" = 4
        assert_eq!(similarity("frenchtoast", "roast"), 2.0);
    }

    #[test]
    fn test_similarity_is_not_normalised() {
        assert!(similarity("abcdefgh", "abcdefgh") > similarity("ab", "ab"));
    }

    #[test]
    fn test_similarity_is_case_sensitive() {
        assert_eq!(similarity("Cat", "cat"), 2.0);
    }

    #[test]
    fn test_common_percent_identical() {
        assert_eq!(common_percent("hello", "hello"), 1.0);
        assert_eq!(common_percent("abc", "cba"), 1.0);
    }

    #[test]
    fn test_common_percent_values() {
        // {b,e,l,o,w} vs {h,e,l,o}: 3 shared out of 6
        assert_eq!(common_percent("bellow", "hello"), 0.5);
        assert_eq!(common_percent("abc", "xyz"), 0.0);
        assert_eq!(common_percent("ab", "bc"), 1.0 / 3.0);
    }

    #[test]
    fn test_common_percent_is_symmetric() {
        let pairs = [
            ("sientificaly", "identifications"),
            ("zabra", "zebra"),
            ("hello", "yellow"),
        ];
        for (a, b) in pairs {
            assert_eq!(common_percent(a, b), common_percent(b, a));
        }
    }

    #[test]
    fn test_common_percent_empty_words() {
        assert_eq!(common_percent("", ""), 0.0);
        assert_eq!(common_percent("", "abc"), 0.0);
    }

    #[test]
    fn test_shared_letter_count() {
        assert_eq!(shared_letter_count("cardiovascular", "mange"), 1);
        assert_eq!(shared_letter_count("hello", "yellow"), 3);
    }

    #[test]
    fn test_words_with_shared_letters() {
        let words = ["bang", "mange", "gang", "cling", "loo"];
        assert_eq!(
            words_with_shared_letters("cardiovascular", &words, 2),
            ["cling", "loo"]
        );
        assert_eq!(
            words_with_shared_letters("gnat", &words, 3),
            ["bang", "mange", "gang"]
        );
        assert_eq!(words_with_shared_letters("anything", &words, 0), words);
    }

    #[test]
    fn test_shared_letter_filter_agrees_with_count() {
        let words = ["bang", "mange", "gang", "cling", "loo"];
        for n in 0..5 {
            let expected: Vec<&str> = words
                .iter()
                .copied()
                .filter(|w| shared_letter_count("cardiovascular", w) >= n)
                .collect();
            assert_eq!(words_with_shared_letters("cardiovascular", &words, n), expected);
        }
    }
}
