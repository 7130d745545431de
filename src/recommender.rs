use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::{SuggestionConfig, validate_threshold};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::similarity::{common_percent, similarity};

fn char_len(word: &str) -> usize {
    word.chars().count()
}

fn within_length_window(query_len: usize, candidate: &str, n: usize) -> bool {
    char_len(candidate).abs_diff(query_len) <= n
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub similarity: f64,
    pub common_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestedCorrection {
    /// The word is already in the dictionary.
    Known,
    NoSuggestions,
    Suggestions(Vec<Suggestion>),
}

/// Proposes replacements for misspelled words from a shared dictionary.
#[derive(Debug, Clone)]
pub struct WordRecommender {
    dictionary: Arc<Dictionary>,
}

impl WordRecommender {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        WordRecommender { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Dictionary words within `n` characters of the query's length whose
    /// character-set overlap with it is at least `threshold`, in dictionary order.
    pub fn filter_candidates(&self, query: &str, n: usize, threshold: f64) -> Result<Vec<&str>> {
        validate_threshold(threshold)?;
        let query_len = char_len(query);
        Ok(self
            .dictionary
            .iter()
            .filter(|word| {
                within_length_window(query_len, word, n) && common_percent(query, word) >= threshold
            })
            .collect())
    }

    /// Up to `top_n` candidates ranked by descending positional similarity.
    ///
    /// Equal scores keep dictionary order. An empty query or dictionary yields
    /// an empty list.
    pub fn suggest(
        &self,
        word: &str,
        n: usize,
        threshold: f64,
        top_n: usize,
    ) -> Result<Vec<String>> {
        let config = SuggestionConfig::new(n, threshold, top_n);
        self.suggest_with(word, &config)
    }

    pub fn suggest_with(&self, word: &str, config: &SuggestionConfig) -> Result<Vec<String>> {
        Ok(self
            .suggest_scored(word, config)?
            .into_iter()
            .map(|s| s.word)
            .collect())
    }

    pub fn suggest_scored(&self, word: &str, config: &SuggestionConfig) -> Result<Vec<Suggestion>> {
        config.validate()?;
        if word.is_empty() {
            return Ok(Vec::new());
        }

        let candidates =
            self.filter_candidates(word, config.max_length_delta, config.min_common_percent)?;
        debug!("{} candidates for {:?}", candidates.len(), word);

        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .map(|candidate| Suggestion {
                word: candidate.to_owned(),
                similarity: similarity(word, candidate),
                common_percent: common_percent(word, candidate),
            })
            .collect();

        // stable: ties stay in dictionary order
        suggestions.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        suggestions.truncate(config.max_suggestions);

        Ok(suggestions)
    }

    /// Membership check followed, for unknown words, by a suggestion lookup.
    pub fn check(&self, word: &str, config: &SuggestionConfig) -> Result<SuggestedCorrection> {
        if self.dictionary.contains(word) {
            return Ok(SuggestedCorrection::Known);
        }
        let suggestions = self.suggest_scored(word, config)?;
        if suggestions.is_empty() {
            Ok(SuggestedCorrection::NoSuggestions)
        } else {
            Ok(SuggestedCorrection::Suggestions(suggestions))
        }
    }

    /// Runs [`check`](Self::check) over many words in parallel. Results follow input order.
    pub fn suggest_many<S>(
        &self,
        words: &[S],
        config: &SuggestionConfig,
    ) -> Result<Vec<SuggestedCorrection>>
    where
        S: AsRef<str> + Sync,
    {
        config.validate()?;
        words
            .par_iter()
            .map(|word| self.check(word.as_ref(), config))
            .collect()
    }
}

/// The candidate most similar to `query`; the earliest one wins a tie.
pub fn most_similar<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates.iter().map(AsRef::as_ref) {
        let score = similarity(query, candidate);
        match best {
            Some((_, max)) if score <= max => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(word, _)| word)
}

/// Renders a 1-indexed list, one `"{index}. {word}"` entry per line.
pub fn format_numbered<S: AsRef<str>>(list: &[S]) -> String {
    list.iter()
        .enumerate()
        .map(|(i, word)| format!("{}. {}", i + 1, word.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
