//! Word list loading and membership checks.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{Result, SpellError};

/// Single-letter words accepted no matter what the word list holds.
const ALWAYS_VALID: [&str; 2] = ["a", "i"];

/// An ordered, immutable list of known words.
///
/// Entries keep their file order and original casing (duplicates included),
/// which is what the ranking works over. Membership checks go through a
/// separate lower-cased index.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    lowercase: HashSet<String>,
}

impl Dictionary {
    /// Reads a word list with one word per line.
    ///
    /// Fails with [`SpellError::Load`] when the file can't be opened or read, so an
    /// empty word list is never confused with a failed load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellError::load(path, e))?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            SpellError::Io(source) => SpellError::load(path, source),
            other => other,
        })?;
        info!("Loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        let mut skipped = 0usize;
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                skipped += 1;
                continue;
            }
            words.push(word.to_owned());
        }
        if skipped > 0 {
            debug!("Skipped {} empty lines in word list", skipped);
        }
        Ok(Self::from_vec(words))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_owned())
            .filter(|w| !w.is_empty())
            .collect();
        Self::from_vec(words)
    }

    fn from_vec(words: Vec<String>) -> Self {
        let lowercase = words.iter().map(|w| w.to_lowercase()).collect();
        Dictionary { words, lowercase }
    }

    /// Case-insensitive membership test.
    ///
    /// "a" and "i" are always valid, even when the list contains neither.
    pub fn contains(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        ALWAYS_VALID.contains(&lowered.as_str()) || self.lowercase.contains(&lowered)
    }

    /// Entries in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
