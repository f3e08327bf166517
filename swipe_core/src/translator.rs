//! `translator`: turn a swipe pattern into scored candidates.
//!
//! Current implementation:
//! - `PatternTranslator`: scores every dictionary key with
//!   `calculate_similarity` and emits the words of each key above the
//!   threshold, all carrying that key's score

use crate::{
    dictionary::PatternDictionary,
    model::{Candidate, CandidateSource},
    similarity::calculate_similarity,
};

/// Keys must score strictly above this to contribute words.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.4;

/// Translator: pattern -> unsorted candidates (may contain repeated words).
pub trait Translator: Send + Sync {
    fn translate(&self, pattern: &str) -> Vec<Candidate>;
}

/// Fuzzy scan over a dictionary.
pub struct PatternTranslator<'a, D: ?Sized> {
    /// Dictionary being scanned
    pub dict: &'a D,
    /// Minimum key score (exclusive)
    pub threshold: f64,
}

impl<'a, D> PatternTranslator<'a, D>
where
    D: PatternDictionary + ?Sized,
{
    /// Candidates in discovery order: keys in authored order, words in entry order.
    ///
    /// A word listed under several qualifying keys is emitted once per key;
    /// the filter keeps the best one.
    pub fn scan(&self, pattern: &str) -> Vec<Candidate> {
        let mut out = Vec::new();
        for entry in self.dict.entries() {
            let score = calculate_similarity(pattern, &entry.key);
            if score <= self.threshold {
                continue;
            }
            out.extend(entry.words.iter().map(|w| Candidate {
                word: w.clone(),
                score,
                source: CandidateSource::Fuzzy,
                key: Some(entry.key.clone()),
            }));
        }
        out
    }
}

impl<'a, D> Translator for PatternTranslator<'a, D>
where
    D: PatternDictionary + ?Sized,
{
    fn translate(&self, pattern: &str) -> Vec<Candidate> {
        self.scan(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PatternEntry;

    #[test]
    fn only_keys_above_threshold_contribute() {
        let dict = vec![
            PatternEntry::new("HELP", ["help", "helper"]),
            PatternEntry::new("WATER", ["water"]),
        ];
        let t = PatternTranslator {
            dict: &dict,
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        };
        let out = t.translate("HLP");
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|c| c.key.as_deref() == Some("HELP")));
        assert!(out.iter().all(|c| c.score > DEFAULT_SIMILARITY_THRESHOLD));
    }

    #[test]
    fn threshold_is_exclusive() {
        // ABC vs CBA scores exactly 0.4
        let dict = vec![PatternEntry::new("CBA", ["cab"])];
        let t = PatternTranslator {
            dict: &dict,
            threshold: 0.4,
        };
        assert!(t.translate("ABC").is_empty());
    }
}
