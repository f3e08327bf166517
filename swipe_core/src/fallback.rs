//! `fallback`: pad a short result list so the user always has something to pick.
//!
//! Tiers, applied in order until `limit` is reached:
//! 1. words of the single-letter entry for the pattern's first key
//! 2. `COMMON_WORDS`, in that literal order

use std::collections::HashSet;

use crate::{
    dictionary::PatternDictionary,
    model::{Candidate, CandidateSource},
};

/// Generic high-frequency words used as the last resort.
pub const COMMON_WORDS: [&str; 8] = ["the", "be", "to", "of", "and", "in", "that", "have"];

/// Appends fallback words to `out` (skipping anything already present) until it holds `limit` words.
pub struct FallbackFill<'a, D: ?Sized> {
    pub dict: &'a D,
    pub limit: usize,
}

impl<'a, D> FallbackFill<'a, D>
where
    D: PatternDictionary + ?Sized,
{
    pub fn apply(&self, pattern: &str, out: &mut Vec<Candidate>) {
        if out.len() >= self.limit {
            return;
        }
        let mut seen: HashSet<String> = out.iter().map(|c| c.word.clone()).collect();

        let letter_key = pattern.chars().next().map(|c| c.to_uppercase().to_string());
        if let Some(key) = letter_key {
            if let Some(words) = self.dict.lookup(&key) {
                self.extend(out, &mut seen, words, CandidateSource::LetterFallback, Some(&key));
            }
        }

        if out.len() < self.limit {
            self.extend(out, &mut seen, &COMMON_WORDS[..], CandidateSource::CommonFallback, None);
        }
    }

    fn extend<W: AsRef<str>>(
        &self,
        out: &mut Vec<Candidate>,
        seen: &mut HashSet<String>,
        words: &[W],
        source: CandidateSource,
        key: Option<&str>,
    ) {
        for w in words {
            if out.len() >= self.limit {
                return;
            }
            let w = w.as_ref();
            if !seen.insert(w.to_string()) {
                continue;
            }
            out.push(Candidate {
                word: w.to_string(),
                score: 0.0,
                source,
                key: key.map(str::to_string),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PatternEntry;

    fn words(cands: &[Candidate]) -> Vec<&str> {
        cands.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn letter_tier_comes_before_common_words() {
        let dict = vec![PatternEntry::new("Q", ["quick", "quiet"])];
        let mut out = Vec::new();
        FallbackFill { dict: &dict, limit: 4 }.apply("QZ", &mut out);
        assert_eq!(words(&out), ["quick", "quiet", "the", "be"]);
        assert_eq!(out[0].source, CandidateSource::LetterFallback);
        assert_eq!(out[2].source, CandidateSource::CommonFallback);
    }

    #[test]
    fn skips_words_already_present() {
        let dict = vec![PatternEntry::new("T", ["to", "the", "this"])];
        let mut out = Vec::new();
        FallbackFill { dict: &dict, limit: 10 }.apply("T", &mut out);
        assert_eq!(
            words(&out),
            ["to", "the", "this", "be", "of", "and", "in", "that", "have"]
        );
    }

    #[test]
    fn full_list_is_left_alone() {
        let dict: Vec<PatternEntry> = Vec::new();
        let mut out = Vec::new();
        FallbackFill { dict: &dict, limit: 3 }.apply("X", &mut out);
        assert_eq!(words(&out), ["the", "be", "to"]);
        FallbackFill { dict: &dict, limit: 3 }.apply("X", &mut out);
        assert_eq!(out.len(), 3);
    }
}
