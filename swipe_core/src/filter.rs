//! `filter`: candidate post-processing (sort, dedupe, truncate).

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::Candidate;

/// Filter: reshape a candidate list (sort, dedupe, cut).
pub trait Filter: Send + Sync {
    fn apply(&self, candidates: Vec<Candidate>) -> Vec<Candidate>;
}

/// Default filter: stable sort by score descending, keep the first occurrence of each word, cut to `limit`.
///
/// Equal scores keep discovery order, so the dictionary's authored order
/// breaks ties.
pub struct DedupSortTruncate {
    pub limit: usize,
}

impl Filter for DedupSortTruncate {
    fn apply(&self, mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        if self.limit == 0 {
            return Vec::new();
        }
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let mut seen: HashSet<String> = HashSet::new();
        let mut out = Vec::with_capacity(self.limit.min(candidates.len()));
        for c in candidates {
            if seen.insert(c.word.clone()) {
                out.push(c);
                if out.len() >= self.limit {
                    break;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CandidateSource;

    fn cand(word: &str, score: f64) -> Candidate {
        Candidate {
            word: word.to_string(),
            score,
            source: CandidateSource::Fuzzy,
            key: None,
        }
    }

    fn words(cands: &[Candidate]) -> Vec<&str> {
        cands.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn sorts_descending_and_keeps_ties_in_order() {
        let out = DedupSortTruncate { limit: 10 }.apply(vec![
            cand("b", 0.5),
            cand("a", 0.9),
            cand("c", 0.5),
            cand("d", 0.7),
        ]);
        assert_eq!(words(&out), ["a", "d", "b", "c"]);
    }

    #[test]
    fn keeps_highest_scored_occurrence() {
        let out = DedupSortTruncate { limit: 10 }.apply(vec![
            cand("help", 0.45),
            cand("hello", 0.6),
            cand("help", 0.8),
        ]);
        assert_eq!(words(&out), ["help", "hello"]);
        assert_eq!(out[0].score, 0.8);
    }

    #[test]
    fn truncates_after_dedupe() {
        let out = DedupSortTruncate { limit: 2 }.apply(vec![
            cand("x", 0.9),
            cand("x", 0.8),
            cand("y", 0.7),
            cand("z", 0.6),
        ]);
        assert_eq!(words(&out), ["x", "y"]);
        assert!(DedupSortTruncate { limit: 0 }.apply(vec![cand("x", 1.0)]).is_empty());
    }
}
