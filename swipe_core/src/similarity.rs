//! `similarity`: how close a swipe pattern is to a dictionary key.
//!
//! The score mixes four signals (weights sum to 1):
//! - first/last letter agreement: 0.4 × (0.2 + 0.2)
//! - letters found in order (greedy, left to right): 0.3
//! - letters shared regardless of order (multiset): 0.2
//! - length agreement: 0.1
//!
//! The function is not symmetric: `input` is the swiped pattern, `candidate`
//! the dictionary key.

const SINGLE_LETTER_SCORE: f64 = 0.9;
const EDGE_BONUS: f64 = 0.2;

const EDGE_WEIGHT: f64 = 0.4;
const ORDER_WEIGHT: f64 = 0.3;
const SHARED_WEIGHT: f64 = 0.2;
const LENGTH_WEIGHT: f64 = 0.1;

/// Score `input` against `candidate`, in [0, 1]. Case-insensitive; empty strings score low instead of panicking.
pub fn calculate_similarity(input: &str, candidate: &str) -> f64 {
    let s1: Vec<char> = input.to_uppercase().chars().collect();
    let s2: Vec<char> = candidate.to_uppercase().chars().collect();

    if s1.len() == 1 {
        return if s2.first() == Some(&s1[0]) {
            SINGLE_LETTER_SCORE
        } else {
            0.0
        };
    }

    let first_bonus = edge_bonus(s1.first(), s2.first());
    let last_bonus = edge_bonus(s1.last(), s2.last());

    let denom = s1.len().max(1) as f64;
    let order_similarity = ordered_matches(&s1, &s2) as f64 / denom;
    let shared_similarity = shared_chars(&s1, &s2) as f64 / denom;

    let longest = s1.len().max(s2.len()).max(1) as f64;
    let length_factor = 1.0 - s1.len().abs_diff(s2.len()) as f64 / longest;

    (first_bonus + last_bonus) * EDGE_WEIGHT
        + order_similarity * ORDER_WEIGHT
        + shared_similarity * SHARED_WEIGHT
        + length_factor * LENGTH_WEIGHT
}

fn edge_bonus(a: Option<&char>, b: Option<&char>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => EDGE_BONUS,
        _ => 0.0,
    }
}

/// Each input letter is searched strictly after the previous hit.
fn ordered_matches(input: &[char], candidate: &[char]) -> usize {
    let mut matches = 0;
    let mut next_from = 0;
    for ch in input {
        if let Some(offset) = candidate[next_from.min(candidate.len())..]
            .iter()
            .position(|c| c == ch)
        {
            matches += 1;
            next_from += offset + 1;
        }
    }
    matches
}

/// Multiset intersection size: every candidate letter is usable once.
fn shared_chars(input: &[char], candidate: &[char]) -> usize {
    let mut pool: Vec<char> = candidate.to_vec();
    let mut shared = 0;
    for ch in input {
        if let Some(idx) = pool.iter().position(|c| c == ch) {
            pool.remove(idx);
            shared += 1;
        }
    }
    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_letter_checks_only_the_first_key_letter() {
        assert_eq!(calculate_similarity("A", "APPLE"), 0.9);
        assert_eq!(calculate_similarity("B", "APPLE"), 0.0);
        assert_eq!(calculate_similarity("a", "AN"), 0.9);
        assert_eq!(calculate_similarity("A", ""), 0.0);
    }

    #[test]
    fn known_scores() {
        assert!(approx(calculate_similarity("TH", "THE"), 0.6466666666666667));
        assert!(approx(calculate_similarity("HELO", "HELLO"), 0.74));
        assert!(approx(calculate_similarity("THE", "THE"), 0.76));
        assert!(approx(calculate_similarity("WTR", "WATER"), 0.72));
        assert!(approx(calculate_similarity("XQZ", "XC"), 0.31333333333333335));
        assert!(approx(calculate_similarity("ABC", "CBA"), 0.4));
    }

    #[test]
    fn empty_strings_do_not_panic() {
        assert_eq!(calculate_similarity("AB", ""), 0.0);
        assert!(approx(calculate_similarity("", ""), 0.1));
        assert!(approx(calculate_similarity("", "AB"), 0.0));
    }

    #[test]
    fn order_match_is_greedy_and_monotonic() {
        assert_eq!(ordered_matches(&['A', 'B', 'A'], &['A', 'B', 'A']), 3);
        // the second A is searched after B, so it is not found
        assert_eq!(ordered_matches(&['A', 'B', 'A'], &['A', 'B']), 2);
        assert_eq!(ordered_matches(&['C', 'A'], &['A', 'C']), 1);
    }

    #[test]
    fn shared_chars_uses_each_candidate_letter_once() {
        assert_eq!(shared_chars(&['L', 'L', 'L'], &['L', 'L']), 2);
        assert_eq!(shared_chars(&['C', 'B', 'A'], &['A', 'B', 'C']), 3);
    }

    #[test]
    fn self_similarity_beats_distinct_keys() {
        let own = calculate_similarity("HELP", "HELP");
        for other in ["HE", "HEAL", "PLEH", "WATER", "HELPFULLY"] {
            assert!(own > calculate_similarity("HELP", other), "HELP vs {other}");
        }
    }
}
