use crate::dictionary::PatternDictionary;
use crate::fallback::FallbackFill;
use crate::filter::{DedupSortTruncate, Filter};
use crate::model::{Candidate, CandidateSource};
use crate::translator::{DEFAULT_SIMILARITY_THRESHOLD, PatternTranslator, Translator};

/// Suggestions returned when the caller does not ask for a count.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Engine: turns a swipe pattern into ranked, unique suggestions.
///
/// Pipeline:
/// - exact key hit -> the authored list, cut to `max_results` (no scoring)
/// - otherwise translator (fuzzy scan) -> filter (sort/dedupe/cut) -> fallback (pad)
pub struct Engine<D> {
    /// Pattern dictionary (built-in table, TSV file, test fixture...)
    dictionary: D,
    /// Default result count for `suggest`
    max_results: usize,
    /// Keys must score strictly above this to contribute
    similarity_threshold: f64,
}

impl<D> Engine<D>
where
    D: PatternDictionary,
{
    pub fn new(dictionary: D) -> Self {
        Self {
            dictionary,
            max_results: DEFAULT_MAX_RESULTS,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    /// Default result count (0 falls back to `DEFAULT_MAX_RESULTS`).
    pub fn max_results(mut self, n: usize) -> Self {
        self.max_results = if n == 0 { DEFAULT_MAX_RESULTS } else { n };
        self
    }

    /// Threshold for the fuzzy scan; values outside [0, 1] are clamped.
    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = if threshold.is_nan() {
            DEFAULT_SIMILARITY_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn default_max_results(&self) -> usize {
        self.max_results
    }

    /// Shortcut: `find_best_matches` with the engine's default count.
    pub fn suggest(&self, pattern: &str) -> Vec<String> {
        self.find_best_matches(pattern, self.max_results)
    }

    /// Ranked unique words for `pattern`, at most `max_results` of them.
    ///
    /// An empty pattern or `max_results == 0` gives an empty list.
    pub fn find_best_matches(&self, pattern: &str, max_results: usize) -> Vec<String> {
        self.rank(pattern, max_results)
            .into_iter()
            .map(|c| c.word)
            .collect()
    }

    /// Same as `find_best_matches`, keeping scores and where each word came from.
    pub fn rank(&self, pattern: &str, max_results: usize) -> Vec<Candidate> {
        let pattern = pattern.trim().to_uppercase();
        if pattern.is_empty() || max_results == 0 {
            tracing::debug!(%pattern, max_results, "empty prediction request");
            return Vec::new();
        }

        if let Some(words) = self.dictionary.lookup(&pattern) {
            tracing::debug!(%pattern, "exact dictionary hit");
            return words
                .iter()
                .take(max_results)
                .map(|w| Candidate {
                    word: w.clone(),
                    score: 1.0,
                    source: CandidateSource::Exact,
                    key: Some(pattern.clone()),
                })
                .collect();
        }

        // translator: score every key
        let translator = PatternTranslator {
            dict: &self.dictionary,
            threshold: self.similarity_threshold,
        };
        let scanned = translator.translate(&pattern);
        let matched = scanned.len();

        // filter: sort, dedupe, cut
        let mut out = DedupSortTruncate { limit: max_results }.apply(scanned);

        // fallback: pad when the scan found too little
        FallbackFill {
            dict: &self.dictionary,
            limit: max_results,
        }
        .apply(&pattern, &mut out);

        tracing::debug!(%pattern, matched, returned = out.len(), "ranked suggestions");
        out
    }
}
