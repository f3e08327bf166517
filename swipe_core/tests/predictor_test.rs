use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use swipe_core::SwipeError;
use swipe_core::SwipeResult;
use swipe_core::engine::Engine;
use swipe_core::model::PatternEntry;
use swipe_core::predictor::{PredictionMode, PredictionService, RemotePredictor, UnconfiguredRemote};
use swipe_core::sequence::SwipeSequence;

fn fixture() -> Vec<PatternEntry> {
    vec![
        PatternEntry::new("T", ["to", "the", "this"]),
        PatternEntry::new("TH", ["the", "this", "that"]),
        PatternEntry::new("HELP", ["help", "helper"]),
    ]
}

/// Remote that answers with fixed words and counts calls.
struct CannedRemote {
    words: Vec<String>,
    calls: Arc<AtomicUsize>,
}

impl RemotePredictor for CannedRemote {
    fn predict(&self, _sequence: &str, _max_results: usize) -> SwipeResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.words.clone())
    }
}

/// Remote that always fails, like a dropped network connection.
struct FailingRemote {
    calls: Arc<AtomicUsize>,
}

impl RemotePredictor for FailingRemote {
    fn predict(&self, _sequence: &str, _max_results: usize) -> SwipeResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SwipeError::Remote {
            reason: "connection reset".to_string(),
        })
    }
}

#[test]
fn local_mode_uses_engine() {
    let service = PredictionService::new(Engine::new(fixture()), 16);
    assert_eq!(
        service.predict("TH", 2, PredictionMode::Local),
        ["the", "this"]
    );
}

#[test]
fn remote_failure_falls_back_to_local() {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = PredictionService::new(Engine::new(fixture()), 16).with_remote(FailingRemote {
        calls: Arc::clone(&calls),
    });
    let words = service.predict("TH", 3, PredictionMode::Remote);
    assert_eq!(words, ["the", "this", "that"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unconfigured_remote_always_errors() {
    let err = UnconfiguredRemote.predict("TH", 3).unwrap_err();
    assert!(matches!(err, SwipeError::Remote { .. }));

    let service = PredictionService::new(Engine::new(fixture()), 0);
    assert_eq!(
        service.predict("HELP", 3, PredictionMode::Remote),
        ["help", "helper"]
    );
}

#[test]
fn remote_answer_is_truncated() {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = PredictionService::new(Engine::new(fixture()), 16).with_remote(CannedRemote {
        words: vec!["neural".into(), "network".into(), "node".into()],
        calls: Arc::clone(&calls),
    });
    assert_eq!(
        service.predict("NRLNTWRK", 2, PredictionMode::Remote),
        ["neural", "network"]
    );
    // remote answers are not cached
    service.predict("NRLNTWRK", 2, PredictionMode::Remote);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn empty_remote_answer_falls_back_to_local() {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = PredictionService::new(Engine::new(fixture()), 16).with_remote(CannedRemote {
        words: Vec::new(),
        calls: Arc::clone(&calls),
    });
    assert_eq!(
        service.predict("TH", 3, PredictionMode::Remote),
        ["the", "this", "that"]
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn remote_answer_drops_repeats_and_blanks() {
    let service = PredictionService::new(Engine::new(fixture()), 16).with_remote(CannedRemote {
        words: vec!["the".into(), "the".into(), "  ".into(), " this ".into()],
        calls: Arc::new(AtomicUsize::new(0)),
    });
    assert_eq!(service.predict("TH", 3, PredictionMode::Remote), ["the", "this"]);

    let blank_only = PredictionService::new(Engine::new(fixture()), 16).with_remote(CannedRemote {
        words: vec!["the".into(), "the".into(), "  ".into()],
        calls: Arc::new(AtomicUsize::new(0)),
    });
    assert_eq!(blank_only.predict("TH", 3, PredictionMode::Remote), ["the"]);

    let nothing_usable = PredictionService::new(Engine::new(fixture()), 16).with_remote(CannedRemote {
        words: vec!["".into(), "  ".into()],
        calls: Arc::new(AtomicUsize::new(0)),
    });
    assert_eq!(
        nothing_usable.predict("TH", 3, PredictionMode::Remote),
        ["the", "this", "that"]
    );
}

#[test]
fn cache_slots_ignore_case_and_padding() {
    let service = PredictionService::new(Engine::new(fixture()), 16);
    let first = service.predict("TH", 3, PredictionMode::Local);
    assert_eq!(service.predict("th", 3, PredictionMode::Local), first);
    assert_eq!(service.predict(" TH ", 3, PredictionMode::Local), first);
    assert_eq!(service.cached_entries(), 1);

    assert_eq!(PredictionService::new(Engine::new(fixture()), 0).cached_entries(), 0);
}

#[test]
fn cached_and_uncached_results_agree() {
    let cached = PredictionService::new(Engine::new(fixture()), 16);
    let uncached = PredictionService::new(Engine::new(fixture()), 0);
    for pattern in ["T", "TH", "THS", "HLP", "QZ"] {
        let first = cached.predict(pattern, 3, PredictionMode::Local);
        let second = cached.predict(pattern, 3, PredictionMode::Local);
        assert_eq!(first, second);
        assert_eq!(first, uncached.predict(pattern, 3, PredictionMode::Local));
    }
    cached.invalidate_cache();
    assert_eq!(cached.predict("TH", 1, PredictionMode::Local), ["the"]);
}

#[test]
fn cache_key_includes_result_count() {
    let service = PredictionService::new(Engine::new(fixture()), 16);
    assert_eq!(service.predict("TH", 1, PredictionMode::Local).len(), 1);
    assert_eq!(service.predict("TH", 3, PredictionMode::Local).len(), 3);
}

#[test]
fn empty_requests_return_nothing() {
    let service = PredictionService::new(Engine::new(fixture()), 16);
    assert!(service.predict("", 3, PredictionMode::Local).is_empty());
    assert!(service.predict("TH", 0, PredictionMode::Remote).is_empty());
    assert!(
        service
            .predict_sequence(&SwipeSequence::new(), 3, PredictionMode::Local)
            .is_empty()
    );
}

#[test]
fn sequence_input_matches_string_input() {
    let service = PredictionService::new(Engine::new(fixture()), 16);
    let seq = SwipeSequence::from_letters("hhellpp").unwrap();
    assert_eq!(seq.as_pattern(), "HELP");
    assert_eq!(
        service.predict_sequence(&seq, 2, PredictionMode::Local),
        ["help", "helper"]
    );
}

#[test]
fn mode_toggles_and_displays() {
    assert_eq!(PredictionMode::Local.toggled(), PredictionMode::Remote);
    assert_eq!(PredictionMode::Remote.toggled(), PredictionMode::Local);
    assert_eq!(PredictionMode::default().to_string(), "local");
}
