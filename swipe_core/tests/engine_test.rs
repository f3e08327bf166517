use swipe_core::engine::Engine;
use swipe_core::fallback::COMMON_WORDS;
use swipe_core::model::{CandidateSource, PatternEntry};

fn fixture() -> Vec<PatternEntry> {
    vec![
        PatternEntry::new("H", ["he", "his", "had"]),
        PatternEntry::new("HELP", ["help", "helper", "helpful"]),
        PatternEntry::new("HEAL", ["heal", "health", "help"]),
        PatternEntry::new("HE", ["he", "her", "here"]),
        PatternEntry::new("WATER", ["water", "watery"]),
    ]
}

#[test]
fn exact_match_skips_scoring() {
    let engine = Engine::new(fixture());
    let ranked = engine.rank("HEAL", 2);
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|c| c.source == CandidateSource::Exact));
    assert_eq!(ranked[0].word, "heal");
    assert_eq!(ranked[1].word, "health");
}

#[test]
fn word_under_several_keys_appears_once_at_best_score() {
    let engine = Engine::new(fixture());
    let ranked = engine.rank("HELPS", 10);
    let words: Vec<&str> = ranked.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words.iter().filter(|w| **w == "help").count(), 1);
    assert_eq!(words[0], "help");
    assert_eq!(ranked[0].key.as_deref(), Some("HELP"));
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn threshold_controls_fuzzy_scan() {
    let strict = Engine::new(fixture()).similarity_threshold(0.99);
    // nothing qualifies, so the H entry and then the common list fill in
    assert_eq!(
        strict.find_best_matches("HLPS", 5),
        ["he", "his", "had", "the", "be"]
    );

    let loose = Engine::new(fixture()).similarity_threshold(0.0);
    let words = loose.find_best_matches("HLPS", 20);
    assert!(words.contains(&"water".to_string()));
}

#[test]
fn fallback_without_letter_entry_uses_common_words() {
    let engine = Engine::new(fixture());
    let ranked = engine.rank("QZX", 3);
    let words: Vec<&str> = ranked.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words, ["the", "be", "to"]);
    assert!(ranked.iter().all(|c| c.source == CandidateSource::CommonFallback));
    assert!(ranked.iter().all(|c| c.key.is_none()));
}

#[test]
fn exhausted_sources_return_short_list() {
    let engine = Engine::new(Vec::<PatternEntry>::new());
    assert_eq!(engine.find_best_matches("QZX", 20), COMMON_WORDS);
}

#[test]
fn builder_guards_bad_values() {
    let engine = Engine::new(fixture()).max_results(0).similarity_threshold(f64::NAN);
    assert_eq!(engine.default_max_results(), 3);
    assert_eq!(engine.suggest("HE"), ["he", "her", "here"]);
}
