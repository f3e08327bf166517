//! Scripted demo: six two-swipe scenarios from the AI-terminology walkthrough.
//!
//! Each swipe is replayed through a real `Session`; the engine's answer is
//! printed next to what the script expected. The scripted word is what gets
//! composed, so the finished phrase reads the same whatever the dictionary
//! returns.

use std::io::{self, Write};

use swipe_core::{dictionary::PatternDictionary, key_event::InputEvent, session::Session};

pub struct ScriptedSwipe {
    pub swipe: &'static str,
    pub predicted: &'static [&'static str],
    pub selected: &'static str,
}

pub struct Scenario {
    pub first: ScriptedSwipe,
    pub follow_up: ScriptedSwipe,
    /// Whole-sentence completions shown after the first swipe
    pub sentences: &'static [&'static str],
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        first: ScriptedSwipe {
            swipe: "NRLNTWRK",
            predicted: &["neural", "network", "naturally", "neural network", "normally"],
            selected: "neural",
        },
        follow_up: ScriptedSwipe {
            swipe: "NTWRK",
            predicted: &["network", "networks", "networking", "networked", "net"],
            selected: "network",
        },
        sentences: &[
            "neural network architecture",
            "neural network optimization techniques",
            "neural network training method",
        ],
    },
    Scenario {
        first: ScriptedSwipe {
            swipe: "MACHNLRN",
            predicted: &["machine", "learning", "machining", "machine learning", "machinery"],
            selected: "machine",
        },
        follow_up: ScriptedSwipe {
            swipe: "LRNG",
            predicted: &["learning", "learner", "learn", "learned", "learnings"],
            selected: "learning",
        },
        sentences: &[
            "machine learning algorithms",
            "machine learning model performance",
            "machine learning implementation",
        ],
    },
    Scenario {
        first: ScriptedSwipe {
            swipe: "DTSCNC",
            predicted: &["data", "science", "dataset", "data science", "disciplines"],
            selected: "data",
        },
        follow_up: ScriptedSwipe {
            swipe: "SCNC",
            predicted: &["science", "scientist", "scientific", "sciences", "sciency"],
            selected: "science",
        },
        sentences: &[
            "data science methodology",
            "data science project proposal",
            "data science team collaboration",
        ],
    },
    Scenario {
        first: ScriptedSwipe {
            swipe: "ARTFCLNTLGNC",
            predicted: &[
                "artificial",
                "intelligence",
                "artifact",
                "artificial intelligence",
                "articulate",
            ],
            selected: "artificial",
        },
        follow_up: ScriptedSwipe {
            swipe: "NTLGNC",
            predicted: &["intelligence", "intelligent", "intelligently", "intellect", "intellectual"],
            selected: "intelligence",
        },
        sentences: &[
            "artificial intelligence research",
            "artificial intelligence ethics considerations",
            "artificial intelligence implementation challenges",
        ],
    },
    Scenario {
        first: ScriptedSwipe {
            swipe: "CPVSVN",
            predicted: &["computer", "vision", "compute", "computer vision", "capability"],
            selected: "computer",
        },
        follow_up: ScriptedSwipe {
            swipe: "VSN",
            predicted: &["vision", "visual", "visionary", "visualize", "visibility"],
            selected: "vision",
        },
        sentences: &[
            "computer vision algorithm",
            "computer vision image recognition",
            "computer vision processing framework",
        ],
    },
    Scenario {
        first: ScriptedSwipe {
            swipe: "NTRLNGGPRCSNG",
            predicted: &["natural", "language", "naturally", "natural language", "naturalize"],
            selected: "natural",
        },
        follow_up: ScriptedSwipe {
            swipe: "LNGGPRCSNG",
            predicted: &["language", "processing", "language processing", "languages", "linguistic"],
            selected: "language processing",
        },
        sentences: &[
            "natural language processing systems",
            "natural language processing techniques",
            "natural language processing with transformers",
        ],
    },
];

/// Replay every scenario and say the composed phrase after each one.
pub fn run<D, W>(session: &mut Session<D>, out: &mut W) -> io::Result<()>
where
    D: PatternDictionary,
    W: Write,
{
    for (n, scenario) in SCENARIOS.iter().enumerate() {
        writeln!(out, "== scenario {} ==", n + 1)?;
        let mut phrase = String::new();
        for (i, step) in [&scenario.first, &scenario.follow_up].into_iter().enumerate() {
            let engine_words = session.swipe(step.swipe);
            writeln!(out, "swipe {}", step.swipe)?;
            writeln!(out, "  engine:   {}", engine_words.join(", "))?;
            writeln!(out, "  scripted: {}", step.predicted.join(", "))?;
            if i == 0 {
                for s in scenario.sentences {
                    writeln!(out, "  sentence: {s}")?;
                }
            }
            writeln!(out, "  selected: {}", step.selected)?;
            if !phrase.is_empty() {
                phrase.push(' ');
            }
            phrase.push_str(step.selected);
        }
        session.handle(InputEvent::ClearSequence);
        writeln!(out, "phrase: {phrase}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_selects_a_scripted_word() {
        for s in SCENARIOS {
            for step in [&s.first, &s.follow_up] {
                assert!(step.predicted.contains(&step.selected), "{}", step.swipe);
                assert!(step.swipe.chars().all(|c| c.is_ascii_uppercase()));
            }
            assert_eq!(s.sentences.len(), 3);
        }
    }
}
