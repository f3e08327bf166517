use std::{collections::HashMap, fs, path::Path};

use swipe_core::{SwipeError, SwipeResult, dictionary::PatternDictionary, model::PatternEntry};

mod builtin;

use builtin::BUILTIN_PATTERNS;

/// Ordered pattern dictionary with an exact-key index.
///
/// TSV format (replacement dictionaries):
///
/// - `KEY<TAB>word`, one word per line
/// - keys are uppercased; a key may contain spaces (`I AM<TAB>i am`)
/// - words of a key keep file order (= relevance); repeats are skipped
/// - entries keep the order in which their key first appears
/// - blank lines and lines starting with `#` are ignored
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
    index: HashMap<String, usize>, // key -> position in `entries`
}

impl PatternTable {
    /// The authored table used by the keyboard out of the box.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_PATTERNS
                .iter()
                .map(|(key, words)| PatternEntry::new(*key, words.iter().copied())),
        )
    }

    /// Build from entries; a repeated key replaces the earlier word list but keeps its position.
    pub fn from_entries(entries: impl IntoIterator<Item = PatternEntry>) -> Self {
        let mut table = Self::default();
        for mut entry in entries {
            entry.key = entry.key.to_uppercase();
            match table.index.get(&entry.key) {
                Some(&pos) => table.entries[pos].words = entry.words,
                None => {
                    table.index.insert(entry.key.clone(), table.entries.len());
                    table.entries.push(entry);
                }
            }
        }
        table
    }

    pub fn from_path(path: impl AsRef<Path>) -> SwipeResult<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let table = Self::from_tsv_str(&s)?;
        tracing::info!(path = %path.display(), keys = table.entries.len(), "loaded pattern dictionary");
        Ok(table)
    }

    pub fn from_tsv_str(s: &str) -> SwipeResult<Self> {
        let mut table = Self::default();

        for (idx, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut it = line.split('\t');
            let key = it.next().unwrap_or("").trim().to_uppercase();
            let word = it.next().unwrap_or("").trim();
            if key.is_empty() || word.is_empty() {
                return Err(SwipeError::MalformedEntry {
                    line: idx + 1,
                    reason: "expected KEY<TAB>word".to_string(),
                });
            }
            if it.next().is_some() {
                return Err(SwipeError::MalformedEntry {
                    line: idx + 1,
                    reason: "more than two columns".to_string(),
                });
            }

            let pos = match table.index.get(&key) {
                Some(&pos) => pos,
                None => {
                    table.index.insert(key.clone(), table.entries.len());
                    table.entries.push(PatternEntry {
                        key,
                        words: Vec::new(),
                    });
                    table.entries.len() - 1
                }
            };
            let words = &mut table.entries[pos].words;
            if !words.iter().any(|w| w == word) {
                words.push(word.to_string());
            }
        }

        Ok(table)
    }
}

impl PatternDictionary for PatternTable {
    fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    fn lookup(&self, pattern: &str) -> Option<&[String]> {
        self.index
            .get(pattern)
            .map(|&pos| self.entries[pos].words.as_slice())
    }
}
