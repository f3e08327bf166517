//! `SwipeSequence`: the keys a pointer has visited, in order.
//!
//! Rules:
//! - only ASCII letters, stored uppercase
//! - a key equal to the previous one is dropped (adjacent collapse)
//! - non-adjacent repeats are kept (`"HELP"` then `"E"` gives `"HELPE"`)
use std::fmt;

use crate::error::{SwipeError, SwipeResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwipeSequence {
    keys: Vec<char>,
}

impl SwipeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from a string of letters, collapsing adjacent repeats.
    pub fn from_letters(letters: &str) -> SwipeResult<Self> {
        let mut seq = Self::new();
        for ch in letters.chars() {
            seq.push(ch)?;
        }
        Ok(seq)
    }

    /// Append a key. Returns `Ok(false)` when it repeats the last key.
    pub fn push(&mut self, key: char) -> SwipeResult<bool> {
        if !key.is_ascii_alphabetic() {
            return Err(SwipeError::InvalidKey(key));
        }
        let key = key.to_ascii_uppercase();
        if self.keys.last() == Some(&key) {
            return Ok(false);
        }
        self.keys.push(key);
        Ok(true)
    }

    pub fn pop(&mut self) -> Option<char> {
        self.keys.pop()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn last(&self) -> Option<char> {
        self.keys.last().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[char] {
        &self.keys
    }

    /// The pattern string handed to the predictor.
    pub fn as_pattern(&self) -> String {
        self.keys.iter().collect()
    }
}

impl fmt::Display for SwipeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_pattern())
    }
}
