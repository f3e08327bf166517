use crate::model::PatternEntry;

/// Pattern dictionary: core does not care whether it comes from the built-in table, a file or a test.
///
/// Rules:
/// - keys are uppercase and unique
/// - `entries()` keeps authored order; the fuzzy scan walks it in that order,
///   so it decides ties between equally scored keys
/// - the dictionary never changes once built
pub trait PatternDictionary: Send + Sync {
    /// All entries in authored order.
    fn entries(&self) -> &[PatternEntry];

    /// Exact key lookup (default: linear scan of `entries()`).
    fn lookup(&self, pattern: &str) -> Option<&[String]> {
        self.entries()
            .iter()
            .find(|e| e.key == pattern)
            .map(|e| e.words.as_slice())
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl<D> PatternDictionary for &D
where
    D: PatternDictionary + ?Sized,
{
    fn entries(&self) -> &[PatternEntry] {
        (**self).entries()
    }

    fn lookup(&self, pattern: &str) -> Option<&[String]> {
        (**self).lookup(pattern)
    }
}

impl PatternDictionary for Vec<PatternEntry> {
    fn entries(&self) -> &[PatternEntry] {
        self
    }
}
