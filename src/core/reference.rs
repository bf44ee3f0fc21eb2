/// The reference sequence variants are applied against.
///
/// The sequence is uppercased once at construction and addressed by
/// 0-based offsets. Slicing clamps to the sequence boundaries so that
/// flanking windows near the ends never panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSequence {
    name: String,
    sequence: String,
}

impl ReferenceSequence {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into().to_uppercase(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Slice `[start, end)` in 0-based offsets, clamped to the sequence.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.sequence.len());
        let start = start.min(end);
        &self.sequence[start..end]
    }
}
