use serde::{Deserialize, Serialize};

/// A single genetic variant read from the input stream.
///
/// Immutable once constructed. Only the first alternate allele of a
/// multi-allelic record is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// 1-based genomic position
    pub position: u64,

    /// Reference allele bases as written in the input
    pub reference_allele: String,

    /// First alternate allele
    pub alternate_allele: String,
}

impl Variant {
    pub fn new(
        position: u64,
        reference_allele: impl Into<String>,
        alternate_allele: impl Into<String>,
    ) -> Self {
        Self {
            position,
            reference_allele: reference_allele.into(),
            alternate_allele: alternate_allele.into(),
        }
    }

    /// Single-base substitution?
    #[must_use]
    pub fn is_snv(&self) -> bool {
        self.reference_allele.len() == 1 && self.alternate_allele.len() == 1
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}>{}",
            self.position, self.reference_allele, self.alternate_allele
        )
    }
}
