//! Input parsing: variant streams, reference sequences, motif lists.
//!
//! Because each motif clusters the variant stream with its own radius,
//! the stream must be re-readable: [`VariantSource::open`] hands out a
//! fresh forward view of the input, once per motif. File-backed sources
//! therefore require a seekable/reopenable file, not a pipe.

use thiserror::Error;

use crate::core::variant::Variant;

pub mod fasta;
pub mod motifs;
pub mod vcf;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("VCF error: {0}")]
    Vcf(String),

    #[error("FASTA error: {0}")]
    Fasta(String),

    #[error("invalid input: {0}")]
    InvalidFormat(String),
}

/// A re-readable source of position-ordered variants.
pub trait VariantSource {
    type Reader: Iterator<Item = Result<Variant, ParseError>>;

    /// Open a fresh forward view of the variant stream.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the underlying input cannot be (re)opened.
    fn open(&self) -> Result<Self::Reader, ParseError>;
}

/// In-memory variant source for library callers and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    variants: Vec<Variant>,
}

impl MemorySource {
    #[must_use]
    pub fn new(variants: Vec<Variant>) -> Self {
        Self { variants }
    }
}

impl VariantSource for MemorySource {
    type Reader = std::vec::IntoIter<Result<Variant, ParseError>>;

    fn open(&self) -> Result<Self::Reader, ParseError> {
        let items: Vec<Result<Variant, ParseError>> =
            self.variants.iter().cloned().map(Ok).collect();
        Ok(items.into_iter())
    }
}

/// Check if the path is a gzipped file
pub(crate) fn is_gzipped(path: &std::path::Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_reopens() {
        let source = MemorySource::new(vec![Variant::new(5, "A", "G")]);
        for _ in 0..2 {
            let variants: Vec<Variant> = source.open().unwrap().map(Result::unwrap).collect();
            assert_eq!(variants.len(), 1);
            assert_eq!(variants[0].position, 5);
        }
    }

    #[test]
    fn test_is_gzipped() {
        use std::path::Path;
        assert!(is_gzipped(Path::new("variants.vcf.gz")));
        assert!(is_gzipped(Path::new("ref.fa.bgz")));
        assert!(!is_gzipped(Path::new("variants.vcf")));
    }
}
