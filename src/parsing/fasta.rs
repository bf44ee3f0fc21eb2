//! Reference sequence loading from FASTA files using noodles.
//!
//! Supports plain and gzip/bgzip compressed files. The first record
//! supplies the reference sequence; additional records are ignored with
//! a warning (the analysis addresses a single sequence).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use tracing::warn;

use crate::core::reference::ReferenceSequence;
use crate::parsing::{is_gzipped, ParseError};

/// Load the reference sequence from a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::Fasta` if a record fails to parse, or
/// `ParseError::InvalidFormat` if the file contains no sequences.
pub fn read_reference(path: &Path) -> Result<ReferenceSequence, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        read_reference_from(BufReader::new(GzDecoder::new(file)))
    } else {
        read_reference_from(BufReader::new(file))
    }
}

fn read_reference_from<R: BufRead>(reader: R) -> Result<ReferenceSequence, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);

    let mut reference: Option<ReferenceSequence> = None;
    let mut extra = 0usize;

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Fasta(format!("failed to parse FASTA record: {e}")))?;

        if reference.is_some() {
            extra += 1;
            continue;
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();
        reference = Some(ReferenceSequence::new(name, sequence));
    }

    if extra > 0 {
        warn!(extra, "FASTA contains additional sequences; using the first");
    }

    reference.ok_or_else(|| {
        ParseError::InvalidFormat("no sequences found in FASTA file".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_reference() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1 test\nacgt\nACGT\n").unwrap();
        temp.flush().unwrap();

        let reference = read_reference(temp.path()).unwrap();
        assert_eq!(reference.name(), "chr1");
        assert_eq!(reference.len(), 8);
        // Uppercased on construction
        assert_eq!(reference.slice(0, 8), "ACGTACGT");
    }

    #[test]
    fn test_first_record_wins() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGT\n>chr2\nGGGG\n").unwrap();
        temp.flush().unwrap();

        let reference = read_reference(temp.path()).unwrap();
        assert_eq!(reference.name(), "chr1");
        assert_eq!(reference.len(), 4);
    }

    #[test]
    fn test_empty_fasta_is_fatal() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        assert!(read_reference(temp.path()).is_err());
    }
}
