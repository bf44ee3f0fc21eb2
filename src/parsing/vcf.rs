//! Variant stream from VCF files using noodles.
//!
//! Supports plain and gzip/bgzip compressed VCF. Each record yields the
//! 1-based start position, the reference bases, and the first alternate
//! allele; multi-allelic records contribute only their first alternate.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use noodles::vcf;
use noodles::vcf::variant::record::AlternateBases;
use tracing::warn;

use crate::core::variant::Variant;
use crate::parsing::{is_gzipped, ParseError, VariantSource};

/// A VCF file acting as a re-readable variant source.
///
/// `open` reopens the file from the start, giving each motif its own
/// forward pass over the records.
#[derive(Debug, Clone)]
pub struct VcfSource {
    path: PathBuf,
}

impl VcfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VariantSource for VcfSource {
    type Reader = VcfVariantReader;

    fn open(&self) -> Result<Self::Reader, ParseError> {
        VcfVariantReader::open(&self.path)
    }
}

/// Iterator over the variants of one VCF pass.
pub struct VcfVariantReader {
    reader: vcf::io::Reader<Box<dyn BufRead>>,
    header: vcf::Header,
    record: vcf::variant::RecordBuf,
}

impl VcfVariantReader {
    fn open(path: &Path) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        let inner: Box<dyn BufRead> = if is_gzipped(path) {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        let mut reader = vcf::io::Reader::new(inner);
        let header = reader
            .read_header()
            .map_err(|e| ParseError::Vcf(format!("failed to read VCF header: {e}")))?;

        Ok(Self {
            reader,
            header,
            record: vcf::variant::RecordBuf::default(),
        })
    }
}

impl Iterator for VcfVariantReader {
    type Item = Result<Variant, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record_buf(&self.header, &mut self.record) {
                Ok(0) => return None,
                Ok(_) => {
                    let Some(position) = self.record.variant_start().map(usize::from) else {
                        warn!("skipping VCF record without a position");
                        continue;
                    };

                    let reference_allele = self.record.reference_bases().to_string();

                    let alternate_allele = match self.record.alternate_bases().iter().next() {
                        Some(Ok(allele)) => allele.to_string(),
                        Some(Err(e)) => return Some(Err(ParseError::Vcf(e.to_string()))),
                        None => {
                            warn!(position, "skipping VCF record without an alternate allele");
                            continue;
                        }
                    };

                    return Some(Ok(Variant::new(
                        position as u64,
                        reference_allele,
                        alternate_allele,
                    )));
                }
                Err(e) => return Some(Err(ParseError::Vcf(e.to_string()))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VCF: &str = "\
##fileformat=VCFv4.2
##contig=<ID=chr1,length=8>
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
chr1\t5\t.\tA\tG\t.\tPASS\t.
chr1\t7\t.\tG\tC,T\t.\tPASS\t.
";

    fn write_vcf() -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(".vcf").unwrap();
        temp.write_all(VCF.as_bytes()).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_read_variants() {
        let temp = write_vcf();
        let source = VcfSource::new(temp.path());
        let variants: Vec<Variant> = source
            .open()
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0], Variant::new(5, "A", "G"));
        // Only the first alternate of a multi-allelic record is kept
        assert_eq!(variants[1], Variant::new(7, "G", "C"));
    }

    #[test]
    fn test_reopen_gives_fresh_pass() {
        let temp = write_vcf();
        let source = VcfSource::new(temp.path());
        for _ in 0..3 {
            let count = source.open().unwrap().count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let source = VcfSource::new("/nonexistent/input.vcf");
        assert!(source.open().is_err());
    }
}
