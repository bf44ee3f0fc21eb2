//! Per-motif orchestration: re-scan variants, cluster, build, count.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::core::reference::ReferenceSequence;
use crate::core::strand::Strand;
use crate::engine::cluster::cluster;
use crate::engine::count::count_occurrences;
use crate::engine::segment::build_segments;
use crate::motif::compile::CompiledMotif;
use crate::parsing::{ParseError, VariantSource};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Input(#[from] ParseError),
}

/// Reference/variant occurrence counts for one strand at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrandCounts {
    pub strand: Strand,
    pub reference: u64,
    pub variant: u64,
}

/// One motif's results: variant position to per-strand count rows,
/// in report strand order. Only strands with a nonzero reference or
/// variant count appear.
#[derive(Debug, Clone, Serialize)]
pub struct MotifReport {
    pub motif: String,
    pub positions: BTreeMap<u64, Vec<StrandCounts>>,
}

/// Drives the per-motif pipeline over a re-readable variant source.
///
/// Each motif gets a fresh pass over the variant stream (its radius
/// produces its own neighborhood partition), then segments are rebuilt
/// and counted per neighborhood. Motifs are independent: nothing is
/// shared across them but read-only access to the reference.
pub struct ScanEngine<'a> {
    reference: &'a ReferenceSequence,
}

impl<'a> ScanEngine<'a> {
    #[must_use]
    pub fn new(reference: &'a ReferenceSequence) -> Self {
        Self { reference }
    }

    /// Run the full analysis for every motif, in input order.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Input` if the variant source cannot be opened
    /// or a record fails to parse.
    pub fn scan<S: VariantSource>(
        &self,
        source: &S,
        motifs: &[CompiledMotif],
    ) -> Result<Vec<MotifReport>, ScanError> {
        motifs
            .iter()
            .map(|motif| self.scan_motif(source, motif))
            .collect()
    }

    fn scan_motif<S: VariantSource>(
        &self,
        source: &S,
        motif: &CompiledMotif,
    ) -> Result<MotifReport, ScanError> {
        let radius = motif.radius();
        let variants = source.open()?.collect::<Result<Vec<_>, _>>()?;

        let mut positions = BTreeMap::new();
        for neighborhood in cluster(variants, radius) {
            let segments = build_segments(&neighborhood, self.reference, radius);
            let reference_counts = count_occurrences(&segments.reference, motif);
            let variant_counts = count_occurrences(&segments.variant, motif);

            let rows: Vec<StrandCounts> = Strand::REPORT_ORDER
                .iter()
                .filter_map(|&strand| {
                    let reference = reference_counts.get(strand);
                    let variant = variant_counts.get(strand);
                    (reference != 0 || variant != 0).then_some(StrandCounts {
                        strand,
                        reference,
                        variant,
                    })
                })
                .collect();
            if rows.is_empty() {
                continue;
            }

            for variant in neighborhood.variants() {
                positions.insert(variant.position, rows.clone());
            }
        }

        Ok(MotifReport {
            motif: motif.definition().to_string(),
            positions,
        })
    }
}
