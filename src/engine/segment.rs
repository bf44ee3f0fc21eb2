//! Rebuilds the local sequence window around a neighborhood.

use crate::core::reference::ReferenceSequence;
use crate::engine::cluster::Neighborhood;

/// Reference and variant-mutated segments covering one neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPair {
    pub reference: String,
    pub variant: String,
}

/// Build both segments for a neighborhood with the given flank radius.
#[must_use]
pub fn build_segments(
    neighborhood: &Neighborhood,
    reference: &ReferenceSequence,
    radius: u64,
) -> SegmentPair {
    let start = segment_start(neighborhood, radius);
    let reference_segment = reference_segment(neighborhood, reference, radius);
    let variant_segment = variant_segment(neighborhood, &reference_segment, start);
    SegmentPair {
        reference: reference_segment,
        variant: variant_segment,
    }
}

/// 0-based start offset of the segment, clamped at the sequence origin.
fn segment_start(neighborhood: &Neighborhood, radius: u64) -> usize {
    neighborhood
        .first_position()
        .saturating_sub(1)
        .saturating_sub(radius) as usize
}

/// The reference slice from `radius` before the first variant to `radius`
/// after the last, inclusive. 1-based genomic positions convert to
/// 0-based offsets here; flanks clamp to the sequence boundaries.
#[must_use]
pub fn reference_segment(
    neighborhood: &Neighborhood,
    reference: &ReferenceSequence,
    radius: u64,
) -> String {
    let start = segment_start(neighborhood, radius);
    let end = (neighborhood.last_position() + radius) as usize;
    reference.slice(start, end).to_string()
}

/// Apply the neighborhood's variants to the reference segment.
///
/// Each variant is applied to the unmodified reference segment: the
/// segment is split at the variant's offset and the first occurrence of
/// the reference allele in the suffix is replaced with the alternate.
/// In a multi-variant neighborhood only the last variant's edit survives
/// in the returned segment; earlier edits do not compound.
#[must_use]
pub fn variant_segment(neighborhood: &Neighborhood, reference_segment: &str, start: usize) -> String {
    let mut segment = reference_segment.to_string();
    for variant in neighborhood.variants() {
        let offset = (variant.position.saturating_sub(1) as usize)
            .saturating_sub(start)
            .min(reference_segment.len());
        let (prefix, suffix) = reference_segment.split_at(offset);
        let edited = suffix.replacen(
            &variant.reference_allele.to_uppercase(),
            &variant.alternate_allele.to_uppercase(),
            1,
        );
        segment = format!("{prefix}{edited}");
    }
    segment
}
