//! Groups position-ordered variants into proximity neighborhoods.

use crate::core::variant::Variant;

/// A non-empty run of variants where every adjacent pair is within
/// `radius` of each other. Gaps between neighborhoods exceed `radius`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    variants: Vec<Variant>,
}

impl Neighborhood {
    fn new(variants: Vec<Variant>) -> Self {
        debug_assert!(!variants.is_empty());
        Self { variants }
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    #[must_use]
    pub fn first_position(&self) -> u64 {
        self.variants[0].position
    }

    #[must_use]
    pub fn last_position(&self) -> u64 {
        self.variants[self.variants.len() - 1].position
    }

    /// Inclusive positional span, in bases.
    #[must_use]
    pub fn span(&self) -> u64 {
        self.last_position() - self.first_position() + 1
    }
}

/// Cluster a position-ordered variant stream with the given radius.
///
/// A cursor tracks the last seen position; a gap greater than `radius`
/// seals the current block and starts a new one, so equal positions
/// (gap 0) always merge. The initial sealed block is an empty artifact
/// of the zero cursor and is never surfaced.
pub fn cluster(variants: impl IntoIterator<Item = Variant>, radius: u64) -> Vec<Neighborhood> {
    let mut neighborhoods = Vec::new();
    let mut block: Vec<Variant> = Vec::new();
    let mut last_position = 0u64;

    for variant in variants {
        if variant.position.saturating_sub(last_position) > radius && !block.is_empty() {
            neighborhoods.push(Neighborhood::new(std::mem::take(&mut block)));
        }
        last_position = variant.position;
        block.push(variant);
    }
    if !block.is_empty() {
        neighborhoods.push(Neighborhood::new(block));
    }

    neighborhoods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snvs(positions: &[u64]) -> Vec<Variant> {
        positions.iter().map(|&p| Variant::new(p, "A", "G")).collect()
    }

    fn partitions(variants: Vec<Variant>, radius: u64) -> Vec<Vec<u64>> {
        cluster(variants, radius)
            .iter()
            .map(|n| n.variants().iter().map(|v| v.position).collect())
            .collect()
    }

    #[test]
    fn test_empty_stream() {
        assert!(cluster(snvs(&[]), 3).is_empty());
    }

    #[test]
    fn test_single_variant() {
        assert_eq!(partitions(snvs(&[5]), 3), vec![vec![5]]);
    }

    #[test]
    fn test_gap_over_radius_splits() {
        assert_eq!(partitions(snvs(&[10, 14]), 3), vec![vec![10], vec![14]]);
    }

    #[test]
    fn test_gap_at_radius_merges() {
        assert_eq!(partitions(snvs(&[10, 13]), 3), vec![vec![10, 13]]);
    }

    #[test]
    fn test_duplicate_positions_merge() {
        assert_eq!(partitions(snvs(&[10, 10, 11]), 0), vec![vec![10, 10], vec![11]]);
    }

    #[test]
    fn test_chained_neighborhood() {
        // Adjacent gaps within radius chain together even when the
        // overall span exceeds the radius.
        assert_eq!(
            partitions(snvs(&[10, 12, 14, 20]), 2),
            vec![vec![10, 12, 14], vec![20]]
        );
    }

    #[test]
    fn test_variant_near_origin() {
        // First gap measured against the zero cursor may be <= radius;
        // no empty neighborhood leaks out.
        assert_eq!(partitions(snvs(&[2, 3]), 5), vec![vec![2, 3]]);
    }

    #[test]
    fn test_radius_zero_isolates() {
        assert_eq!(
            partitions(snvs(&[10, 11, 12]), 0),
            vec![vec![10], vec![11], vec![12]]
        );
    }

    #[test]
    fn test_span() {
        let neighborhoods = cluster(snvs(&[10, 12, 14]), 2);
        assert_eq!(neighborhoods[0].span(), 5);
        assert_eq!(neighborhoods[0].first_position(), 10);
        assert_eq!(neighborhoods[0].last_position(), 14);
    }
}
