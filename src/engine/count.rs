//! Strand-aware motif occurrence counting on a segment.

use crate::core::strand::Strand;
use crate::motif::compile::CompiledMotif;

/// Occurrence counts per strand for one segment.
///
/// Stranded motifs populate `forward`/`reverse`; unstranded motifs
/// populate `unstranded` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrandTable {
    pub unstranded: u64,
    pub forward: u64,
    pub reverse: u64,
}

impl StrandTable {
    #[must_use]
    pub fn get(&self, strand: Strand) -> u64 {
        match strand {
            Strand::Unstranded => self.unstranded,
            Strand::Forward => self.forward,
            Strand::Reverse => self.reverse,
        }
    }
}

/// Count non-overlapping occurrences of a motif (and its partner, when
/// present) in a segment. The scan is leftmost and greedy: a match
/// consumes its span, so overlapping occurrences are not double-counted.
#[must_use]
pub fn count_occurrences(segment: &str, motif: &CompiledMotif) -> StrandTable {
    let primary = motif.pattern().find_iter(segment).count() as u64;
    match motif.partner() {
        Some(partner) => StrandTable {
            unstranded: 0,
            forward: primary,
            reverse: partner.find_iter(segment).count() as u64,
        },
        None => StrandTable {
            unstranded: primary,
            forward: 0,
            reverse: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::Alphabet;
    use crate::motif::compile::compile_all;

    fn motif(definition: &str, alphabet: Alphabet) -> CompiledMotif {
        compile_all(&[definition.to_string()], alphabet)
            .unwrap()
            .remove(0)
    }

    #[test]
    fn test_unstranded_counting() {
        // ACGT is self-complementary: counts land under `.`
        let m = motif("ACGT", Alphabet::Dna);
        let table = count_occurrences("ACGTACGT", &m);
        assert_eq!(
            table,
            StrandTable {
                unstranded: 2,
                forward: 0,
                reverse: 0
            }
        );
    }

    #[test]
    fn test_stranded_counting() {
        // AGGT occurs once forward; its partner ACCT once
        let m = motif("AGGT", Alphabet::Dna);
        let table = count_occurrences("AGGTTTACCT", &m);
        assert_eq!(
            table,
            StrandTable {
                unstranded: 0,
                forward: 1,
                reverse: 1
            }
        );
    }

    #[test]
    fn test_zero_occurrences() {
        let m = motif("AGGT", Alphabet::Dna);
        assert_eq!(count_occurrences("CCCCCC", &m), StrandTable::default());
    }

    #[test]
    fn test_overlapping_occurrences_skip() {
        // AA in AAAA: leftmost non-overlapping scan finds 2, not 3
        let m = motif("AA", Alphabet::AminoAcid);
        let table = count_occurrences("AAAA", &m);
        assert_eq!(table.unstranded, 2);
    }

    #[test]
    fn test_ambiguity_code_matches() {
        // ARC matches AAC and AGC
        let m = motif("ARC", Alphabet::Dna);
        let table = count_occurrences("AACTTAGC", &m);
        assert_eq!(table.forward, 2);
    }

    #[test]
    fn test_case_insensitive_scan() {
        let m = motif("ACGT", Alphabet::Dna);
        assert_eq!(count_occurrences("acgt", &m).unstranded, 1);
    }

    #[test]
    fn test_table_get() {
        let table = StrandTable {
            unstranded: 1,
            forward: 2,
            reverse: 3,
        };
        assert_eq!(table.get(Strand::Unstranded), 1);
        assert_eq!(table.get(Strand::Forward), 2);
        assert_eq!(table.get(Strand::Reverse), 3);
    }
}
