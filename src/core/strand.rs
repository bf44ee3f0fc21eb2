use serde::{Serialize, Serializer};

/// Strand a motif occurrence is reported on.
///
/// `Unstranded` is used when a motif has no distinct reverse-complement
/// partner (amino-acid motifs and self-complementary DNA motifs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Unstranded,
    Forward,
    Reverse,
}

impl Strand {
    /// Strands in report encounter order: `.`, `+`, `-`.
    pub const REPORT_ORDER: [Strand; 3] = [Strand::Unstranded, Strand::Forward, Strand::Reverse];

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Unstranded => '.',
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Strand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.symbol().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Strand::Unstranded.to_string(), ".");
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
    }

    #[test]
    fn test_report_order() {
        let symbols: String = Strand::REPORT_ORDER.iter().map(|s| s.symbol()).collect();
        assert_eq!(symbols, ".+-");
    }
}
