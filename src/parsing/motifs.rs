//! Motif definition lists from files or delimited strings.

use std::path::Path;

use crate::parsing::ParseError;

/// Read motif definitions from a file, one per line. Blank lines and
/// `#` comments are skipped.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or
/// `ParseError::InvalidFormat` if it contains no definitions.
pub fn read_motif_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let definitions: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect();

    if definitions.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "no motif definitions found in {}",
            path.display()
        )));
    }
    Ok(definitions)
}

/// Split a comma-delimited motif list, dropping empty entries.
#[must_use]
pub fn parse_motif_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_motif_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"# promoter motifs\nACGT\n\n  ARC  \n").unwrap();
        temp.flush().unwrap();

        let definitions = read_motif_file(temp.path()).unwrap();
        assert_eq!(definitions, vec!["ACGT".to_string(), "ARC".to_string()]);
    }

    #[test]
    fn test_empty_motif_file_is_fatal() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"# only comments\n\n").unwrap();
        temp.flush().unwrap();

        assert!(read_motif_file(temp.path()).is_err());
    }

    #[test]
    fn test_parse_motif_list() {
        assert_eq!(
            parse_motif_list("ACGT, ARC,,TT"),
            vec!["ACGT".to_string(), "ARC".to_string(), "TT".to_string()]
        );
        assert!(parse_motif_list("").is_empty());
    }
}
