//! Best-effort log file reading
//!
//! Event logs exported from Windows hosts routinely contain stray non-UTF-8
//! bytes; the read is lossy rather than fallible. Blank lines carry no event
//! and are skipped before any line numbering happens, so all downstream line
//! numbers refer to non-blank lines only.

use std::fs;
use std::io;
use std::path::Path;

/// Reads the log file into non-blank lines, trailing newlines stripped
///
/// Invalid byte sequences are replaced rather than raised. `max_lines` caps
/// the number of raw lines examined (blank ones still count toward the cap),
/// which keeps huge logs cheap to iterate on.
///
/// # Errors
/// Returns the underlying io error when the file cannot be read (missing
/// file, permissions). Decoding never fails.
pub fn read_log_lines(path: &Path, max_lines: Option<usize>) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let mut lines = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(cap) = max_lines {
            if i >= cap {
                break;
            }
        }
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_log(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let file = temp_log(b"alpha\n\n   \nbeta\n");
        let lines = read_log_lines(file.path(), None).unwrap();
        assert_eq!(lines, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn test_read_strips_trailing_newline() {
        let file = temp_log(b"only line");
        let lines = read_log_lines(file.path(), None).unwrap();
        assert_eq!(lines, vec!["only line".to_string()]);
    }

    #[test]
    fn test_read_invalid_utf8_does_not_fail() {
        let file = temp_log(b"good\n\xff\xfe bad bytes\ngood again\n");
        let lines = read_log_lines(file.path(), None).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "good");
        assert_eq!(lines[2], "good again");
    }

    #[test]
    fn test_read_max_lines_counts_raw_lines() {
        let file = temp_log(b"a\n\nb\nc\n");
        // Cap of 3 covers "a", blank, "b" - only 2 non-blank survive
        let lines = read_log_lines(file.path(), Some(3)).unwrap();
        assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let result = read_log_lines(Path::new("/nonexistent/windows.log"), None);
        assert!(result.is_err());
    }
}
