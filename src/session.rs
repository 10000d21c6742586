//! Fixed-stride sessionization of key sequences
//!
//! A session is a window of consecutive log keys tagged with the 1-based
//! inclusive line range it covers in the original log. Stride smaller than
//! the session size produces overlapping sessions; the default stride equals
//! the session size (non-overlapping tiling).

use crate::tokenizer::LogKey;

/// An ordered window of log keys covering a contiguous line range
///
/// Immutable once produced. `start_line`/`end_line` are 1-based and
/// inclusive, indexed over the non-blank lines of the input log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Log keys in the window, at most `session_size` of them
    pub keys: Vec<LogKey>,
    /// 1-based first line covered
    pub start_line: usize,
    /// 1-based last line covered (inclusive)
    pub end_line: usize,
}

impl Session {
    /// Number of keys in the session
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when the session holds no keys (never emitted by `sessionize`)
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// True when the given 1-based line number falls inside the range
    pub fn covers(&self, line_number: usize) -> bool {
        self.start_line <= line_number && line_number <= self.end_line
    }
}

/// Slides a fixed-size, fixed-stride window over the key sequence
///
/// Starting at the first key, each step takes up to `session_size`
/// consecutive keys and advances by `stride`. The final window may be shorter
/// than `session_size` but is never empty. Emission stops after the window
/// whose start plus `session_size` reaches the end of the sequence, so no
/// session is fully contained in its predecessor. Whenever
/// `stride <= session_size` every key is covered by some session; a larger
/// stride skips the keys between windows.
///
/// `session_size == 0` is coerced to 1. A `stride` of `None` or 0 defaults
/// to `session_size`.
///
/// # Example
/// ```
/// use logsift::session::sessionize;
///
/// let keys: Vec<String> = (0..25).map(|i| format!("k{i}")).collect();
/// let sessions = sessionize(&keys, 20, Some(10));
///
/// assert_eq!(sessions.len(), 2);
/// assert_eq!((sessions[0].start_line, sessions[0].end_line), (1, 20));
/// assert_eq!((sessions[1].start_line, sessions[1].end_line), (11, 25));
/// ```
pub fn sessionize(keys: &[LogKey], session_size: usize, stride: Option<usize>) -> Vec<Session> {
    let size = session_size.max(1);
    let stride = match stride {
        Some(s) if s > 0 => s,
        _ => size,
    };

    let mut sessions = Vec::new();
    let mut cursor = 0;
    while cursor < keys.len() {
        let window = &keys[cursor..keys.len().min(cursor + size)];
        sessions.push(Session {
            keys: window.to_vec(),
            start_line: cursor + 1,
            end_line: cursor + window.len(),
        });
        if cursor + size >= keys.len() {
            break;
        }
        cursor += stride;
    }
    sessions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<LogKey> {
        (0..n).map(|i| format!("key{i}")).collect()
    }

    #[test]
    fn test_empty_input_yields_no_sessions() {
        assert!(sessionize(&[], 20, None).is_empty());
    }

    #[test]
    fn test_single_short_window() {
        let sessions = sessionize(&keys(5), 20, None);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].len(), 5);
        assert_eq!(sessions[0].start_line, 1);
        assert_eq!(sessions[0].end_line, 5);
    }

    #[test]
    fn test_exact_tiling_has_no_trailing_empty_session() {
        let sessions = sessionize(&keys(40), 20, None);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[1].start_line, 21);
        assert_eq!(sessions[1].end_line, 40);
        assert_eq!(sessions[1].len(), 20);
    }

    #[test]
    fn test_nonoverlapping_short_final_window() {
        let sessions = sessionize(&keys(25), 20, None);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[1].len(), 5);
        assert_eq!(sessions[1].start_line, 21);
        assert_eq!(sessions[1].end_line, 25);
    }

    #[test]
    fn test_overlapping_stride_scenario() {
        // 25 keys, size 20, stride 10: second window already reaches the end
        let sessions = sessionize(&keys(25), 20, Some(10));
        assert_eq!(sessions.len(), 2);
        assert_eq!((sessions[0].start_line, sessions[0].end_line), (1, 20));
        assert_eq!((sessions[1].start_line, sessions[1].end_line), (11, 25));
        assert_eq!(sessions[1].len(), 15);
    }

    #[test]
    fn test_zero_session_size_coerced_to_one() {
        let sessions = sessionize(&keys(3), 0, None);
        assert_eq!(sessions.len(), 3);
        assert!(sessions.iter().all(|s| s.len() == 1));
    }

    #[test]
    fn test_zero_stride_defaults_to_session_size() {
        let sessions = sessionize(&keys(6), 3, Some(0));
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[1].start_line, 4);
    }

    #[test]
    fn test_stride_beyond_size_skips_keys_between_windows() {
        // stride 5 > size 3: keys 4-5 and 9-10 fall between/after windows
        let sessions = sessionize(&keys(10), 3, Some(5));
        assert_eq!(sessions.len(), 2);
        assert_eq!((sessions[0].start_line, sessions[0].end_line), (1, 3));
        assert_eq!((sessions[1].start_line, sessions[1].end_line), (6, 8));
    }

    #[test]
    fn test_start_lines_strictly_increasing() {
        let sessions = sessionize(&keys(50), 8, Some(3));
        for pair in sessions.windows(2) {
            assert!(pair[0].start_line < pair[1].start_line);
            assert_eq!(pair[1].start_line - pair[0].start_line, 3);
        }
    }

    #[test]
    fn test_every_key_covered() {
        let input = keys(17);
        let sessions = sessionize(&input, 5, Some(2));
        let last = sessions.last().unwrap();
        assert_eq!(last.end_line, 17);
        // Each session's window matches the slice its range names
        for s in &sessions {
            assert_eq!(s.keys[..], input[s.start_line - 1..s.end_line]);
        }
    }

    #[test]
    fn test_covers() {
        let session = Session {
            keys: keys(3),
            start_line: 4,
            end_line: 6,
        };
        assert!(!session.covers(3));
        assert!(session.covers(4));
        assert!(session.covers(6));
        assert!(!session.covers(7));
    }
}
