//! Score projection: session scores onto sessions and individual lines
//!
//! Session-level scores are thresholded into boolean anomaly flags, then
//! folded back onto the original lines: each line takes the maximum score of
//! every session covering it. The fold is idempotent and order-independent,
//! so overlapping sessions need no special handling.

use serde::{Deserialize, Serialize};

use crate::scorer::clamp_unit;
use crate::session::Session;

/// Scored session with its anomaly verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPrediction {
    /// 0-based position in emission order
    pub session_index: usize,
    /// 1-based first line covered
    pub start_line: usize,
    /// 1-based last line covered (inclusive)
    pub end_line: usize,
    /// Anomaly score in [0,1]; higher is more anomalous
    pub anomaly_score: f64,
    /// True when `anomaly_score >= threshold`
    pub is_anomaly: bool,
}

/// Per-line anomaly score, one per non-blank input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrediction {
    /// 1-based line number over the non-blank lines
    pub line_number: usize,
    /// Maximum score of all sessions covering this line, 0.0 if none
    pub anomaly_score: f64,
}

/// Combines session scores and ranges into session and line predictions
///
/// `scores` and `sessions` are parallel (same length, same order). Scores are
/// clamped into [0,1] before use. Lines covered by no session keep a score
/// of 0.0.
pub fn project(
    scores: &[f64],
    sessions: &[Session],
    threshold: f64,
    total_lines: usize,
) -> (Vec<SessionPrediction>, Vec<LinePrediction>) {
    let session_preds: Vec<SessionPrediction> = sessions
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(session_index, (session, &raw))| {
            let anomaly_score = clamp_unit(raw);
            SessionPrediction {
                session_index,
                start_line: session.start_line,
                end_line: session.end_line,
                anomaly_score,
                is_anomaly: anomaly_score >= threshold,
            }
        })
        .collect();

    let mut line_scores = vec![0.0_f64; total_lines];
    for pred in &session_preds {
        for line in pred.start_line..=pred.end_line {
            let idx = line - 1;
            if idx < line_scores.len() {
                line_scores[idx] = line_scores[idx].max(pred.anomaly_score);
            }
        }
    }

    let line_preds = line_scores
        .into_iter()
        .enumerate()
        .map(|(idx, anomaly_score)| LinePrediction {
            line_number: idx + 1,
            anomaly_score,
        })
        .collect();

    (session_preds, line_preds)
}
