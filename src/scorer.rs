//! Session scoring: built-in repetition heuristic and pluggable model backends
//!
//! Both variants satisfy the same contract: one score in [0,1] per session,
//! same order and length as the input. The heuristic is always available and
//! stands in for a real sequence model; the pluggable path delegates to an
//! externally supplied [`ModelBackend`] and fails fast when none is present,
//! so a misconfigured deployment never silently degrades to the heuristic.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::session::Session;

/// Errors that can occur while building or running a scorer
#[derive(Error, Debug)]
pub enum ScorerError {
    #[error(
        "no external model backend is available in this build; provide a \
         ModelBackend implementation compatible with your trained model and \
         vocabulary, or rerun with the heuristic scorer"
    )]
    BackendMissing,

    #[error("model backend failed to load from {location}: {reason}")]
    LoadFailed { location: String, reason: String },

    #[error("model backend failed while scoring: {0}")]
    ScoreFailed(String),

    #[error("model backend returned {got} scores for {expected} sessions")]
    ScoreCountMismatch { expected: usize, got: usize },
}

/// Result type for scorer operations
pub type Result<T> = std::result::Result<T, ScorerError>;

/// Common contract for session scoring
///
/// Implementations return exactly one score per input session, in input
/// order, each within [0,1].
pub trait SessionScorer {
    /// Score every session in one pass
    fn score(&self, sessions: &[Session]) -> Result<Vec<f64>>;
}

/// A loaded external scoring model, ready to score sessions
///
/// Whatever state the backend needs at scoring time - model weights,
/// vocabulary, device handles - lives behind this trait; `load` is called
/// once per run and the returned model is reused for all sessions.
pub trait ScoringModel {
    /// Score sessions with the loaded model; raw scores, one per session
    fn score(&self, sessions: &[Session]) -> Result<Vec<f64>>;
}

/// External scoring capability: loads a model and vocabulary from a location
pub trait ModelBackend {
    /// Load the model and vocabulary found at `location`
    fn load(&self, location: &Path) -> Result<Box<dyn ScoringModel>>;
}

/// The model backend compiled into this build, if any
///
/// This build ships without one; requesting the model scorer therefore fails
/// with [`ScorerError::BackendMissing`] before any input is read. Downstream
/// builds wire their trained model in here.
pub fn registered_backend() -> Option<Box<dyn ModelBackend>> {
    None
}

/// Clamp a raw score into [0,1]
pub fn clamp_unit(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

/// Repetition heuristic: low key diversity reads as anomalous
///
/// For each session, `score = 1 - distinct_keys / max(1, len)`. A session of
/// identical keys scores just under 1.0 for long sessions; an all-distinct
/// session scores exactly 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl SessionScorer for HeuristicScorer {
    fn score(&self, sessions: &[Session]) -> Result<Vec<f64>> {
        let scores = sessions
            .iter()
            .map(|session| {
                let distinct: HashSet<&str> =
                    session.keys.iter().map(String::as_str).collect();
                let unique_ratio = distinct.len() as f64 / session.len().max(1) as f64;
                clamp_unit(1.0 - unique_ratio)
            })
            .collect();
        Ok(scores)
    }
}

/// Scorer backed by an externally loaded model
pub struct ModelScorer {
    model: Box<dyn ScoringModel>,
}

impl fmt::Debug for ModelScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The loaded model is opaque; only the wrapper is named
        f.debug_struct("ModelScorer").finish_non_exhaustive()
    }
}

impl ModelScorer {
    /// Load the model once via the backend; reused for every session of the run
    pub fn load(backend: &dyn ModelBackend, location: &Path) -> Result<Self> {
        let model = backend.load(location)?;
        Ok(Self { model })
    }
}

impl SessionScorer for ModelScorer {
    fn score(&self, sessions: &[Session]) -> Result<Vec<f64>> {
        let raw = self.model.score(sessions)?;
        if raw.len() != sessions.len() {
            return Err(ScorerError::ScoreCountMismatch {
                expected: sessions.len(),
                got: raw.len(),
            });
        }
        raw.into_iter()
            .map(|score| {
                if score.is_finite() {
                    Ok(clamp_unit(score))
                } else {
                    Err(ScorerError::ScoreFailed(format!(
                        "non-finite score {score}"
                    )))
                }
            })
            .collect()
    }
}
