//! The full scoring pipeline: one synchronous pass per run
//!
//! read -> tokenize -> sessionize -> score -> project -> write artifacts.
//! The scorer is resolved before any input is read, so a missing model
//! backend is surfaced at pipeline start. Both artifacts are serialized in
//! full before either file is written: a run either succeeds and overwrites
//! both, or fails and leaves prior output untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::ScorerKind;
use crate::config::{self, RunPaths, DEFAULT_THRESHOLD};
use crate::predict::project;
use crate::reader::read_log_lines;
use crate::scorer::{
    registered_backend, HeuristicScorer, ModelScorer, ScorerError, SessionScorer,
};
use crate::session::sessionize;
use crate::tokenizer::to_log_keys;

/// Pipeline knobs for one run, resolved from the CLI
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Events per session
    pub session_size: usize,
    /// Step between session starts; `None` means session size
    pub stride: Option<usize>,
    /// Scorer variant
    pub scorer: ScorerKind,
    /// Model directory: checkpoint, vocabulary, threshold.json
    pub model_dir: PathBuf,
    /// Cap on raw lines read
    pub max_lines: Option<usize>,
}

/// What a completed run produced, for logging and callers
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Non-blank lines read from the log
    pub total_lines: usize,
    /// Sessions emitted and scored
    pub sessions: usize,
    /// Sessions at or above the threshold
    pub anomalous_sessions: usize,
    /// Threshold used for this run
    pub threshold: f64,
}

/// Resolve the scorer for this run
///
/// The model path fails here, before any input is read, when no backend is
/// available or the backend cannot load - never a silent fallback to the
/// heuristic.
pub fn build_scorer(config: &PipelineConfig) -> Result<Box<dyn SessionScorer>, ScorerError> {
    match config.scorer {
        ScorerKind::Heuristic => Ok(Box::new(HeuristicScorer)),
        ScorerKind::Model => {
            let backend = registered_backend().ok_or(ScorerError::BackendMissing)?;
            let scorer = ModelScorer::load(backend.as_ref(), &config.model_dir)?;
            Ok(Box::new(scorer))
        }
    }
}

/// Run the pipeline once and write both artifacts
pub fn run_once(log_path: &Path, paths: &RunPaths, config: &PipelineConfig) -> Result<RunSummary> {
    let scorer = build_scorer(config)?;

    let lines = read_log_lines(log_path, config.max_lines)
        .with_context(|| format!("failed to read log file {}", log_path.display()))?;
    let keys = to_log_keys(&lines);
    let sessions = sessionize(&keys, config.session_size, config.stride);
    debug!(
        lines = lines.len(),
        sessions = sessions.len(),
        "sessionized log"
    );

    let threshold = config::load_threshold(&config.model_dir, DEFAULT_THRESHOLD);
    let scores = scorer.score(&sessions)?;
    let (session_preds, line_preds) = project(&scores, &sessions, threshold, keys.len());

    // Serialize everything before touching the filesystem
    let sessions_json = serde_json::to_string_pretty(&session_preds)?;
    let lines_json = serde_json::to_string_pretty(&line_preds)?;

    paths
        .ensure_output_dir()
        .with_context(|| format!("failed to create {}", paths.output_dir.display()))?;
    fs::write(paths.predictions(), sessions_json)
        .with_context(|| format!("failed to write {}", paths.predictions().display()))?;
    fs::write(paths.line_predictions(), lines_json)
        .with_context(|| format!("failed to write {}", paths.line_predictions().display()))?;

    let summary = RunSummary {
        total_lines: keys.len(),
        sessions: session_preds.len(),
        anomalous_sessions: session_preds.iter().filter(|p| p.is_anomaly).count(),
        threshold,
    };
    info!(
        sessions = summary.sessions,
        anomalous = summary.anomalous_sessions,
        threshold = summary.threshold,
        "wrote predictions to {}",
        paths.output_dir.display()
    );
    Ok(summary)
}
