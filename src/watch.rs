//! Polling watch mode
//!
//! Reruns the whole pipeline whenever the log file's change signal
//! (modification time + size) differs from the last observed one, otherwise
//! sleeps. A missing file is recoverable here: the loop reports and keeps
//! waiting. A failed run is not - scorer and write failures signal
//! configuration problems that retrying would only mask.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, SystemTime};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::RunPaths;
use crate::pipeline::{run_once, PipelineConfig};

/// Cheap change signal: (mtime, size)
pub type FileSignature = (SystemTime, u64);

/// Reads the current change signal of a file; `None` when it is inaccessible
pub fn file_signature(path: &Path) -> Option<FileSignature> {
    let meta = fs::metadata(path).ok()?;
    let mtime = meta.modified().ok()?;
    Some((mtime, meta.len()))
}

/// Watch the log and rerun the pipeline on every change
///
/// Runs until interrupted or until a run fails. Each run is self-contained;
/// results are only written after it completes fully, so no locking is
/// needed between polls.
pub fn watch(
    log_path: &Path,
    paths: &RunPaths,
    config: &PipelineConfig,
    interval: Duration,
) -> Result<()> {
    info!(
        "watching {} every {:.1}s",
        log_path.display(),
        interval.as_secs_f64()
    );

    let mut last_signature: Option<FileSignature> = None;
    loop {
        match file_signature(log_path) {
            Some(signature) => {
                if last_signature != Some(signature) {
                    last_signature = Some(signature);
                    let summary = run_once(log_path, paths, config)?;
                    info!(
                        lines = summary.total_lines,
                        sessions = summary.sessions,
                        "log changed, predictions updated"
                    );
                }
            }
            None => warn!("log file {} not found; waiting", log_path.display()),
        }
        thread::sleep(interval);
    }
}
