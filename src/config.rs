//! Run configuration: output paths and the anomaly threshold
//!
//! Path layout is an explicit value handed to the pipeline entry point, not
//! process-global state. The threshold file is optional configuration: any
//! problem reading or parsing it falls back to the default rather than
//! failing the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Default anomaly threshold when no valid threshold file is present
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Threshold file name, looked up inside the model directory
pub const THRESHOLD_FILE: &str = "threshold.json";

/// Output artifact locations for one run
#[derive(Debug, Clone)]
pub struct RunPaths {
    /// Directory holding both artifacts; created once before any write
    pub output_dir: PathBuf,
}

impl RunPaths {
    /// Path configuration rooted at `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Session predictions artifact
    pub fn predictions(&self) -> PathBuf {
        self.output_dir.join("predictions.json")
    }

    /// Line predictions artifact
    pub fn line_predictions(&self) -> PathBuf {
        self.output_dir.join("line_predictions.json")
    }

    /// Create the output directory if needed; called once per run, before
    /// any artifact write
    pub fn ensure_output_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.output_dir)
    }
}

#[derive(Deserialize)]
struct ThresholdFile {
    anomaly_threshold: Option<f64>,
}

/// Loads the anomaly threshold from `<model_dir>/threshold.json`
///
/// Missing file, unreadable file, malformed JSON, or a missing/non-numeric
/// field all yield `default` - configuration problems here are recoverable by
/// design and only logged. Parseable but out-of-range values are clamped
/// into [0,1].
pub fn load_threshold(model_dir: &Path, default: f64) -> f64 {
    let path = model_dir.join(THRESHOLD_FILE);
    let Ok(text) = fs::read_to_string(&path) else {
        return default;
    };
    match serde_json::from_str::<ThresholdFile>(&text) {
        Ok(ThresholdFile {
            anomaly_threshold: Some(value),
        }) if value.is_finite() => {
            if !(0.0..=1.0).contains(&value) {
                warn!(value, "threshold out of [0,1], clamping");
            }
            value.clamp(0.0, 1.0)
        }
        Ok(_) => {
            warn!(path = %path.display(), "threshold file has no usable anomaly_threshold, using default");
            default
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "malformed threshold file, using default");
            default
        }
    }
}
