//! CLI argument parsing for Logsift

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which scorer variant to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScorerKind {
    /// Built-in repetition heuristic (no external dependency)
    Heuristic,
    /// Externally supplied model backend (fails fast if none is available)
    Model,
}

#[derive(Parser, Debug)]
#[command(name = "logsift")]
#[command(version)]
#[command(about = "Sessionized anomaly scoring for Windows event logs", long_about = None)]
pub struct Cli {
    /// Path to the event log to score
    #[arg(value_name = "LOG")]
    pub log: PathBuf,

    /// Events per session
    #[arg(long = "session-size", value_name = "N", default_value = "20")]
    pub session_size: usize,

    /// Step between session starts; 0 or omitted means session size
    #[arg(long = "stride", value_name = "N", default_value = "10")]
    pub stride: usize,

    /// Scorer variant to use
    #[arg(long = "scorer", value_enum, default_value = "heuristic")]
    pub scorer: ScorerKind,

    /// Directory holding the model checkpoint, vocabulary and threshold.json
    #[arg(long = "model-dir", value_name = "DIR", default_value = "model")]
    pub model_dir: PathBuf,

    /// Directory for predictions.json and line_predictions.json
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Stop reading after this many raw lines
    #[arg(long = "max-lines", value_name = "N")]
    pub max_lines: Option<usize>,

    /// Watch the log and rerun whenever its size or mtime changes
    #[arg(short = 'w', long = "watch")]
    pub watch: bool,

    /// Polling interval in seconds when watching
    #[arg(long = "interval", value_name = "SECS", default_value = "2.0")]
    pub interval: f64,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_log_path() {
        let cli = Cli::parse_from(["logsift", "data/windows.log"]);
        assert_eq!(cli.log, PathBuf::from("data/windows.log"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["logsift", "windows.log"]);
        assert_eq!(cli.session_size, 20);
        assert_eq!(cli.stride, 10);
        assert_eq!(cli.scorer, ScorerKind::Heuristic);
        assert_eq!(cli.interval, 2.0);
        assert!(!cli.watch);
        assert!(!cli.debug);
        assert!(cli.max_lines.is_none());
    }

    #[test]
    fn test_cli_model_scorer() {
        let cli = Cli::parse_from(["logsift", "--scorer", "model", "windows.log"]);
        assert_eq!(cli.scorer, ScorerKind::Model);
    }

    #[test]
    fn test_cli_custom_window() {
        let cli = Cli::parse_from([
            "logsift",
            "--session-size",
            "50",
            "--stride",
            "25",
            "windows.log",
        ]);
        assert_eq!(cli.session_size, 50);
        assert_eq!(cli.stride, 25);
    }

    #[test]
    fn test_cli_watch_flags() {
        let cli = Cli::parse_from(["logsift", "-w", "--interval", "0.5", "windows.log"]);
        assert!(cli.watch);
        assert_eq!(cli.interval, 0.5);
    }

    #[test]
    fn test_cli_requires_log_path() {
        assert!(Cli::try_parse_from(["logsift"]).is_err());
    }
}
