use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use logsift::{
    cli::Cli,
    config::RunPaths,
    pipeline::{self, PipelineConfig},
    watch,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.interval <= 0.0 {
        anyhow::bail!(
            "Invalid value for --interval: {} (must be > 0)",
            args.interval
        );
    }

    init_tracing(args.debug);

    let config = PipelineConfig {
        session_size: args.session_size,
        stride: (args.stride > 0).then_some(args.stride),
        scorer: args.scorer,
        model_dir: args.model_dir,
        max_lines: args.max_lines,
    };
    let paths = RunPaths::new(args.output_dir);

    if args.watch {
        watch::watch(
            &args.log,
            &paths,
            &config,
            Duration::from_secs_f64(args.interval),
        )
    } else {
        let summary = pipeline::run_once(&args.log, &paths, &config)?;
        println!(
            "Saved predictions to {} (sessions={}, anomalous={}, threshold={})",
            paths.output_dir.display(),
            summary.sessions,
            summary.anomalous_sessions,
            summary.threshold
        );
        Ok(())
    }
}
