//! Logsift - sessionized anomaly scoring for Windows event logs
//!
//! This library provides the core pipeline for turning a flat event log into
//! per-session and per-line anomaly scores: hash-based log keys, fixed-stride
//! sessionization, pluggable session scoring, and max-over-overlaps score
//! projection back onto individual lines.

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod predict;
pub mod reader;
pub mod scorer;
pub mod session;
pub mod tokenizer;
pub mod watch;
