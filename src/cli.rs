//! Command-line interface definitions using clap derive macros.
//!
//! The binary builds one loader from its positional path segments,
//! invokes it once and prints the resulting document.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "yaml-source",
    version,
    about = "Load a YAML file the way a config aggregator would",
    after_help = "\x1b[1mExamples:\x1b[0m\n  \
        yaml-source conf app.yaml                     Print conf/app.yaml as JSON\n  \
        yaml-source --throw-on-error /etc app.yaml    Fail instead of printing {}\n  \
        yaml-source -o yaml conf app.yaml             Re-emit as YAML"
)]
pub struct Cli {
    /// Path segments, joined in order
    #[arg(required = true, num_args = 1..)]
    pub segments: Vec<PathBuf>,

    /// Exit with an error instead of printing an empty mapping
    #[arg(long)]
    pub throw_on_error: bool,

    /// Where load failures are reported
    #[arg(long, default_value = "tracing")]
    pub reporter: ReporterKind,

    /// Document output format
    #[arg(short, long, default_value = "json")]
    pub output: OutputFormat,

    // -- Logging --
    /// Log level
    #[arg(short, long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReporterKind {
    Stderr,
    Tracing,
    Silent,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}
