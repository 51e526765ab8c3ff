// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dagplot`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagplot",
    version,
    about = "Render a DAG description to an image via Graphviz.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the DAG description file (TOML).
    ///
    /// Default: `Dagplot.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Dagplot.toml")]
    pub input: String,

    /// Output file path.
    ///
    /// If omitted, a name is derived from the format (`dag.png`, `dag.svg`,
    /// `dag.dot`).
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Output format.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "png")]
    pub format: OutputFormat,

    /// Parse + validate, print the nodes and DOT text, but don't render.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGPLOT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Output format as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Svg,
    /// Write the DOT text instead of invoking Graphviz.
    Dot,
}

impl OutputFormat {
    /// Default output filename for this format.
    pub fn default_output(self) -> &'static str {
        match self {
            OutputFormat::Png => "dag.png",
            OutputFormat::Svg => "dag.svg",
            OutputFormat::Dot => "dag.dot",
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
