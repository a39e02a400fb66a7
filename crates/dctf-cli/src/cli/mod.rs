use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod shell_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use shell_commands::{ShellCommand, ShellLine};

/// Top-level CLI parser for the `dctf` binary.
///
/// Starting `dctf` opens one monitoring session. Commands are then read line
/// by line from stdin, or from `--script`; everything is discarded on exit.
#[derive(Debug, Parser)]
#[command(
    name = "dctf",
    version,
    about = "DCTFWeb/REINF delivery monitor - interactive session"
)]
pub struct Cli {
    /// Output format: json, table, raw
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Colorize table status cells: auto, always, never
    #[arg(long, default_value = "auto")]
    pub color: ColorMode,

    /// Query progress bar: auto, on, off
    #[arg(long, default_value = "auto")]
    pub progress: ProgressMode,

    /// Read session commands from a file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Simulated latency per company, in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the simulated status draw (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for exported CSV files (overrides config)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
        }
    }
}
