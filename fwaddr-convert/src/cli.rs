use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fwaddr-convert")]
#[command(about = "Convert a CSV host inventory into FortiGate address objects and groups")]
pub struct Cli {
    /// Inventory CSV (columns: hostname, ip address, Subnetmask, comment).
    ///
    /// Exactly one file is converted; any other count prints usage instead.
    #[arg(num_args = 0..)]
    pub inputs: Vec<PathBuf>,
    /// Output file path. Defaults to the input path with a `.txt` extension.
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Print the configuration to standard output instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
    /// Fail on subnet masks that are not in the dotted-decimal mask table.
    #[arg(long)]
    pub strict_masks: bool,
    /// Optional settings TOML file (column names, mask policy).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print conversion counts after writing.
    #[arg(long)]
    pub summary: bool,
    /// Summary output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write template.csv in the current directory and exit.
    #[arg(long, conflicts_with = "inputs")]
    pub template: bool,
    /// Log each row at debug level on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
