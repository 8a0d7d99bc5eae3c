use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{CheckArgs, ConversionArgs, ConvertArgs, LogsArgs};

#[derive(Debug, Parser)]
#[command(name = "onto2bsdd")]
#[command(about = "Convert ontology mapping rows into a bSDD dictionary", version)]
pub struct Cli {
    /// TOML settings file. `ONTO2BSDD_*` environment variables override it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Append one JSONL entry per conversion run to this file.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the dictionary document to stdout or `--output`.
    Convert(ConvertArgs),
    /// Run the conversion and print its report only.
    Check(CheckArgs),
    /// Print the effective settings as TOML.
    Config,
    /// Print recent conversion log entries, newest first.
    Logs(LogsArgs),
}

impl Commands {
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Convert(_) => "convert",
            Self::Check(_) => "check",
            Self::Config => "config",
            Self::Logs(_) => "logs",
        }
    }
}
