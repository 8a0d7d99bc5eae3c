use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct ConversionArgs {
    /// Mapping rows, CSV or a JSON array (`.json`).
    #[arg(long, short)]
    pub input: PathBuf,
    /// JSON object with the dictionary header fields, `DictionaryCode` included.
    #[arg(long)]
    pub header: PathBuf,
    /// Fail instead of pruning dangling parent or property references.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub conversion: ConversionArgs,
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub conversion: ConversionArgs,
}

#[derive(Debug, Args)]
pub struct LogsArgs {
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}
