use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use onto2bsdd_core::ingest::read_rows_path;
use onto2bsdd_core::log::{RecentEntries, STATUS_OK, STATUS_WARNING};
use onto2bsdd_core::models::ConversionReport;
use onto2bsdd_core::{
    Conversion, ConversionLog, ConvertConfig, Converter, OntoError, ReferencePolicy,
};

use crate::cli::{Commands, ConversionArgs};

mod support;


use self::support::{print_json, read_header, write_output};

pub(crate) fn run(
    config_path: Option<&Path>,
    log_file: Option<&Path>,
    command: Commands,
) -> Result<()> {
    let log = log_file.map(ConversionLog::new);
    let operation = command.operation();

    match command {
        Commands::Convert(args) => logged(log.as_ref(), operation, &args.conversion.input, || {
            let conversion = run_conversion(config_path, &args.conversion)?;
            let json = conversion.document.to_pretty_json()?;
            write_output(args.output.as_deref(), &json)?;
            Ok(conversion.report)
        }),
        Commands::Check(args) => logged(log.as_ref(), operation, &args.conversion.input, || {
            let conversion = run_conversion(config_path, &args.conversion)?;
            print_json(&conversion.report)?;
            Ok(conversion.report)
        }),
        Commands::Config => {
            let config = load_config(config_path)?;
            let rendered = toml::to_string(&config).context("failed to render config")?;
            print!("{rendered}");
            Ok(())
        }
        Commands::Logs(args) => {
            let recent = recent_entries(log.as_ref(), args.limit)?;
            print_json(&recent)
        }
    }
}

fn load_config(config_path: Option<&Path>) -> Result<ConvertConfig> {
    ConvertConfig::load(config_path).with_context(|| match config_path {
        Some(path) => format!("failed to load config {}", path.display()),
        None => "failed to load config from environment".to_string(),
    })
}

fn recent_entries(log: Option<&ConversionLog>, limit: usize) -> Result<RecentEntries> {
    let Some(log) = log else {
        anyhow::bail!("logs requires --log-file");
    };
    log.recent(limit)
        .with_context(|| format!("failed to read log {}", log.path().display()))
}

fn run_conversion(config_path: Option<&Path>, args: &ConversionArgs) -> Result<Conversion> {
    let mut config = load_config(config_path)?;
    if args.strict {
        config.reference_policy = ReferencePolicy::Reject;
    }
    let rows = read_rows_path(&args.input)
        .with_context(|| format!("failed to read rows from {}", args.input.display()))?;
    let header = read_header(&args.header)?;
    Ok(Converter::new(config).convert(&rows, &header)?)
}

/// Runs one conversion command and appends its outcome to the log, if any.
/// A run that had to prune references is logged as a warning. Failures that
/// carry no `OntoError` are logged as internal errors.
fn logged<F>(log: Option<&ConversionLog>, operation: &str, input: &Path, run: F) -> Result<()>
where
    F: FnOnce() -> Result<ConversionReport>,
{
    let started = Instant::now();
    let outcome = run();
    let Some(log) = log else {
        return outcome.map(|_| ());
    };

    let source = Some(input.display().to_string());
    match outcome {
        Ok(report) => {
            let status = if report.pruned.is_empty() {
                STATUS_OK
            } else {
                STATUS_WARNING
            };
            log.log_status(
                operation,
                status,
                started,
                source,
                serde_json::to_value(&report).ok(),
            );
            Ok(())
        }
        Err(err) => {
            match err.downcast_ref::<OntoError>() {
                Some(onto) => log.log_error(operation, started, source, onto),
                None => {
                    let internal = OntoError::Internal(format!("{err:#}"));
                    log.log_error(operation, started, source, &internal);
                }
            }
            Err(err)
        }
    }
}
