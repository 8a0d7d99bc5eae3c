use std::path::Path;

use super::*;
use clap::Parser;

#[test]
fn convert_parses_paths_and_defaults() {
    let cli = Cli::try_parse_from([
        "onto2bsdd",
        "convert",
        "--input",
        "rows.csv",
        "--header",
        "header.json",
    ])
    .expect("parse");
    assert!(cli.config.is_none());
    assert!(cli.log_file.is_none());
    match cli.command {
        Commands::Convert(ConvertArgs { conversion, output }) => {
            assert_eq!(conversion.input, PathBuf::from("rows.csv"));
            assert_eq!(conversion.header, PathBuf::from("header.json"));
            assert!(!conversion.strict);
            assert!(output.is_none());
        }
        _ => panic!("expected convert command"),
    }
}

#[test]
fn global_flags_are_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from([
        "onto2bsdd",
        "check",
        "-i",
        "rows.json",
        "--header",
        "header.json",
        "--strict",
        "--config",
        "onto2bsdd.toml",
        "--log-file",
        "logs/conversion.jsonl",
    ])
    .expect("parse");
    assert_eq!(cli.config.as_deref(), Some(Path::new("onto2bsdd.toml")));
    assert_eq!(
        cli.log_file.as_deref(),
        Some(Path::new("logs/conversion.jsonl"))
    );
    assert_eq!(cli.command.operation(), "check");
    match cli.command {
        Commands::Check(CheckArgs { conversion }) => assert!(conversion.strict),
        _ => panic!("expected check command"),
    }
}

#[test]
fn convert_requires_header() {
    let parsed = Cli::try_parse_from(["onto2bsdd", "convert", "--input", "rows.csv"]);
    assert!(parsed.is_err(), "header is required");
}

#[test]
fn logs_parses_limit() {
    let cli = Cli::try_parse_from([
        "onto2bsdd",
        "--log-file",
        "conversion.jsonl",
        "logs",
        "--limit",
        "5",
    ])
    .expect("parse");
    match cli.command {
        Commands::Logs(LogsArgs { limit }) => assert_eq!(limit, 5),
        _ => panic!("expected logs command"),
    }
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["onto2bsdd", "serve"]).is_err());
}
