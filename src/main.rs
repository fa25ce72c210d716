//! Settings group CLI
//!
//! Evaluates settings-group visibility for a JSON request and prints the decision.

use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use settings_group_core::catalog::{known_features, FeatureCategory};
use settings_group_core::{AccessEvaluator, EvaluationRequest, SettingsError};
use tracing_subscriber::EnvFilter;

const HELP: &str = r#"
Settings group CLI

USAGE:
    settings-group <COMMAND> [OPTIONS]

COMMANDS:
    evaluate    Evaluate a settings group request and print the decision as JSON
    features    List known features and whether they bypass the admin gate (JSON)

OPTIONS:
    -f, --file <FILE>    Read the request from a file instead of the argument
    -h, --help           Print help information
    -V, --version        Print version information

EXAMPLES:
    settings-group evaluate '{"context": {"userCanManageModules": false}, "module": "post-by-email"}'
    settings-group evaluate -f request.json
    RUST_LOG=debug settings-group evaluate -f request.json
"#;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", HELP);
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            println!("{}", HELP);
            ExitCode::SUCCESS
        }
        "-V" | "--version" | "version" => {
            println!("settings-group {}", settings_group_core::VERSION);
            ExitCode::SUCCESS
        }
        "evaluate" => run_evaluate(&args[2..]),
        "features" => run_features(),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("{}", HELP);
            ExitCode::FAILURE
        }
    }
}

/// Where `evaluate` reads its request from.
#[derive(Debug, PartialEq, Eq)]
enum RequestSource {
    File(PathBuf),
    Inline(String),
}

fn parse_request_source(args: &[String]) -> Result<RequestSource, String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-f" | "--file" => {
                return match iter.next() {
                    Some(path) => Ok(RequestSource::File(PathBuf::from(path))),
                    None => Err(format!("Error: {} requires a file path", arg)),
                };
            }
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {}", flag)),
            json => return Ok(RequestSource::Inline(json.to_string())),
        }
    }
    Err("Error: request JSON or --file required".to_string())
}

fn read_request(args: &[String]) -> Result<EvaluationRequest, String> {
    match parse_request_source(args)? {
        RequestSource::File(path) => settings_group_core::load_request(&path).map_err(|e| e.to_string()),
        RequestSource::Inline(json) => {
            EvaluationRequest::from_json(json.trim_start()).map_err(|e: SettingsError| e.to_string())
        }
    }
}

fn run_evaluate(args: &[String]) -> ExitCode {
    let request = match read_request(args) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let decision = request.evaluate_with(&AccessEvaluator::new());
    match serde_json::to_string_pretty(&decision) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to encode decision: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Serialize)]
struct FeatureListing {
    id: &'static str,
    category: FeatureCategory,
}

fn features_json() -> Result<String, serde_json::Error> {
    let listing: Vec<FeatureListing> = known_features()
        .map(|(id, category)| FeatureListing { id, category })
        .collect();
    serde_json::to_string_pretty(&listing)
}

fn run_features() -> ExitCode {
    match features_json() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to encode feature list: {}", e);
            ExitCode::FAILURE
        }
    }
}
