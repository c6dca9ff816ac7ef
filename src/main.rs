use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use labgate::config::{AppConfig, ConfigError, OutputFormat};
use labgate::parse::parse_batch;
use labgate::present::{DialogView, FormView};
use labgate::prompt::Prompter;
use labgate::telemetry::{self, TelemetryError};
use labgate::validate::{FormInput, validate_form};
use labgate::{CheckinError, DecisionResult, UserRecord, evaluate_detailed};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "labgate",
    about = "Check users in to the training lab: score their risk and decide on access",
    version
)]
struct Cli {
    /// Log filter such as `debug` or `labgate=trace` (overrides LABGATE_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Print results as JSON (overrides LABGATE_OUTPUT)
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one submission of the check-in form and print the styled result
    Form(FormArgs),
    /// Ask for each field in turn on the terminal, then show the decision
    Prompt,
    /// Evaluate every record in a batch file
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct FormArgs {
    /// Full name
    #[arg(long)]
    name: String,
    /// Age in whole years
    #[arg(long, allow_hyphen_values = true)]
    age: String,
    /// Role: coder, tutor or visitor
    #[arg(long)]
    role: String,
    /// Tick the "I accept the lab rules" box
    #[arg(long)]
    accept_rules: bool,
    /// Hours available today (1-12)
    #[arg(long, allow_hyphen_values = true)]
    hours: String,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// File with one `name = ...; age = ...; role = ...; rules = ...; hours = ...` record per line
    file: PathBuf,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Checkin(#[from] CheckinError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Serialize)]
struct Outcome<'a> {
    user: &'a UserRecord,
    score: u32,
    #[serde(flatten)]
    result: DecisionResult,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum BatchEntry {
    Evaluated {
        line: usize,
        user: UserRecord,
        score: u32,
        #[serde(flatten)]
        result: DecisionResult,
    },
    Rejected {
        line: usize,
        error: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "labgate failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }
    telemetry::init(&config.telemetry)?;
    info!(environment = config.environment.as_str(), "labgate starting");

    match cli.command {
        Command::Form(args) => run_form(args, config.output),
        Command::Prompt => run_prompt(config.output),
        Command::Batch(args) => run_batch(&args, config.output),
    }
}

fn run_form(args: FormArgs, output: OutputFormat) -> Result<(), AppError> {
    let form = FormInput {
        full_name: args.name,
        age: args.age,
        role: args.role,
        accept_rules: args.accept_rules,
        hours: args.hours,
    };

    let mut stdout = io::stdout().lock();
    let user = match validate_form(&form) {
        Ok(user) => user,
        Err(err) => {
            warn!(error = %err, "form rejected");
            match output {
                OutputFormat::Text => writeln!(stdout, "{}", FormView::rejected(&err).to_html())?,
                OutputFormat::Json => {
                    let body = serde_json::json!({ "error": err.to_string() });
                    serde_json::to_writer(&mut stdout, &body)?;
                    writeln!(stdout)?;
                }
            }
            return Ok(());
        }
    };

    let report = evaluate_detailed(&user);
    info!(
        decision = FormView::label(report.result().decision()),
        score = report.score(),
        "form evaluated"
    );
    match output {
        OutputFormat::Text => writeln!(
            stdout,
            "{}",
            FormView::decision(report.result(), report.score()).to_html()
        )?,
        OutputFormat::Json => {
            let outcome = Outcome {
                user: &user,
                score: report.score(),
                result: report.result(),
            };
            serde_json::to_writer(&mut stdout, &outcome)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn run_prompt(output: OutputFormat) -> Result<(), AppError> {
    let stdin = io::stdin().lock();
    match output {
        OutputFormat::Text => {
            Prompter::new(stdin, io::stdout().lock()).run()?;
        }
        OutputFormat::Json => {
            // stdout carries only the JSON object; the dialog goes to stderr
            let (user, result) = Prompter::new(stdin, io::stderr().lock()).run()?;
            let outcome = Outcome {
                user: &user,
                score: labgate::score(&user),
                result,
            };
            let mut stdout = io::stdout().lock();
            serde_json::to_writer(&mut stdout, &outcome)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn run_batch(args: &BatchArgs, output: OutputFormat) -> Result<(), AppError> {
    let input = std::fs::read_to_string(&args.file)?;
    let records = parse_batch(&input).map_err(CheckinError::from)?;
    info!(file = %args.file.display(), records = records.len(), "batch parsed");

    let entries: Vec<BatchEntry> = records
        .iter()
        .map(|raw| match raw.validate() {
            Ok(user) => {
                let report = evaluate_detailed(&user);
                BatchEntry::Evaluated {
                    line: raw.line,
                    score: report.score(),
                    result: report.result(),
                    user,
                }
            }
            Err(err) => {
                warn!(error = %err, "batch record rejected");
                let error = match err {
                    CheckinError::Record { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                BatchEntry::Rejected {
                    line: raw.line,
                    error,
                }
            }
        })
        .collect();

    let mut stdout = io::stdout().lock();
    match output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &entries)?;
            writeln!(stdout)?;
        }
        OutputFormat::Text => {
            for entry in &entries {
                match entry {
                    BatchEntry::Evaluated {
                        line,
                        user,
                        score,
                        result,
                    } => writeln!(
                        stdout,
                        "line {line}: {} [{}] {} ({}), risk score {score}",
                        user.full_name,
                        user.role,
                        DialogView::label(result.decision()),
                        result.reason(),
                    )?,
                    BatchEntry::Rejected { line, error } => {
                        writeln!(stdout, "line {line}: rejected: {error}")?;
                    }
                }
            }
        }
    }
    Ok(())
}
