mod args;

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use shelf_app::modules::books::models::{BookRecord, BOOK_RECORD_SCHEMA};
use shelf_kernel::settings::Settings;
use shelf_validation::{parse_int_param, Validator};

use args::{Cli, Command};

/// Exit status for `validate` input that is not JSON at all
const INPUT_SYNTAX_ERROR: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load shelf settings")?;
    shelf_telemetry::init(&settings.telemetry)?;

    match cli.command {
        Command::Serve => serve(settings),
        Command::Validate { file } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("failed to read stdin")?;
                    buffer
                }
            };
            validate(&input)
        }
        Command::ParseId { value } => Ok(parse_id(&value)),
    }
}

fn serve(settings: Settings) -> anyhow::Result<ExitCode> {
    tracing::info!(
        env = ?settings.environment,
        bind = %settings.server.bind_address(),
        "shelf serve starting"
    );

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(shelf_app::run(settings))?;
    Ok(ExitCode::SUCCESS)
}

fn validate(input: &str) -> anyhow::Result<ExitCode> {
    let raw: serde_json::Value = match serde_json::from_str(input) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("input is not valid JSON: {err}");
            return Ok(ExitCode::from(INPUT_SYNTAX_ERROR));
        }
    };
    let validator = Validator::new(&BOOK_RECORD_SCHEMA);

    match validator.validate::<BookRecord>(&raw) {
        Ok(book) => {
            println!("{}", serde_json::to_string(&book)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(error = %err, "book body rejected");
            println!("{}", serde_json::to_string(err.violations())?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn parse_id(value: &str) -> ExitCode {
    match parse_int_param("id", value) {
        Ok(id) => {
            println!("{id}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
