//! calc - scriptable front end for the Calccast engine

use std::io::{self, Read, Write};

use clap::Parser;
use libcalc::logging::{LoggingConfig, LOG_LEVEL_ENV};
use libcalc::{CalcError, Config, Engine, EngineError, HistoryEntry, Input, Result};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(version, about = "Run key tokens through the calculator engine")]
#[command(long_about = r#"Run key tokens through the calculator engine and print the display.

Each token is one key: a number (12.5), an operator (+ - * x / ^),
= to evaluate, < to delete a digit, or C to clear. With no tokens on the
command line they are read from stdin, separated by whitespace.

EXAMPLES:
    calc 5 + 3 =
    calc --history 2 + 3 x 4 =
    echo "6 / 4 =" | calc --format json
    calc --format jsonl 1 + 1 = + 1 = | jq .result

EXIT CODES:
    0 - Success
    1 - Configuration or IO error
    2 - Calculation error (division by zero, missing operand)
    3 - Invalid input (unknown token)
"#)]
struct Cli {
    /// Key tokens (reads from stdin if not provided)
    #[arg(value_name = "TOKEN")]
    tokens: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Print the history after the display (text format)
    #[arg(long)]
    history: bool,

    /// Report calculation errors and continue instead of stopping
    #[arg(short, long)]
    keep_going: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Machine-readable view of the engine after a run
#[derive(Debug, Serialize)]
struct Report {
    display: String,
    pending: Option<String>,
    error: Option<String>,
    history: Vec<HistoryEntry>,
}

impl Report {
    fn from_engine(engine: &Engine, error: Option<&EngineError>) -> Self {
        Self {
            display: engine.buffer().to_string(),
            pending: engine.pending_display(),
            error: error.map(ToString::to_string),
            history: engine.history().to_vec(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let config = Config::load_or_default()?;
    let mut engine = Engine::with_config(&config.engine);

    let tokens = if cli.tokens.is_empty() {
        read_stdin_tokens()?
    } else {
        cli.tokens.clone()
    };
    let inputs = parse_tokens(&tokens)?;
    tracing::debug!(count = inputs.len(), "Parsed key tokens");

    let mut last_error = None;
    for input in inputs {
        let Some(error) = engine.apply(input).error else {
            continue;
        };

        if !cli.keep_going {
            print_report(&cli, &engine, Some(&error))?;
            return Err(error.into());
        }

        tracing::warn!(%error, ?input, "Continuing after calculation error");
        eprintln!("Error: {}", error);
        last_error = Some(error);
    }

    print_report(&cli, &engine, last_error.as_ref())
}

/// Quiet by default; `--verbose` or `CALC_LOG_LEVEL` turn logging up
fn init_logging(verbose: bool) -> Result<()> {
    let mut logging = LoggingConfig::from_env(verbose);
    if std::env::var(LOG_LEVEL_ENV).is_err() {
        logging.level = "error".to_string();
    }
    logging.init()
}

fn read_stdin_tokens() -> Result<Vec<String>> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.split_whitespace().map(str::to_string).collect())
}

/// Expand tokens into engine inputs; any unknown token fails the whole run
fn parse_tokens(tokens: &[String]) -> Result<Vec<Input>> {
    let mut inputs = Vec::with_capacity(tokens.len());
    for token in tokens {
        let expanded = Input::parse_all(token)
            .ok_or_else(|| CalcError::InvalidInput(format!("unrecognised token '{}'", token)))?;
        inputs.extend(expanded);
    }
    Ok(inputs)
}

fn print_report(cli: &Cli, engine: &Engine, error: Option<&EngineError>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format.as_str() {
        "json" => {
            let report = Report::from_engine(engine, error);
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        "jsonl" => {
            for entry in engine.history() {
                writeln!(out, "{}", serde_json::to_string(entry)?)?;
            }
        }
        _ => {
            for line in render_text(engine, cli.history) {
                writeln!(out, "{}", line)?;
            }
        }
    }

    Ok(())
}

fn render_text(engine: &Engine, with_history: bool) -> Vec<String> {
    let mut lines = vec![engine.buffer().to_string()];
    if with_history {
        lines.extend(engine.format_history());
    }
    lines
}
