//! CLI for the Pandora Outcome algebra.
//!
//! Every argument enters the Outcome channel through `wrap_exception`, is
//! composed with the core combinators, and is only folded into output at
//! the very end.

use clap::{Parser, Subcommand};
use pandora_core::{all, wrap_exception, BoxError, Outcome, PandoraError, PandoraResult};
use pandora_flow::{launch, FnEffect};
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "pandora",
    version,
    about = "Compose fallible steps with the Outcome algebra"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse integers and sum them; stops at the first invalid value.
    Parse {
        #[arg(required = true)]
        values: Vec<String>,

        /// Replace captured parse errors with this message.
        #[arg(long, env = "PANDORA_FALLBACK")]
        fallback: Option<String>,

        #[arg(long, default_value_t = false)]
        json: bool,

        /// Unwrap the aggregate and exit non-zero on failure.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Parse integers, recovering each invalid value as 0.
    Recover {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Validate values asynchronously and stream them to a reactive consumer.
    Watch {
        #[arg(required = true)]
        values: Vec<String>,

        /// Largest accepted value.
        #[arg(long, default_value_t = 1_000)]
        max: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ParseReport {
    values: Vec<i64>,
    sum: i64,
}

fn parse_value(raw: &str, fallback: Option<&str>) -> Outcome<i64, String> {
    wrap_exception(fallback.map(BoxError::from), || Ok(raw.trim().parse::<i64>()?))
        .map_error(|e| format!("{raw:?}: {e}"))
}

fn sum_values(values: Vec<i64>) -> Outcome<ParseReport, String> {
    match values.iter().try_fold(0i64, |acc, v| acc.checked_add(*v)) {
        Some(sum) => Outcome::Success(ParseReport { values, sum }),
        None => Outcome::Failure("sum overflows i64".to_string()),
    }
}

fn aggregate(values: &[String], fallback: Option<&str>) -> Outcome<ParseReport, String> {
    all(values.iter().map(|raw| parse_value(raw, fallback))).and_then(sum_values)
}

async fn validate(value: i64, max: i64) -> Outcome<i64, String> {
    tokio::task::yield_now().await;
    if value > max {
        Outcome::Failure(format!("{value} exceeds {max}"))
    } else {
        Outcome::Success(value)
    }
}

fn run_parse(
    values: &[String],
    fallback: Option<&str>,
    json: bool,
    strict: bool,
) -> PandoraResult<()> {
    if values.is_empty() {
        return Err(PandoraError::InvalidInput("no values given".into()));
    }

    let aggregated = aggregate(values, fallback);
    tracing::info!(
        inputs = values.len(),
        success = aggregated.is_success(),
        "parsed values"
    );

    if json {
        let rendered = serde_json::to_string_pretty(&aggregated)
            .map_err(|e| PandoraError::Internal(e.to_string()))?;
        println!("{rendered}");
    } else {
        let line = aggregated.as_ref().fold(
            |report| format!("sum = {} ({} values)", report.sum, report.values.len()),
            |error| format!("error: {error}"),
        );
        println!("{line}");
    }

    if strict {
        aggregated.get_or_throw()?;
    }
    Ok(())
}

fn run_recover(values: &[String]) {
    for raw in values {
        let recovered: Outcome<i64, Infallible> = parse_value(raw, None).and_then_error(|error| {
            tracing::warn!(%error, "recovering with 0");
            Outcome::Success(0)
        });
        println!("{raw} -> {recovered}");
    }
}

async fn run_watch(values: &[String], max: i64) -> PandoraResult<()> {
    let effect = Arc::new(FnEffect::new(
        |value: i64| println!("accepted {value}"),
        |error: String| eprintln!("rejected {error}"),
    ));

    let (tx, rx) = tokio::sync::mpsc::channel::<Outcome<i64, String>>(16);
    let handle = launch(rx, effect);

    for raw in values {
        let checked = parse_value(raw, None)
            .and_then_async(|value| validate(value, max))
            .await;
        tx.send(checked)
            .await
            .map_err(|e| PandoraError::Internal(e.to_string()))?;
    }
    drop(tx);

    let stats = handle
        .await
        .map_err(|e| PandoraError::Internal(e.to_string()))?;
    tracing::info!(
        accepted = stats.successes,
        rejected = stats.failures,
        "watch finished"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            values,
            fallback,
            json,
            strict,
        } => run_parse(&values, fallback.as_deref(), json, strict)?,
        Commands::Recover { values } => run_recover(&values),
        Commands::Watch { values, max } => run_watch(&values, max).await?,
    }

    Ok(())
}
