use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use takehome_core::{StateRateTable, TaxEngine};

mod input;
mod report;
mod states;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Take-home pay estimator across all US states.
///
/// Computes estimated federal, state, and FICA taxes for the given income
/// and ranks every state (plus DC) by remaining take-home pay.
#[derive(Debug, Parser)]
struct Cli {
    /// Annual gross income in dollars.
    /// Accepts `$` and thousands separators (e.g. `85,000` or `$120000.50`).
    income: String,

    /// Treat INCOME as a monthly amount and annualize it before calculating.
    #[arg(long)]
    monthly: bool,

    /// Emit the ranked results as a JSON array instead of a table.
    #[arg(long)]
    json: bool,

    /// Show only the top N states in the table output.
    #[arg(long, value_name = "N")]
    top: Option<usize>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut income = input::parse_income(&cli.income)?;
    if cli.monthly {
        income *= Decimal::from(12);
    }
    debug!(%income, "annual income parsed");

    let engine = TaxEngine::new(StateRateTable::year_2024());
    let results = engine.calculate_all_states(income)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", report::render(&results, cli.top));
    }

    Ok(())
}
