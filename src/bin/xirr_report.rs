//! Calculate XIRR and an XNPV rate sweep for a cash flow CSV
//!
//! Reads a `Date,Amount` CSV (first row = anchor entry), solves for the
//! internal rate of return, and evaluates NPV at each requested sweep
//! rate. Supports JSON output for API integration via --json.

use anyhow::Context;
use cashflow_metrics::{xirr_series, xnpv_sweep, FinanceError, RatePoint};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "XIRR/XNPV report for a dated cash flow CSV")]
struct Args {
    /// Path to the cash flow CSV (Date,Amount with ISO-8601 dates)
    input: PathBuf,

    /// Discount rates for the XNPV sweep
    #[arg(long, value_delimiter = ',', default_value = "0.05,0.10,0.15")]
    rates: Vec<f64>,

    /// Initial guess for the XIRR search (default 10%)
    #[arg(long)]
    guess: Option<f64>,

    /// Emit a single JSON document instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ReportResponse {
    xirr_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xirr_error: Option<String>,
    sweep: Vec<RatePoint>,
    cashflow_count: usize,
    execution_time_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let series = cashflow_metrics::cashflow::load_series(&args.input)
        .with_context(|| format!("Failed to load cash flows from {}", args.input.display()))?;

    let xirr_result = xirr_series(&series, args.guess);

    let sweep = match xnpv_sweep(&series, &args.rates) {
        Ok(points) => points,
        // The sweep fails only on validation errors, which the XIRR result
        // already carries; report it there and keep the sweep empty
        Err(_) => Vec::new(),
    };

    let execution_time_ms = start.elapsed().as_millis() as u64;

    if args.json {
        let response = ReportResponse {
            xirr_pct: xirr_result.ok().map(|r| r * 100.0),
            xirr_error: xirr_result.err().map(|e| e.to_string()),
            sweep,
            cashflow_count: series.len(),
            execution_time_ms,
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    // Human-readable output
    println!("Loaded {} cash flows from {}", series.len(), args.input.display());

    if !sweep.is_empty() {
        println!("\nXNPV sweep:");
        for point in &sweep {
            println!("  {:>7.2}%  {:>14.4}", point.rate * 100.0, point.npv);
        }
    }

    match xirr_result {
        Ok(rate) => {
            println!("\n========================================");
            println!("  XIRR: {:.4}%", rate * 100.0);
            println!("========================================");
        }
        Err(FinanceError::TooLongComputation) => {
            println!("\n  XIRR search did not converge; retry with --guess");
        }
        Err(e) => {
            println!("\n  Invalid cash flow series: {}", e);
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
