//! AWS Lambda handler for XNPV/XIRR over JSON cash flow payloads
//!
//! Accepts a JSON body with the dated cash flows, optional sweep rates,
//! and an optional initial guess; returns the XIRR, the sweep, and timing.
//! Validation failures come back as error strings in the body rather than
//! invocation errors, so API callers can react to the error kind.

use cashflow_metrics::{xirr_series, xnpv_sweep, CashFlow, RatePoint};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Input payload for the metrics calculation
#[derive(Debug, Deserialize)]
struct MetricsRequest {
    /// Dated cash flows; the first entry anchors the series
    cashflows: Vec<CashFlow>,

    /// Discount rates for the XNPV sweep (default: none)
    #[serde(default)]
    rates: Vec<f64>,

    /// Initial guess for the XIRR search (default 10%)
    #[serde(default)]
    guess: Option<f64>,
}

/// Output payload
#[derive(Debug, Serialize)]
struct MetricsResponse {
    /// Annualized internal rate of return, when the search succeeded
    xirr: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    xirr_error: Option<String>,

    sweep: Vec<RatePoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    sweep_error: Option<String>,

    cashflow_count: usize,
    execution_time_ms: u64,
}

async fn handler(event: LambdaEvent<MetricsRequest>) -> Result<MetricsResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    let xirr_result = xirr_series(&request.cashflows, request.guess);

    let (sweep, sweep_error) = if request.rates.is_empty() {
        (Vec::new(), None)
    } else {
        match xnpv_sweep(&request.cashflows, &request.rates) {
            Ok(points) => (points, None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        }
    };

    Ok(MetricsResponse {
        xirr: xirr_result.ok(),
        xirr_error: xirr_result.err().map(|e| e.to_string()),
        sweep,
        sweep_error,
        cashflow_count: request.cashflows.len(),
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
