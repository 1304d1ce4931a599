//! Cashflow Metrics CLI
//!
//! Demo run over a hardcoded investment series: prints the discount table,
//! the XNPV/XIRR results, and writes a rate sweep to CSV.

use cashflow_metrics::valuation::DAYS_PER_YEAR;
use cashflow_metrics::{xirr_series, xnpv_series, xnpv_sweep, CashFlow, DayNumber};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("Invalid demo date")
}

fn main() {
    env_logger::init();

    println!("Cashflow Metrics v0.1.0");
    println!("=======================\n");

    // Demo series: initial investment, a follow-on, two distributions
    let series = vec![
        CashFlow::new(date(2020, 1, 15), -10000.0),
        CashFlow::new(date(2020, 7, 1), -2500.0),
        CashFlow::new(date(2021, 3, 10), 4000.0),
        CashFlow::new(date(2022, 1, 15), 11000.0),
    ];

    let valuation_rate: f64 = 0.10;
    let start_day = series[0].date.day_number();

    // Print the per-flow discount table at the valuation rate
    println!("Cash flows (discounted at {:.2}%):", valuation_rate * 100.0);
    println!("{:>12} {:>8} {:>12} {:>12}", "Date", "Day", "Amount", "PV");
    println!("{}", "-".repeat(48));

    for cf in &series {
        let days = cf.date.day_number() - start_day;
        let pv = cf.amount / (1.0 + valuation_rate).powf(days as f64 / DAYS_PER_YEAR);
        println!("{:>12} {:>8} {:>12.2} {:>12.2}", cf.date, days, cf.amount, pv);
    }

    let npv = xnpv_series(&series, valuation_rate).expect("Demo series failed validation");
    println!("\nXNPV at {:.2}%: {:.4}", valuation_rate * 100.0, npv);

    match xirr_series(&series, None) {
        Ok(rate) => {
            println!("\n========================================");
            println!("  XIRR: {:.4}%", rate * 100.0);
            println!("========================================");
        }
        Err(e) => {
            println!("\n  Could not calculate XIRR: {}", e);
        }
    }

    // Write a rate sweep to CSV for inspection
    let rates: Vec<f64> = (0..=40).map(|i| i as f64 * 0.01).collect();
    let sweep = xnpv_sweep(&series, &rates).expect("Demo series failed validation");

    let csv_path = "npv_sweep.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");
    writeln!(file, "Rate,NPV").unwrap();
    for point in &sweep {
        writeln!(file, "{:.4},{:.6}", point.rate, point.npv).unwrap();
    }

    println!("\nRate sweep ({} points) written to: {}", sweep.len(), csv_path);
}
