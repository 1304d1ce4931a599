//! Load cash flow series from CSV files

use super::CashFlow;
use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Failures while reading a cash flow CSV
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying CSV read or deserialization failure
    #[error("csv read failed: {0}")]
    Csv(#[from] csv::Error),

    /// A date cell did not parse as ISO-8601
    #[error("invalid date '{value}': {source}")]
    Date {
        value: String,
        source: chrono::format::ParseError,
    },
}

/// Raw CSV row matching the `Date,Amount` layout
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Amount")]
    amount: f64,
}

impl CsvRow {
    fn to_cashflow(self) -> Result<CashFlow, LoadError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|source| {
            LoadError::Date {
                value: self.date,
                source,
            }
        })?;

        Ok(CashFlow {
            date,
            amount: self.amount,
        })
    }
}

/// Load a cash flow series from a CSV file
///
/// Expects a header row `Date,Amount` with ISO-8601 dates. Row order is
/// preserved; the first row is the anchor entry of the series.
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<Vec<CashFlow>, LoadError> {
    let mut reader = Reader::from_path(path)?;
    let mut series = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        series.push(row.to_cashflow()?);
    }

    log::debug!("loaded {} cash flows", series.len());
    Ok(series)
}

/// Load a cash flow series from any reader (e.g. string buffer, network stream)
pub fn load_series_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CashFlow>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut series = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        series.push(row.to_cashflow()?);
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_series_from_reader() {
        let data = "\
Date,Amount
2024-01-15,-10000.0
2024-07-01,2500.0
2025-01-15,9000.0
";
        let series = load_series_from_reader(data.as_bytes()).expect("Failed to parse CSV");
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(series[0].amount, -10000.0);
        assert_eq!(series[2].amount, 9000.0);
    }

    #[test]
    fn test_row_order_preserved() {
        let data = "\
Date,Amount
2024-06-01,100.0
2024-01-01,-100.0
";
        // The loader does not reorder; validation happens later
        let series = load_series_from_reader(data.as_bytes()).unwrap();
        assert_eq!(series[0].amount, 100.0);
        assert_eq!(series[1].amount, -100.0);
    }

    #[test]
    fn test_bad_date_reports_value() {
        let data = "\
Date,Amount
15/01/2024,-10000.0
";
        let err = load_series_from_reader(data.as_bytes()).unwrap_err();
        match err {
            LoadError::Date { value, .. } => assert_eq!(value, "15/01/2024"),
            other => panic!("Expected date error, got {other:?}"),
        }
    }
}
