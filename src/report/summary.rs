//! Cross-scenario summary table

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;

use crate::run::RunMetrics;
use crate::Result;

/// One summary row: averaged Train and Test metrics for a
/// (scenario, sample size) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    scenario: String,
    sample_size: usize,
    train: RunMetrics,
    test: RunMetrics,
}

impl SummaryEntry {
    /// Get the scenario name.
    #[must_use]
    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    /// Get the sample size (number of observations).
    #[must_use]
    pub const fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Get the averaged Train-phase metrics.
    #[must_use]
    pub const fn train(&self) -> &RunMetrics {
        &self.train
    }

    /// Get the averaged Test-phase metrics.
    #[must_use]
    pub const fn test(&self) -> &RunMetrics {
        &self.test
    }
}

/// Insertion-ordered collection of summary rows.
///
/// Rows keep the order in which their (scenario, sample size) keys were
/// first inserted; re-inserting an existing key replaces that row in
/// place. [`write_summary`] emits rows in exactly this order, with no
/// sorting of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    entries: Vec<SummaryEntry>,
}

impl SummaryTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace the row for (scenario, `sample_size`).
    ///
    /// A replaced row keeps its original position.
    pub fn insert(
        &mut self,
        scenario: impl Into<String>,
        sample_size: usize,
        train: RunMetrics,
        test: RunMetrics,
    ) {
        let scenario = scenario.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.scenario == scenario && e.sample_size == sample_size)
        {
            entry.train = train;
            entry.test = test;
        } else {
            self.entries.push(SummaryEntry {
                scenario,
                sample_size,
                train,
                test,
            });
        }
    }

    /// Rows in iteration (insertion) order.
    #[must_use]
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }
}

/// Summary row wire schema: 2 key columns + 9 Train + 9 Test metric values.
#[derive(Serialize)]
#[allow(clippy::struct_field_names)]
struct SummaryRow<'a> {
    scenario: &'a str,
    sample_size: usize,
    mse_train: f64,
    rmse_train: f64,
    r2_train: f64,
    mape_train: f64,
    smape_train: f64,
    log_train: f64,
    mae_train: f64,
    bias_train: f64,
    time_train: f64,
    mse_test: f64,
    rmse_test: f64,
    r2_test: f64,
    mape_test: f64,
    smape_test: f64,
    log_test: f64,
    mae_test: f64,
    bias_test: f64,
    time_test: f64,
}

impl<'a> SummaryRow<'a> {
    fn new(entry: &'a SummaryEntry) -> Self {
        let train = entry.train();
        let test = entry.test();
        Self {
            scenario: entry.scenario(),
            sample_size: entry.sample_size(),
            mse_train: train.mse,
            rmse_train: train.rmse,
            r2_train: train.r_squared,
            mape_train: train.mape,
            smape_train: train.smape,
            log_train: train.log_error,
            mae_train: train.mae,
            bias_train: train.bias,
            time_train: train.elapsed_secs,
            mse_test: test.mse,
            rmse_test: test.rmse,
            r2_test: test.r_squared,
            mape_test: test.mape,
            smape_test: test.smape,
            log_test: test.log_error,
            mae_test: test.mae,
            bias_test: test.bias,
            time_test: test.elapsed_secs,
        }
    }
}

fn header() -> Vec<String> {
    let mut columns = vec!["Scenario".to_string(), "Number of Obs.".to_string()];
    for suffix in ["train", "test"] {
        columns.extend(
            RunMetrics::COLUMNS
                .iter()
                .map(|name| format!("{name}_{suffix}")),
        );
    }
    columns
}

fn write_rows<W: Write>(table: &SummaryTable, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(header())?;
    for entry in table.entries() {
        writer.serialize(SummaryRow::new(entry))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the summary table to an arbitrary sink.
///
/// The header row is always written, even for an empty table. Rows follow
/// in the table's insertion order. The sink is flushed before returning;
/// on failure the error propagates immediately and the sink is dropped.
///
/// # Errors
///
/// Returns [`crate::Error::Csv`] or [`crate::Error::Io`] when the sink
/// rejects a write.
pub fn write_summary<W: Write>(table: &SummaryTable, sink: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    write_rows(table, &mut writer)
}

/// Write the summary table to a file, creating or truncating it.
///
/// # Errors
///
/// Returns [`crate::Error::Csv`] or [`crate::Error::Io`] when the file
/// cannot be created or written.
pub fn write_summary_file<P: AsRef<Path>>(table: &SummaryTable, path: P) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    write_rows(table, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mse: f64) -> RunMetrics {
        RunMetrics {
            mse,
            rmse: mse * 0.5,
            r_squared: 0.9,
            mape: 4.0,
            smape: 3.5,
            log_error: 0.01,
            mae: 0.25,
            bias: -0.125,
            elapsed_secs: 2.0,
        }
    }

    fn render(table: &SummaryTable) -> Vec<String> {
        let mut buffer = Vec::new();
        write_summary(table, &mut buffer).unwrap();
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_header_schema() {
        let lines = render(&SummaryTable::new());
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "Scenario,Number of Obs.,\
             MSE_train,RMSE_train,R2_train,MAPE_train,SMAPE_train,LOG_train,MAE_train,Bias_train,Time_train,\
             MSE_test,RMSE_test,R2_test,MAPE_test,SMAPE_test,LOG_test,MAE_test,Bias_test,Time_test"
        );
    }

    #[test]
    fn test_rows_preserve_insertion_order() {
        let mut table = SummaryTable::new();
        // Deliberately unsorted on both keys
        table.insert("scenario_c", 500, record(1.0), record(2.0));
        table.insert("scenario_a", 1000, record(1.0), record(2.0));
        table.insert("scenario_a", 100, record(1.0), record(2.0));

        let lines = render(&table);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("scenario_c,500,"));
        assert!(lines[2].starts_with("scenario_a,1000,"));
        assert!(lines[3].starts_with("scenario_a,100,"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table = SummaryTable::new();
        table.insert("scenario_a", 100, record(1.0), record(1.0));
        table.insert("scenario_b", 100, record(1.0), record(1.0));
        table.insert("scenario_a", 100, record(9.0), record(9.0));

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].scenario(), "scenario_a");
        assert!((table.entries()[0].train().mse - 9.0).abs() < f64::EPSILON);

        let lines = render(&table);
        assert!(lines[1].starts_with("scenario_a,100,9"));
    }

    #[test]
    fn test_row_width() {
        let mut table = SummaryTable::new();
        table.insert("scenario_a", 100, record(1.0), record(2.0));

        let lines = render(&table);
        assert_eq!(lines[1].split(',').count(), 20);
    }
}
