//! Per-run detail reports
//!
//! One detail file captures every independent run for a single
//! (model, scenario, sample size) triple, with an averaged row appended
//! after each phase block.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use serde::Serialize;

use crate::run::{average, Phase, RunMetrics};
use crate::{Error, Result};

/// Default output directory for detail files.
pub const DEFAULT_OUT_DIR: &str = "results";

/// Detail row wire schema: run label, phase label, 9 metric values.
#[derive(Serialize)]
struct DetailRow<'a> {
    run: &'a str,
    phase: &'static str,
    mse: f64,
    rmse: f64,
    r2: f64,
    mape: f64,
    smape: f64,
    log: f64,
    mae: f64,
    bias: f64,
    time: f64,
}

impl<'a> DetailRow<'a> {
    fn new(run: &'a str, phase: Phase, record: &RunMetrics) -> Self {
        Self {
            run,
            phase: phase.as_str(),
            mse: record.mse,
            rmse: record.rmse,
            r2: record.r_squared,
            mape: record.mape,
            smape: record.smape,
            log: record.log_error,
            mae: record.mae,
            bias: record.bias,
            time: record.elapsed_secs,
        }
    }
}

fn write_phase<W: Write>(
    writer: &mut csv::Writer<W>,
    series: &[RunMetrics],
    avg: &RunMetrics,
    phase: Phase,
) -> Result<()> {
    for (index, record) in series.iter().enumerate() {
        let label = (index + 1).to_string();
        writer.serialize(DetailRow::new(&label, phase, record))?;
    }
    writer.serialize(DetailRow::new("Average", phase, avg))?;
    Ok(())
}

/// Write one detail table to an arbitrary sink.
///
/// Row order: every train run numbered from 1, the train average, every
/// test run numbered from 1, the test average — `train.len() +
/// test.len() + 2` body rows under the header. Averages are computed
/// before anything is written, so a failed precondition leaves the sink
/// untouched.
///
/// # Errors
///
/// Returns [`Error::EmptyRunSet`] if either series is empty, and
/// [`crate::Error::Csv`]/[`crate::Error::Io`] when the sink rejects a
/// write.
pub fn write_detail<W: Write>(
    train: &[RunMetrics],
    test: &[RunMetrics],
    sink: W,
) -> Result<()> {
    let train_avg = average(train)?;
    let test_avg = average(test)?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);

    let mut header = vec!["Run".to_string(), "Phase".to_string()];
    header.extend(RunMetrics::COLUMNS.iter().map(ToString::to_string));
    writer.write_record(header)?;

    write_phase(&mut writer, train, &train_avg, Phase::Train)?;
    write_phase(&mut writer, test, &test_avg, Phase::Test)?;

    writer.flush()?;
    Ok(())
}

/// Deterministic detail-file path for a (model, scenario, sample size)
/// triple.
#[must_use]
pub fn detail_path(out_dir: &Path, model: &str, scenario: &str, sample_size: usize) -> PathBuf {
    out_dir.join(format!("{model}_{scenario}_num_{sample_size}.csv"))
}

/// Write one detail file under `out_dir`, creating the directory if
/// absent, and return the written path.
///
/// The destination is `{out_dir}/{model}_{scenario}_num_{sample_size}.csv`;
/// an existing file at that path is truncated, so re-running with the same
/// inputs reproduces the same file. Directory creation is idempotent but
/// not atomic: two callers racing on the first creation of the same
/// directory are not guarded against, and concurrent writers of the same
/// path must be serialized by the caller. Distinct triples map to distinct
/// paths and are safe to write concurrently.
///
/// Emits a `tracing` completion notice identifying scenario and sample
/// size. Observability only; not part of the data contract.
///
/// # Errors
///
/// Returns [`Error::EmptyRunSet`] if either series is empty (checked
/// before the file is opened) and [`crate::Error::Io`]/
/// [`crate::Error::Csv`] when the directory or file cannot be created or
/// written. A failure mid-write may leave a truncated file behind.
pub fn save_detail(
    train: &[RunMetrics],
    test: &[RunMetrics],
    model: &str,
    scenario: &str,
    sample_size: usize,
    out_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    if train.is_empty() || test.is_empty() {
        return Err(Error::EmptyRunSet);
    }

    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let path = detail_path(out_dir, model, scenario, sample_size);
    let file = File::create(&path)?;
    write_detail(train, test, BufWriter::new(file))?;

    tracing::info!(
        scenario,
        sample_size,
        path = %path.display(),
        "detail metrics saved"
    );
    Ok(path)
}
