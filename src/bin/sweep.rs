//! Synthetic evaluation sweep
//!
//! Drives the full pipeline end to end: for every scenario and sample
//! size, repeats independent runs of a stand-in predictor over seeded
//! synthetic data, writes one detail file per combination, and finishes
//! with the cross-scenario summary file.
//!
//! The "model" here is ground truth with multiplicative noise; it exists
//! to exercise the evaluation and reporting pipeline, not to predict
//! anything.
//!
//! Run with: cargo run --bin sweep

use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use medir::metrics::evaluate;
use medir::report::{save_detail, write_summary_file, SummaryTable, DEFAULT_OUT_DIR};
use medir::run::{average, RunMetrics};
use medir::scenario::Scenario;

const MODEL: &str = "noisy_oracle";
const SAMPLE_SIZES: [usize; 3] = [100, 500, 1000];
const RUNS: usize = 10;
/// Held-out observations per run, independent of the training sample size.
const TEST_OBS: usize = 200;
const NOISE: f64 = 0.05;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut summary = SummaryTable::new();

    for (scenario_index, scenario) in Scenario::ALL.into_iter().enumerate() {
        for sample_size in SAMPLE_SIZES {
            let seed_base = (scenario_index * SAMPLE_SIZES.len() + sample_size) as u64;
            let (train_runs, test_runs) = run_series(scenario, sample_size, seed_base)?;

            save_detail(
                &train_runs,
                &test_runs,
                MODEL,
                scenario.name(),
                sample_size,
                DEFAULT_OUT_DIR,
            )
            .with_context(|| format!("writing detail file for {}", scenario.name()))?;

            summary.insert(
                scenario.name(),
                sample_size,
                average(&train_runs)?,
                average(&test_runs)?,
            );
        }
    }

    let summary_path = format!("{DEFAULT_OUT_DIR}/{MODEL}_summary.csv");
    write_summary_file(&summary, &summary_path)
        .with_context(|| format!("writing summary file {summary_path}"))?;
    tracing::info!(path = %summary_path, rows = summary.len(), "summary saved");

    Ok(())
}

/// One (scenario, sample size) combination: `RUNS` independent trials,
/// each scored on its training sample and on a fresh held-out sample.
fn run_series(
    scenario: Scenario,
    sample_size: usize,
    seed_base: u64,
) -> Result<(Vec<RunMetrics>, Vec<RunMetrics>)> {
    let mut train_runs = Vec::with_capacity(RUNS);
    let mut test_runs = Vec::with_capacity(RUNS);

    for run in 0..RUNS {
        let mut rng = StdRng::seed_from_u64(seed_base.wrapping_mul(1000) + run as u64);
        train_runs.push(score_split(&mut rng, scenario, sample_size)?);
        test_runs.push(score_split(&mut rng, scenario, TEST_OBS)?);
    }

    Ok((train_runs, test_runs))
}

/// Generate one split, "predict" it, and score the predictions.
fn score_split(rng: &mut StdRng, scenario: Scenario, observations: usize) -> Result<RunMetrics> {
    let mut y_true = Vec::with_capacity(observations);
    for _ in 0..observations {
        let x: Vec<f64> = (0..scenario.arity())
            .map(|_| rng.gen_range(1.0..10.0))
            .collect();
        y_true.push(scenario.target(&x));
    }

    let started = Instant::now();
    let y_pred: Vec<f64> = y_true
        .iter()
        .map(|y| y * (1.0 + rng.gen_range(-NOISE..NOISE)))
        .collect();
    let elapsed = started.elapsed().as_secs_f64();

    Ok(RunMetrics::new(evaluate(&y_true, &y_pred)?, elapsed))
}
