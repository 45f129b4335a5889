//! CSV report emission
//!
//! Two independent report kinds share one column vocabulary
//! ([`crate::run::RunMetrics::COLUMNS`]):
//!
//! - **summary** — one row per (scenario, sample size) with averaged
//!   Train and Test metrics side by side, written to a caller-supplied
//!   destination ([`write_summary`] / [`write_summary_file`]);
//! - **detail** — one file per (model, scenario, sample size) with every
//!   run's metrics and an appended average row per phase, named
//!   `{model}_{scenario}_num_{sample_size}.csv` ([`write_detail`] /
//!   [`save_detail`]).
//!
//! Both writers are generic over [`std::io::Write`], so reports can be
//! rendered into an in-memory buffer in tests and into buffered files in
//! production.

mod detail;
mod summary;

pub use detail::{detail_path, save_detail, write_detail, DEFAULT_OUT_DIR};
pub use summary::{write_summary, write_summary_file, SummaryEntry, SummaryTable};
