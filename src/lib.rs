//! jobsift — HPC job-archive and Slurm-log post-processing.
//!
//! # Architecture
//!
//! ```text
//! meta.json ────► normalize ──► MetricRow ─┐
//! slurm-*.out ──► scan ──────► ScanRow ────┼──► CSV tables
//! GPU*/…/*.csv ─► concat / merge ──────────┘
//! ```
//!
//! The binary is a thin clap dispatcher; all behavior lives in the member
//! crates and is re-exported here so that integration tests and benches can
//! import it directly.

pub use jobsift_core::{config, format, normalize, script, types};
pub use jobsift_core::{JobMeta, MetaData, MetricRow, Resource, Statistic};
pub use jobsift_reports::{concat, merge, scanlog, summary, walk};
