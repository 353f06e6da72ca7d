//! jobsift-core — document model and normalization for HPC job archives.
//!
//! # Architecture
//!
//! ```text
//! meta.json ──► JobMeta ──► normalize ──► MetricRow ──► CSV writer
//!                  │
//!      jobScript ──┴──► directive extraction
//! ```
//!
//! Parsing the file and writing the table are the caller's concern (see the
//! `jobsift-reports` crate); everything in here is pure and synchronous.

pub mod config;
pub mod format;
pub mod normalize;
pub mod script;
pub mod types;

pub use normalize::normalize;
pub use types::{JobMeta, MetaData, MetricRow, Resource, Statistic};
