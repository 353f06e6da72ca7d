//! Core types for jobsift-core.
//!
//! This module defines the two data structures the whole pipeline pivots on:
//! the optional-everything [`JobMeta`] input document and the fixed-shape
//! [`MetricRow`] output record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One job's monitoring record, as parsed from a `meta.json` archive file.
///
/// Every field is optional: archives are written by several monitoring-tool
/// versions and any key may be missing at any level. The empty document `{}`
/// deserializes successfully; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobMeta {
    pub job_id: Option<i64>,
    pub user: Option<String>,
    pub project: Option<String>,
    pub cluster: Option<String>,
    pub partition: Option<String>,
    pub job_state: Option<String>,
    /// Unix epoch seconds.
    pub start_time: Option<i64>,
    /// Seconds.
    pub duration: Option<i64>,
    /// Seconds.
    pub walltime: Option<i64>,
    pub num_nodes: Option<u64>,
    pub num_hwthreads: Option<u64>,
    pub num_acc: Option<u64>,
    /// Per-node resource records. Only the first is consumed downstream.
    pub resources: Vec<Resource>,
    pub meta_data: MetaData,
    /// Metric name → aggregate, e.g. `"mem_bw"` → `{ "avg": ... }`.
    pub statistics: HashMap<String, Statistic>,
}

/// One entry of the `resources` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub hostname: Option<String>,
    /// Accelerator identifiers (typically PCI addresses).
    pub accelerators: Vec<String>,
}

/// The free-form `metaData` mapping. Only the two keys the summary consumes
/// are modeled; the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaData {
    pub job_name: Option<String>,
    /// Full text of the batch submission script, `#SBATCH` directives included.
    pub job_script: Option<String>,
}

/// Aggregate values for one metric. Archives also carry `min`, `max`, and a
/// `unit` object, none of which the summary consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Statistic {
    pub avg: Option<f64>,
}

/// One flattened summary row, ready for tabular storage.
///
/// The serde rename on each field is the human-readable CSV column name; the
/// writer derives its header from them, so every row in a run carries the
/// same 30 columns in the same order by construction. Cell values are either
/// a formatted number/unit string or the `"N/A"` sentinel, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    #[serde(rename = "Job ID")]
    pub job_id: String,
    #[serde(rename = "Job Name")]
    pub job_name: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Cluster")]
    pub cluster: String,
    #[serde(rename = "Partition")]
    pub partition: String,
    #[serde(rename = "Job State")]
    pub job_state: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Walltime Requested")]
    pub walltime: String,
    #[serde(rename = "Nodes Used")]
    pub nodes_used: String,
    #[serde(rename = "Node Hostnames")]
    pub node_hostnames: String,
    #[serde(rename = "Hardware Threads (CPUs)")]
    pub hw_threads: String,
    #[serde(rename = "CPUs per Task")]
    pub cpus_per_task: String,
    #[serde(rename = "Tasks per Node")]
    pub tasks_per_node: String,
    #[serde(rename = "Total CPUs Allocated")]
    pub total_cpus: String,
    #[serde(rename = "Memory per CPU")]
    pub mem_per_cpu: String,
    #[serde(rename = "Total Memory Allocated")]
    pub total_memory: String,
    #[serde(rename = "GPUs Allocated")]
    pub gpus_allocated: String,
    #[serde(rename = "Accelerators")]
    pub accelerators: String,
    #[serde(rename = "CPU Load Avg")]
    pub cpu_load_avg: String,
    #[serde(rename = "IPC Avg")]
    pub ipc_avg: String,
    #[serde(rename = "FLOPS Avg")]
    pub flops_avg: String,
    #[serde(rename = "Memory Bandwidth Avg")]
    pub mem_bw_avg: String,
    #[serde(rename = "Network Bandwidth Avg")]
    pub net_bw_avg: String,
    #[serde(rename = "Memory Used Avg")]
    pub mem_used_avg: String,
    #[serde(rename = "GPU Utilization Avg")]
    pub gpu_util_avg: String,
    #[serde(rename = "GPU Memory Used Avg")]
    pub gpu_mem_used_avg: String,
    #[serde(rename = "GPU Power Avg")]
    pub gpu_power_avg: String,
    #[serde(rename = "GPU Temperature Avg")]
    pub gpu_temp_avg: String,
}
