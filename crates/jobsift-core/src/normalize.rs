//! Normalizer — flattens one [`JobMeta`] document into one [`MetricRow`].
//!
//! Each column is derived independently: identity and timing fields are
//! direct lookups, resource-allocation fields come from the submission
//! script's directives, and the performance columns read the `avg` of the
//! nine well-known statistics. Every missing input resolves to the `"N/A"`
//! sentinel, so the function is total and the row shape is always uniform.

use crate::format::{
    format_bandwidth_gbs, format_bytes_gb, format_duration, format_float, format_percentage,
    format_timestamp, or_na, NA,
};
use crate::script::{extract_directives, GresGpu};
use crate::types::{JobMeta, MetricRow};

/// Flatten one job document into one summary row.
pub fn normalize(meta: &JobMeta) -> MetricRow {
    let script = meta.meta_data.job_script.as_deref().unwrap_or("");
    let directives = extract_directives(script);

    let mem_per_cpu = directives.mem_per_cpu.as_ref();
    let total_memory_bytes = mem_per_cpu
        .zip(meta.num_hwthreads)
        .map(|(mem, threads)| mem.bytes() as f64 * threads as f64);

    // A parsed directive wins over the document's own count; a directive that
    // is present but unparsable stays unknown.
    let gpus_allocated = match directives.gres_gpu {
        Some(GresGpu::Count(n)) => n.to_string(),
        Some(GresGpu::Malformed) => NA.to_string(),
        None => or_na(meta.num_acc),
    };

    let first_resource = meta.resources.first();
    let accelerators = first_resource
        .map(|r| r.accelerators.as_slice())
        .filter(|accs| !accs.is_empty())
        .map(|accs| accs.join(", "))
        .unwrap_or_else(|| NA.to_string());

    MetricRow {
        job_id: or_na(meta.job_id),
        job_name: or_na(meta.meta_data.job_name.as_deref()),
        user: or_na(meta.user.as_deref()),
        project: or_na(meta.project.as_deref()),
        cluster: or_na(meta.cluster.as_deref()),
        partition: or_na(meta.partition.as_deref()),
        job_state: or_na(meta.job_state.as_deref()),
        start_time: format_timestamp(meta.start_time),
        duration: format_duration(meta.duration),
        walltime: format_duration(meta.walltime),
        nodes_used: or_na(meta.num_nodes),
        node_hostnames: or_na(first_resource.and_then(|r| r.hostname.as_deref())),
        hw_threads: or_na(meta.num_hwthreads),
        cpus_per_task: or_na(directives.cpus_per_task),
        tasks_per_node: or_na(directives.ntasks_per_node),
        total_cpus: or_na(meta.num_hwthreads),
        mem_per_cpu: mem_per_cpu
            .map(|m| m.display())
            .unwrap_or_else(|| NA.to_string()),
        total_memory: format_bytes_gb(total_memory_bytes),
        gpus_allocated,
        accelerators,
        cpu_load_avg: format_float(stat_avg(meta, "cpu_used")),
        ipc_avg: format_float(stat_avg(meta, "ipc")),
        flops_avg: format_float(stat_avg(meta, "flops_any")),
        mem_bw_avg: format_bandwidth_gbs(stat_avg(meta, "mem_bw")),
        net_bw_avg: format_bandwidth_gbs(stat_avg(meta, "net_bw")),
        mem_used_avg: format_bytes_gb(nonzero(stat_avg(meta, "mem_used"))),
        gpu_util_avg: format_percentage(stat_avg(meta, "acc_used")),
        gpu_mem_used_avg: format_bytes_gb(nonzero(stat_avg(meta, "acc_mem_used"))),
        gpu_power_avg: format_float(stat_avg(meta, "acc_power")),
        gpu_temp_avg: format_float(stat_avg(meta, "acc_temp")),
    }
}

fn stat_avg(meta: &JobMeta, key: &str) -> Option<f64> {
    meta.statistics.get(key).and_then(|s| s.avg)
}

/// Memory-usage averages of exactly zero are reported as missing: in the
/// archives a zero average is indistinguishable from "not reported".
fn nonzero(avg: Option<f64>) -> Option<f64> {
    avg.filter(|v| *v != 0.0)
}
