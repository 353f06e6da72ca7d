//! Static fixtures used across harnesses.
//!
//! Textual fixtures are `indoc!` constants; the complete job document is
//! built with `serde_json::json!` so it stays readable while matching the
//! builder-produced [`complete_job`](super::builders::complete_job) value.

use indoc::indoc;
use std::path::Path;

/// A realistic batch submission script with every directive the normalizer
/// reads, plus the noise lines a real script carries.
pub const JOB_SCRIPT: &str = indoc! {r#"
    #!/bin/bash
    #SBATCH --job-name=llama-finetune
    #SBATCH --cpus-per-task=4
    #SBATCH --ntasks-per-node=1
    #SBATCH --mem-per-cpu=4G
    #SBATCH --gres=gpu:tesla:2
    #SBATCH --time=24:00:00

    module purge
    module load cuda/12.2

    srun python train.py --config configs/llama.yaml
"#};

/// The complete job document as `meta.json` text.
pub fn complete_meta_json() -> String {
    let doc = serde_json::json!({
        "jobId": 463795,
        "user": "jhe",
        "project": "model_experiments",
        "cluster": "alpha",
        "partition": "alpha",
        "jobState": "completed",
        "startTime": 1731416515i64,
        "duration": 3661,
        "walltime": 86400,
        "numNodes": 1,
        "numHwthreads": 8,
        "numAcc": 4,
        "resources": [
            {
                "hostname": "taurusi8009",
                "accelerators": ["00000000:0B:00.0", "00000000:12:00.0"]
            }
        ],
        "metaData": {
            "jobName": "llama-finetune",
            "jobScript": JOB_SCRIPT
        },
        "statistics": {
            "cpu_used": { "avg": 3.1415 },
            "ipc": { "avg": 1.25 },
            "flops_any": { "avg": 42.0 },
            "mem_bw": { "avg": 2147483648u64 },
            "net_bw": { "avg": 1073741824u64 },
            "mem_used": { "avg": 8589934592u64 },
            "acc_used": { "avg": 0.85 },
            "acc_mem_used": { "avg": 17179869184u64 },
            "acc_power": { "avg": 250.5 },
            "acc_temp": { "avg": 65.0 }
        }
    });
    serde_json::to_string_pretty(&doc).unwrap()
}

/// Write one job folder holding a `meta.json` with the given text; returns
/// nothing, panics on I/O failure (test setup).
pub fn write_meta(parent: &Path, job_dir: &str, meta_json: &str) {
    let dir = parent.join(job_dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("meta.json"), meta_json).unwrap();
}

/// A Slurm stdout excerpt where the batch size flips once (restart) so the
/// mode is exercised: 16 appears twice, 8 once; grad-accum is stable at 4.
pub const SLURM_LOG_PRIMARY: &str = indoc! {r#"
    ***** Running training *****
      Num examples = 52002
      Instantaneous batch size per device = 16
      Gradient Accumulation steps = 4
    [rank0] resuming from checkpoint-500
      Instantaneous batch size per device = 8
      Gradient Accumulation steps = 4
      Instantaneous batch size per device = 16
    epoch 1.0 | loss 1.923
"#};

/// A Slurm stdout excerpt with no recognizable metric lines.
pub const SLURM_LOG_NO_METRICS: &str = indoc! {r#"
    srun: job 463801 queued and waiting for resources
    srun: job 463801 has been allocated resources
    Traceback (most recent call last):
      File "train.py", line 12, in <module>
    ModuleNotFoundError: No module named 'torch'
"#};

/// Per-job GPU metric tables with overlapping but unequal schemas.
pub const GPU_CSV_RUN1: &str = indoc! {r#"
    timestamp,power_w,util_pct
    0,220,91
    60,231,95
"#};

pub const GPU_CSV_RUN2: &str = indoc! {r#"
    timestamp,util_pct,temp_c
    0,88,61
    60,93,64
"#};

/// Left merge input: `;`-delimited with padded header names.
pub const MERGE_LEFT: &str = indoc! {r#"
    Job ID ; Job Name ; Avg Power
    463795;GPU_run1;225.5
    463796;GPU_run2;198.0
    463799;GPU_run9;240.2
"#};

/// Right merge input: comma-separated Slurm scan output.
pub const MERGE_RIGHT: &str = indoc! {r#"
    Job ID,Batch Size per Device,Gradient Accumulation Steps
    463795,16,4
    463796,32,2
"#};
