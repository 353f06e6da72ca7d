//! Test builders — ergonomic constructors for [`JobMeta`] documents.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use jobsift::{JobMeta, Resource, Statistic};

/// Fluent builder for [`JobMeta`] test fixtures.
///
/// # Example
///
/// ```rust
/// let meta = JobMetaBuilder::new(463795)
///     .user("jhe")
///     .script("#SBATCH --gres=gpu:tesla:2\n")
///     .stat("cpu_used", 3.14)
///     .build();
/// ```
pub struct JobMetaBuilder {
    meta: JobMeta,
}

impl JobMetaBuilder {
    pub fn new(job_id: i64) -> Self {
        Self {
            meta: JobMeta {
                job_id: Some(job_id),
                ..Default::default()
            },
        }
    }

    /// A document with every field absent, i.e. what `{}` parses to.
    pub fn empty() -> Self {
        Self {
            meta: JobMeta::default(),
        }
    }

    pub fn user(mut self, user: &str) -> Self {
        self.meta.user = Some(user.to_string());
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.meta.project = Some(project.to_string());
        self
    }

    pub fn cluster(mut self, cluster: &str) -> Self {
        self.meta.cluster = Some(cluster.to_string());
        self
    }

    pub fn partition(mut self, partition: &str) -> Self {
        self.meta.partition = Some(partition.to_string());
        self
    }

    pub fn job_state(mut self, state: &str) -> Self {
        self.meta.job_state = Some(state.to_string());
        self
    }

    pub fn times(mut self, start: i64, duration: i64, walltime: i64) -> Self {
        self.meta.start_time = Some(start);
        self.meta.duration = Some(duration);
        self.meta.walltime = Some(walltime);
        self
    }

    pub fn job_name(mut self, name: &str) -> Self {
        self.meta.meta_data.job_name = Some(name.to_string());
        self
    }

    pub fn script(mut self, script: &str) -> Self {
        self.meta.meta_data.job_script = Some(script.to_string());
        self
    }

    pub fn num_nodes(mut self, n: u64) -> Self {
        self.meta.num_nodes = Some(n);
        self
    }

    pub fn num_hwthreads(mut self, n: u64) -> Self {
        self.meta.num_hwthreads = Some(n);
        self
    }

    pub fn num_acc(mut self, n: u64) -> Self {
        self.meta.num_acc = Some(n);
        self
    }

    pub fn resource(mut self, hostname: &str, accelerators: &[&str]) -> Self {
        self.meta.resources.push(Resource {
            hostname: Some(hostname.to_string()),
            accelerators: accelerators.iter().map(|a| a.to_string()).collect(),
        });
        self
    }

    pub fn stat(mut self, key: &str, avg: f64) -> Self {
        self.meta
            .statistics
            .insert(key.to_string(), Statistic { avg: Some(avg) });
        self
    }

    pub fn build(self) -> JobMeta {
        self.meta
    }
}

/// A fully-populated document mirroring a real archive entry.
pub fn complete_job() -> JobMeta {
    JobMetaBuilder::new(463795)
        .user("jhe")
        .project("model_experiments")
        .cluster("alpha")
        .partition("alpha")
        .job_state("completed")
        .times(1731416515, 3661, 86400)
        .job_name("llama-finetune")
        .script(super::fixtures::JOB_SCRIPT)
        .num_nodes(1)
        .num_hwthreads(8)
        .num_acc(4)
        .resource(
            "taurusi8009",
            &["00000000:0B:00.0", "00000000:12:00.0"],
        )
        .stat("cpu_used", 3.1415)
        .stat("ipc", 1.25)
        .stat("flops_any", 42.0)
        .stat("mem_bw", 2.0 * GIB)
        .stat("net_bw", 1.0 * GIB)
        .stat("mem_used", 8.0 * GIB)
        .stat("acc_used", 0.85)
        .stat("acc_mem_used", 16.0 * GIB)
        .stat("acc_power", 250.5)
        .stat("acc_temp", 65.0)
        .build()
}

/// 1024³, for spelling statistic averages in byte units.
pub const GIB: f64 = 1_073_741_824.0;
