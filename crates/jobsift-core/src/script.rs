//! Submission-script directive extraction.
//!
//! Each resource directive gets its own line-anchored, named-capture pattern,
//! evaluated independently over the full script text. A directive that is
//! missing or unparsable fails closed instead of poisoning the others.

use regex::Regex;
use std::sync::OnceLock;

fn cpus_per_task_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^#SBATCH\s+--cpus-per-task=(?P<count>\d+)\b")
            .expect("valid cpus-per-task pattern")
    })
}

fn ntasks_per_node_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^#SBATCH\s+--ntasks-per-node=(?P<count>\d+)\b")
            .expect("valid ntasks-per-node pattern")
    })
}

fn mem_per_cpu_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^#SBATCH\s+--mem-per-cpu=(?P<value>\d+)(?P<unit>[A-Za-z]+)?\b")
            .expect("valid mem-per-cpu pattern")
    })
}

fn gres_gpu_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^#SBATCH\s+--gres=gpu:(?P<spec>[A-Za-z0-9:]+)")
            .expect("valid gres pattern")
    })
}

/// Resource-request directives parsed out of one submission script.
///
/// `None` always means the directive was not present; malformed values are
/// carried explicitly where the distinction matters (see [`GresGpu`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptDirectives {
    pub cpus_per_task: Option<u64>,
    pub ntasks_per_node: Option<u64>,
    pub mem_per_cpu: Option<MemPerCpu>,
    pub gres_gpu: Option<GresGpu>,
}

/// A `--mem-per-cpu` request: the integer value plus the unit suffix exactly
/// as written, e.g. `4G`. The suffix may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemPerCpu {
    pub value: u64,
    pub unit: Option<String>,
}

impl MemPerCpu {
    /// Byte count on the binary ladder: K/M/G/T (first letter, any case) map
    /// to 1024^1..4. An unknown or absent unit means the value is already
    /// in bytes.
    pub fn bytes(&self) -> u64 {
        self.value * 1024u64.pow(self.unit_power())
    }

    /// Rendered as written in the script: `"4 G"`, or just `"4096"` when no
    /// unit suffix was given.
    pub fn display(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.to_string(),
        }
    }

    fn unit_power(&self) -> u32 {
        let first = self.unit.as_deref().and_then(|u| u.chars().next());
        match first.map(|c| c.to_ascii_uppercase()) {
            Some('K') => 1,
            Some('M') => 2,
            Some('G') => 3,
            Some('T') => 4,
            _ => 0,
        }
    }
}

/// A `--gres=gpu:` request.
///
/// `Malformed` records a directive that was present but whose count segment
/// did not parse; callers must render it as unknown rather than falling back
/// to the document's accelerator count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GresGpu {
    Count(u64),
    Malformed,
}

/// Run every directive pattern over `script` independently.
pub fn extract_directives(script: &str) -> ScriptDirectives {
    ScriptDirectives {
        cpus_per_task: capture_u64(cpus_per_task_re(), script),
        ntasks_per_node: capture_u64(ntasks_per_node_re(), script),
        mem_per_cpu: extract_mem_per_cpu(script),
        gres_gpu: extract_gres_gpu(script),
    }
}

fn capture_u64(re: &Regex, script: &str) -> Option<u64> {
    re.captures(script)
        .and_then(|caps| caps.name("count"))
        .and_then(|m| m.as_str().parse().ok())
}

fn extract_mem_per_cpu(script: &str) -> Option<MemPerCpu> {
    let caps = mem_per_cpu_re().captures(script)?;
    let value = caps.name("value")?.as_str().parse().ok()?;
    let unit = caps.name("unit").map(|m| m.as_str().to_string());
    Some(MemPerCpu { value, unit })
}

fn extract_gres_gpu(script: &str) -> Option<GresGpu> {
    let caps = gres_gpu_re().captures(script)?;
    let spec = caps.name("spec")?.as_str();
    // `type:count` form takes the segment after the last colon; a bare spec
    // is the count itself.
    let count = spec.rsplit(':').next().unwrap_or(spec);
    Some(match count.parse() {
        Ok(n) => GresGpu::Count(n),
        Err(_) => GresGpu::Malformed,
    })
}
