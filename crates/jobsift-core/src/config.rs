//! Configuration types for jobsift.
//!
//! [`Config::load`] reads `~/.config/jobsift/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
summary = "job_metrics.csv"
scan    = "slurmlog_metrics.csv"
concat  = "integrated_data_with_gpu_job_name.csv"
merged  = "merged_inte_data.csv"

[scan]
file_prefix = "slurm-"
file_suffix = ".out"

[concat]
dir_prefix = "GPU"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/jobsift/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub concat: ConcatConfig,
}

/// `[output]` section: the default output filename of each pipeline, used
/// when no `-o` flag is given.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_summary_output")]
    pub summary: String,
    #[serde(default = "default_scan_output")]
    pub scan: String,
    #[serde(default = "default_concat_output")]
    pub concat: String,
    #[serde(default = "default_merged_output")]
    pub merged: String,
}

fn default_summary_output() -> String { "job_metrics.csv".to_string() }
fn default_scan_output() -> String { "slurmlog_metrics.csv".to_string() }
fn default_concat_output() -> String { "integrated_data_with_gpu_job_name.csv".to_string() }
fn default_merged_output() -> String { "merged_inte_data.csv".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary: default_summary_output(),
            scan: default_scan_output(),
            concat: default_concat_output(),
            merged: default_merged_output(),
        }
    }
}

/// `[scan]` section: how Slurm stdout files are recognized.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_scan_file_prefix")]
    pub file_prefix: String,
    #[serde(default = "default_scan_file_suffix")]
    pub file_suffix: String,
}

fn default_scan_file_prefix() -> String { "slurm-".to_string() }
fn default_scan_file_suffix() -> String { ".out".to_string() }

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_scan_file_prefix(),
            file_suffix: default_scan_file_suffix(),
        }
    }
}

/// `[concat]` section: which folders hold per-job GPU metric tables.
#[derive(Debug, Clone, Deserialize)]
pub struct ConcatConfig {
    #[serde(default = "default_concat_dir_prefix")]
    pub dir_prefix: String,
}

fn default_concat_dir_prefix() -> String { "GPU".to_string() }

impl Default for ConcatConfig {
    fn default() -> Self {
        Self {
            dir_prefix: default_concat_dir_prefix(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/jobsift/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("jobsift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
