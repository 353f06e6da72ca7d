use clap::{Parser, Subcommand};
use jobsift::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobsift", about = "Sift HPC job archives and Slurm logs into summary tables")]
struct Cli {
    /// Log extra diagnostics to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Flatten every meta.json under a directory into one summary CSV.
    Summary {
        /// Parent directory containing job folders with meta.json files.
        parent_dir: PathBuf,
        /// Output CSV file name.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract batch-size hints from slurm-<jobid>.out files.
    ScanLogs {
        /// Directory containing the Slurm stdout files.
        log_dir: PathBuf,
        /// Output CSV file name.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Concatenate per-job GPU metric CSVs into one table.
    Concat {
        /// Root directory holding the per-job folders.
        root: PathBuf,
        /// Only folders whose name starts with this prefix are read.
        #[arg(long)]
        dir_prefix: Option<String>,
        /// Output CSV file name.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Left-join two metric tables on the "Job ID" column.
    Merge {
        /// Left table (all of its rows are kept).
        left: PathBuf,
        /// Right table (comma-separated).
        right: PathBuf,
        /// Field delimiter of the left table.
        #[arg(long, default_value = ",")]
        left_delimiter: char,
        /// Output CSV file name.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    tracing::debug!("config loaded");

    match cli.command {
        Command::Summary { parent_dir, output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.output.summary));
            let stats = jobsift::summary::run(&parent_dir, &output)?;
            if stats.discovered == 0 {
                println!("No meta.json files found in the specified directory.");
            } else if stats.written == 0 {
                println!("No metrics extracted from meta.json files.");
            } else {
                println!("Metrics have been written to {}", output.display());
            }
        }
        Command::ScanLogs { log_dir, output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.output.scan));
            let stats = jobsift::scanlog::run(
                &log_dir,
                &output,
                &config.scan.file_prefix,
                &config.scan.file_suffix,
            )?;
            if stats.discovered == 0 {
                println!("No Slurm log files found in the specified directory.");
            } else if stats.written == 0 {
                println!("No metrics extracted from Slurm log files.");
            } else {
                println!("Metrics extracted and saved to {}", output.display());
            }
        }
        Command::Concat {
            root,
            dir_prefix,
            output,
        } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.output.concat));
            let dir_prefix = dir_prefix.unwrap_or_else(|| config.concat.dir_prefix.clone());
            let stats = jobsift::concat::run(&root, &dir_prefix, &output)?;
            if stats.tables == 0 {
                println!("No readable CSV files found under {dir_prefix}* folders.");
            } else {
                println!("Combined data saved to {}", output.display());
            }
        }
        Command::Merge {
            left,
            right,
            left_delimiter,
            output,
        } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.output.merged));
            let delimiter = u8::try_from(left_delimiter)
                .map_err(|_| anyhow::anyhow!("left delimiter must be a single ASCII character"))?;
            jobsift::merge::run(&left, &right, delimiter, &output)?;
            println!("Data merged and saved to {}", output.display());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}
