mod config;
mod output;

use std::path::PathBuf;

use argtoken_core::{Parameter, ScannerState};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{DriverConfig, FaultPolicy, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "argtoken")]
#[command(about = "Tokenize command-line parameters into typed records")]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tokenize the arguments after `--` and print one record per parameter.
    Scan(ScanArgs),
    /// Print the scanner state and record dump after every step.
    Trace(TraceArgs),
    /// Print the effective configuration, or write it to a file.
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct DriverArgs {
    /// YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Index of the first argument to scan.
    #[arg(long)]
    start: Option<usize>,
    /// Reaction to a missing value or unrecognized argument.
    #[arg(long)]
    on_fault: Option<FaultPolicy>,
    /// Output format.
    #[arg(long)]
    format: Option<OutputFormat>,
}

impl DriverArgs {
    fn resolve(&self) -> Result<DriverConfig, String> {
        let base = match &self.config {
            Some(path) => DriverConfig::load(path)
                .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
            None => DriverConfig::default(),
        };
        Ok(base.with_overrides(self.start, self.on_fault, self.format))
    }
}

#[derive(Debug, Args)]
struct ScanArgs {
    #[command(flatten)]
    driver: DriverArgs,
    /// Arguments to tokenize.
    #[arg(last = true)]
    arguments: Vec<String>,
}

#[derive(Debug, Args)]
struct TraceArgs {
    /// Index of the first argument to scan.
    #[arg(long, default_value_t = 0)]
    start: usize,
    /// Arguments to tokenize.
    #[arg(last = true)]
    arguments: Vec<String>,
}

#[derive(Debug, Args)]
struct ConfigArgs {
    #[command(flatten)]
    driver: DriverArgs,
    /// Write the configuration here instead of printing it.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Scan(args) => run_scan(args),
        Command::Trace(args) => run_trace(args),
        Command::Config(args) => run_config(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_scan(args: ScanArgs) -> Result<(), String> {
    let config = args.driver.resolve()?;
    debug!(?config, count = args.arguments.len(), "Starting scan");

    let records = collect_records(&args.arguments, &config)?;
    let raw = output::format_records(&records, config.format)?;
    print!("{raw}");
    Ok(())
}

/// Drives the scanner to exhaustion, applying the fault policy.
fn collect_records(arguments: &[String], config: &DriverConfig) -> Result<Vec<Parameter>, String> {
    let mut records = Vec::new();
    for result in ScannerState::start(arguments, config.start_index) {
        match result {
            Ok(record) => records.push(record),
            Err(err) => match config.on_fault {
                FaultPolicy::Abort => return Err(err.to_string()),
                FaultPolicy::Skip => {
                    debug!(fault = %err.fault(), index = err.index(), "Skipping argument");
                    eprintln!("warning: {err}; skipped");
                }
            },
        }
    }
    Ok(records)
}

fn run_trace(args: TraceArgs) -> Result<(), String> {
    let mut state = ScannerState::start(&args.arguments, args.start);
    let mut record = Parameter::new();

    println!("{}", state.trace());
    while !state.is_exhausted() {
        let matched = state.step(&mut record);
        if let (false, Some(fault)) = (matched, state.fault()) {
            println!("fault: {fault}");
        }
        println!("{}", record.trace());
        println!("{}", state.trace());
    }
    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<(), String> {
    let config = args.driver.resolve()?;
    match args.output {
        Some(path) => {
            config
                .save(&path)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            println!("Wrote configuration to '{}'.", path.display());
        }
        None => {
            let raw = serde_yaml::to_string(&config)
                .map_err(|err| format!("YAML serialization failed: {err}"))?;
            print!("{raw}");
        }
    }
    Ok(())
}
