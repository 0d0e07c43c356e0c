use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Top-level CLI argument parser for the `wf` command
#[derive(Parser)]
#[command(
    name = "wf",
    about = "cache-wavefront — run and verify cache-blocked wavefront kernels",
    version
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Cache geometry flags shared by `tile` and `run`
#[derive(clap::Args, Debug, Clone, Copy, Default)]
struct GeometryArgs {
    /// Set-index bits (number of sets = 2^s)
    #[arg(short = 's', long)]
    set_bits: Option<u32>,
    /// Lines per set
    #[arg(short = 'E', long)]
    associativity: Option<u32>,
    /// Block-offset bits (bytes per line = 2^b)
    #[arg(short = 'b', long)]
    block_bits: Option<u32>,
}

/// Available subcommands for the `wf` CLI
#[derive(Subcommand)]
enum Commands {
    /// List registered wavefront variants
    List,
    /// Show the tile size selected for a cache geometry
    Tile {
        #[command(flatten)]
        geometry: GeometryArgs,
        /// Element size in bytes
        #[arg(long, default_value_t = 4)]
        element_size: usize,
        /// Dimension whose divisors are the candidate tile sides
        #[arg(long, default_value_t = 255)]
        reference_dim: usize,
    },
    /// Run a variant over a seeded grid and verify the recurrence
    Run {
        /// Path to a run configuration YAML file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Variant name (overrides the config file)
        #[arg(long)]
        variant: Option<String>,
        /// Grid rows (overrides the config file)
        #[arg(long)]
        rows: Option<usize>,
        /// Grid columns (overrides the config file)
        #[arg(long)]
        cols: Option<usize>,
        #[command(flatten)]
        geometry: GeometryArgs,
        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate a run configuration YAML file
    Validate {
        /// Path to the run configuration YAML file
        config: PathBuf,
    },
}

/// Dispatch a parsed CLI subcommand to its handler
fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::List => commands::list::run(),
        Commands::Tile {
            geometry,
            element_size,
            reference_dim,
        } => commands::tile::run(&geometry, element_size, reference_dim),
        Commands::Run {
            config,
            variant,
            rows,
            cols,
            geometry,
            format,
        } => match commands::run::OutputFormat::from_str(&format) {
            Ok(fmt) => {
                let overrides = commands::run::Overrides {
                    variant,
                    rows,
                    cols,
                    geometry,
                };
                commands::run::run(config.as_deref(), &overrides, fmt)
            }
            Err(e) => Err(e.into()),
        },
        Commands::Validate { config } => commands::validate::run(&config),
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Entry point: parse CLI arguments and run the selected subcommand
fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run_command(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
