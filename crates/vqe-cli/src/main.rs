//! VQE ansatz command-line interface
//!
//! Builds singlet UCCSD and hardware-efficient ansatz circuits from flags or
//! a config file and prints them as a summary, OpenQASM 3 or JSON.
//!
//! ```text
//! vqe uccsd --orbitals 2 --alpha 1 --params 0.1,0.2 --format qasm
//! vqe hea --layers 2 --qubits 4
//! vqe build --config ansatz.yaml --random --seed 7
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::ParamSource;
use commands::{build, hea, params, uccsd, version};

/// Build variational ansatz circuits for VQE
#[derive(Parser)]
#[command(name = "vqe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a singlet UCCSD circuit
    Uccsd {
        /// Number of spatial orbitals
        #[arg(long)]
        orbitals: u32,

        /// Number of alpha electrons (beta = alpha)
        #[arg(long)]
        alpha: u32,

        /// Fermion-to-qubit encoding (jordan-wigner, bravyi-kitaev)
        #[arg(short, long, default_value = "jordan-wigner")]
        transformation: String,

        /// Comma-separated cluster amplitudes
        #[arg(short, long, conflicts_with = "random")]
        params: Option<String>,

        /// Draw amplitudes uniformly from [-1, 1)
        #[arg(long)]
        random: bool,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Drop generator terms below this magnitude
        #[arg(long, default_value = "0.0")]
        threshold: f64,

        /// Output format (summary, qasm, json)
        #[arg(short, long, default_value = "summary")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Build a hardware-efficient quantum-compiling circuit
    Hea {
        /// Number of layers
        #[arg(short, long, default_value = "1")]
        layers: u32,

        /// Number of qubits (even)
        #[arg(short, long)]
        qubits: u32,

        /// Comma-separated rotation angles (symbolic template if omitted)
        #[arg(short, long)]
        params: Option<String>,

        /// Output format (summary, qasm, json)
        #[arg(short, long, default_value = "summary")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Build the ansatz described by a config file
    Build {
        /// Config file (.yaml, .yml or .json)
        #[arg(short, long)]
        config: String,

        /// Comma-separated parameters
        #[arg(short, long, conflicts_with = "random")]
        params: Option<String>,

        /// Draw parameters uniformly from [-1, 1)
        #[arg(long)]
        random: bool,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Output format (summary, qasm, json)
        #[arg(short, long, default_value = "summary")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the parameter count of a configured ansatz
    Params {
        /// Config file (.yaml, .yml or .json)
        #[arg(short, long)]
        config: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Uccsd {
            orbitals,
            alpha,
            transformation,
            params,
            random,
            seed,
            threshold,
            format,
            output,
        } => uccsd::execute(
            orbitals,
            alpha,
            &transformation,
            ParamSource::from_flags(params.as_deref(), random, seed),
            threshold,
            &format,
            output.as_deref(),
        ),

        Commands::Hea {
            layers,
            qubits,
            params,
            format,
            output,
        } => hea::execute(layers, qubits, params.as_deref(), &format, output.as_deref()),

        Commands::Build {
            config,
            params,
            random,
            seed,
            format,
            output,
        } => build::execute(
            &config,
            ParamSource::from_flags(params.as_deref(), random, seed),
            &format,
            output.as_deref(),
        ),

        Commands::Params { config } => params::execute(&config),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
