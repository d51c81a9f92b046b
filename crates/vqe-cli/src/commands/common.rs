//! Shared helpers for CLI commands.

use std::fs;
use std::str::FromStr;

use anyhow::{Context, Result};
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use vqe_ansatz::{Ansatz, random_parameters};
use vqe_ir::{Circuit, qasm};

/// Range used by `--random`.
const RANDOM_RANGE: (f64, f64) = (-1.0, 1.0);

/// How a command obtains its parameter vector.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamSource {
    /// No parameters given
    None,
    /// Comma-separated values from `--params`
    Explicit(String),
    /// `--random`, optionally seeded
    Random(Option<u64>),
}

impl ParamSource {
    /// Combine the `--params`, `--random` and `--seed` flags.
    pub fn from_flags(params: Option<&str>, random: bool, seed: Option<u64>) -> Self {
        match (params, random) {
            (Some(values), _) => ParamSource::Explicit(values.to_string()),
            (None, true) => ParamSource::Random(seed),
            (None, false) => ParamSource::None,
        }
    }

    /// Resolve into a parameter vector of `ansatz.number_of_params()` values.
    pub fn resolve(&self, ansatz: &dyn Ansatz) -> Result<Option<Vec<f64>>> {
        match self {
            ParamSource::None => Ok(None),
            ParamSource::Explicit(values) => parse_params(values).map(Some),
            ParamSource::Random(seed) => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                let (min, max) = RANDOM_RANGE;
                Ok(Some(random_parameters(ansatz.number_of_params(), min, max, &mut rng)))
            }
        }
    }
}

/// Parse a comma-separated list of floats. An empty string is no values.
pub fn parse_params(values: &str) -> Result<Vec<f64>> {
    values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<f64>()
                .with_context(|| format!("Invalid parameter value: '{v}'"))
        })
        .collect()
}

/// Circuit output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Qasm,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "summary" | "text" => Ok(OutputFormat::Summary),
            "qasm" | "qasm3" => Ok(OutputFormat::Qasm),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown format: '{other}'. Available: summary, qasm, json"),
        }
    }
}

/// Render a circuit in the requested format.
pub fn render(ansatz: &dyn Ansatz, circuit: &Circuit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Summary => Ok(summary(ansatz, circuit)),
        OutputFormat::Qasm => Ok(qasm::emit(circuit)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(circuit).context("Failed to serialize circuit")
        }
    }
}

fn summary(ansatz: &dyn Ansatz, circuit: &Circuit) -> String {
    let mut counts: Vec<_> = circuit.count_ops().into_iter().collect();
    counts.sort_unstable();
    let counts = counts
        .iter()
        .map(|(name, n)| format!("{name}={n}"))
        .collect::<Vec<_>>()
        .join(", ");

    [
        format!("{}", style(ansatz.name()).cyan().bold()),
        format!("  Qubits:      {}", circuit.num_qubits()),
        format!("  Layers:      {}", ansatz.number_of_layers()),
        format!("  Parameters:  {}", ansatz.number_of_params()),
        format!("  Symbolic:    {}", circuit.is_parameterized()),
        format!("  Operations:  {}", circuit.num_ops()),
        format!(
            "  Gates:       {} single-qubit, {} two-qubit",
            circuit.num_single_qubit_gates(),
            circuit.num_two_qubit_gates()
        ),
        format!("  Depth:       {}", circuit.depth()),
        format!("  Counts:      {counts}"),
    ]
    .join("\n")
}

/// Build the circuit, render it and write it to `output` or stdout.
pub fn emit_circuit(
    ansatz: &dyn Ansatz,
    params: Option<&[f64]>,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let circuit = ansatz
        .generate_circuit(params)
        .with_context(|| format!("Failed to generate {} circuit", ansatz.name()))?;
    info!(
        ansatz = ansatz.name(),
        n_qubits = circuit.num_qubits(),
        n_ops = circuit.num_ops(),
        "generated circuit"
    );

    let rendered = render(ansatz, &circuit, format)?;
    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("Failed to write file: {path}"))?;
            println!(
                "{} Wrote {} circuit to {}",
                style("✓").green().bold(),
                ansatz.name(),
                style(path).green()
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
