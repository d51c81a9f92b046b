//! Build command implementation.

use anyhow::{Context, Result};
use console::style;

use vqe_ansatz::{Ansatz, AnsatzConfig};

use super::common::{ParamSource, emit_circuit};

/// Execute the build command.
pub fn execute(config: &str, params: ParamSource, format: &str, output: Option<&str>) -> Result<()> {
    let ansatz = AnsatzConfig::from_file(config)
        .and_then(|c| c.build())
        .with_context(|| format!("Failed to load ansatz from {config}"))?;
    eprintln!(
        "{} Loaded {} from {}",
        style("→").cyan().bold(),
        style(ansatz.name()).yellow(),
        style(config).green()
    );

    let params = params.resolve(ansatz.as_ref())?;
    if params.is_none() && !ansatz.supports_parametrized_circuits() {
        anyhow::bail!(
            "{} needs {} parameters: pass --params or --random",
            ansatz.name(),
            ansatz.number_of_params()
        );
    }
    emit_circuit(ansatz.as_ref(), params.as_deref(), format, output)
}
