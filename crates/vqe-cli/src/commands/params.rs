//! Params command implementation.

use anyhow::{Context, Result};

use vqe_ansatz::{Ansatz, AnsatzConfig};

/// Execute the params command.
pub fn execute(config: &str) -> Result<()> {
    let ansatz = AnsatzConfig::from_file(config)
        .and_then(|c| c.build())
        .with_context(|| format!("Failed to load ansatz from {config}"))?;
    println!("{}", ansatz.number_of_params());
    Ok(())
}
