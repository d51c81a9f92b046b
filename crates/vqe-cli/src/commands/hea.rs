//! Hardware-efficient ansatz command implementation.

use anyhow::Result;

use vqe_ansatz::HeaQuantumCompilingAnsatz;

use super::common::{emit_circuit, parse_params};

/// Execute the hea command. Without `params` the symbolic template is built.
pub fn execute(
    layers: u32,
    qubits: u32,
    params: Option<&str>,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let ansatz = HeaQuantumCompilingAnsatz::new(layers, qubits)?;
    let params = params.map(parse_params).transpose()?;
    emit_circuit(&ansatz, params.as_deref(), format, output)
}
