//! Singlet UCCSD command implementation.

use anyhow::{Context, Result};
use tracing::debug;

use vqe_ansatz::{Ansatz, SingletUccsdAnsatz};
use vqe_fermion::Transformation;

use super::common::{ParamSource, emit_circuit};

/// Execute the uccsd command.
pub fn execute(
    orbitals: u32,
    alpha: u32,
    transformation: &str,
    params: ParamSource,
    threshold: f64,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let transformation: Transformation = transformation
        .parse()
        .with_context(|| format!("Invalid transformation: '{transformation}'"))?;
    let ansatz = SingletUccsdAnsatz::new(1, orbitals, alpha, transformation)?
        .with_screening_threshold(threshold)?;
    debug!(
        orbitals,
        alpha,
        %transformation,
        n_params = ansatz.number_of_params(),
        "configured singlet UCCSD ansatz"
    );

    let Some(params) = params.resolve(&ansatz)? else {
        anyhow::bail!(
            "UCCSD circuits need {} amplitudes: pass --params or --random",
            ansatz.number_of_params()
        );
    };
    emit_circuit(&ansatz, Some(&params), format, output)
}
