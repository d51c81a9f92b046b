//! Hartree-Fock reference-state preparation.
//!
//! Alpha electrons fill the even (spin-up) modes `0, 2, 4, …`, beta electrons
//! the odd ones. The prefix flips the qubits that are `|1⟩` in the encoded
//! reference determinant, highest qubit first.

use vqe_fermion::Transformation;
use vqe_fermion::transform::bravyi_kitaev::update_set;
use vqe_ir::{Circuit, QubitId};

use crate::error::{AnsatzError, AnsatzResult};

/// Spin-orbital modes occupied in the closed-/open-shell reference.
fn occupied_modes(n_alpha: u32, n_beta: u32) -> Vec<u32> {
    let mut modes: Vec<u32> = (0..n_alpha)
        .map(|i| 2 * i)
        .chain((0..n_beta).map(|i| 2 * i + 1))
        .collect();
    modes.sort_unstable();
    modes
}

/// Qubits set to `|1⟩` by the reference determinant, in ascending order.
pub fn reference_qubits(
    n_qubits: u32,
    n_alpha: u32,
    n_beta: u32,
    encoding: Transformation,
) -> AnsatzResult<Vec<u32>> {
    let modes = occupied_modes(n_alpha, n_beta);
    if let Some(&highest) = modes.last() {
        if highest >= n_qubits {
            return Err(AnsatzError::InvalidChemistryParameters(format!(
                "{n_alpha} alpha and {n_beta} beta electrons do not fit into {n_qubits} spin orbitals"
            )));
        }
    }

    Ok(match encoding {
        Transformation::JordanWigner => modes,
        Transformation::BravyiKitaev => {
            let mut parity = vec![false; n_qubits as usize];
            for &mode in &modes {
                for q in update_set(mode, n_qubits) {
                    parity[q as usize] ^= true;
                }
            }
            (0..n_qubits).filter(|&q| parity[q as usize]).collect()
        }
    })
}

/// X gates preparing the Hartree-Fock determinant, descending by qubit.
pub fn hartree_fock_prefix(
    n_qubits: u32,
    n_alpha: u32,
    n_beta: u32,
    encoding: Transformation,
) -> AnsatzResult<Circuit> {
    let mut circuit = Circuit::with_size("hartree_fock", n_qubits);
    for q in reference_qubits(n_qubits, n_alpha, n_beta, encoding)?
        .into_iter()
        .rev()
    {
        circuit.x(QubitId(q))?;
    }
    Ok(circuit)
}
