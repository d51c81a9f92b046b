//! Qubit-operator exponentiation.
//!
//! For a real-weighted operator `O = Σ_k θ_k P_k` this emits
//!
//!   ∏_k exp(-i θ_k P_k)
//!
//! one term at a time, in operator order, using the circuit identity
//!
//!   exp(-i θ Z⊗Z⊗...⊗Z) = CNOT_ladder · Rz(2θ) · CNOT_ladder†
//!
//! with basis rotations applied before/after to handle X and Y factors:
//!   X → H · Z · H
//!   Y → Sdg · H · Z · H · S
//!   Z → identity
//!
//! Gate count per term: 2·(k-1) CX + up to 2·k basis gates (4·k for Y) + 1 Rz,
//! where k = number of non-identity qubits.

use tracing::{debug, trace};
use vqe_fermion::{EQ_TOLERANCE, PauliOp, PauliString, QubitOperator};
use vqe_ir::{Circuit, QubitId};

use crate::error::{AnsatzError, AnsatzResult};

/// Synthesise `∏_k exp(-i θ_k P_k)` on an `n_qubits` register.
///
/// Every coefficient must be real (imaginary part within `EQ_TOLERANCE`).
pub fn exponentiate(op: &QubitOperator, n_qubits: u32) -> AnsatzResult<Circuit> {
    let width = op.n_qubits();
    if width > n_qubits {
        return Err(AnsatzError::QubitOutOfRange {
            qubit: width - 1,
            n_qubits,
        });
    }

    let mut circuit = Circuit::with_size("evolution", n_qubits);

    for (pauli, coeff) in op.terms() {
        if coeff.im.abs() > EQ_TOLERANCE {
            return Err(AnsatzError::ComplexCoefficient {
                term: pauli.to_string(),
                imag: coeff.im,
            });
        }
        trace!(term = %pauli, theta = coeff.re, "exponentiating Pauli term");
        append_exp_pauli(&mut circuit, pauli, coeff.re)?;
    }

    debug!(
        n_terms = op.len(),
        n_qubits,
        n_ops = circuit.num_ops(),
        "synthesised evolution circuit"
    );
    Ok(circuit)
}

/// Append the circuit for `exp(-i · theta · P)` to `circuit`.
///
/// If the Pauli string is the identity operator the function is a no-op
/// (global phase).
pub fn append_exp_pauli(circuit: &mut Circuit, pauli: &PauliString, theta: f64) -> AnsatzResult<()> {
    let ops = pauli.ops();
    let Some(&(last, _)) = ops.last() else {
        return Ok(());
    };

    let n_qubits = circuit.num_qubits();
    for &(q, _) in ops {
        if q >= n_qubits {
            return Err(AnsatzError::QubitOutOfRange { qubit: q, n_qubits });
        }
    }

    let qubits: Vec<u32> = ops.iter().map(|(q, _)| *q).collect();

    basis_change(circuit, ops, false)?;
    parity_ladder(circuit, &qubits, false)?;
    // Rz(φ) = exp(-i φ/2 Z)
    circuit.rz(2.0 * theta, QubitId(last))?;
    parity_ladder(circuit, &qubits, true)?;
    basis_change(circuit, ops, true)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Rotate each factor into the Z basis (`undo = false`) or back (`undo = true`).
///
///   X → H           | H
///   Y → Sdg · H     | H · S
///   Z → (nothing)   | (nothing)
fn basis_change(circuit: &mut Circuit, ops: &[(u32, PauliOp)], undo: bool) -> AnsatzResult<()> {
    for &(q, op) in ops {
        let qid = QubitId(q);
        match (op, undo) {
            (PauliOp::X, _) => {
                circuit.h(qid)?;
            }
            (PauliOp::Y, false) => {
                circuit.sdg(qid)?;
                circuit.h(qid)?;
            }
            (PauliOp::Y, true) => {
                circuit.h(qid)?;
                circuit.s(qid)?;
            }
            (PauliOp::Z | PauliOp::I, _) => {}
        }
    }
    Ok(())
}

/// Accumulate the parity of `qubits` onto the last one with a chain of
/// neighbouring CXs, or peel it off again in mirrored order (`uncompute`).
fn parity_ladder(circuit: &mut Circuit, qubits: &[u32], uncompute: bool) -> AnsatzResult<()> {
    let mut pairs: Vec<(u32, u32)> = qubits.windows(2).map(|w| (w[0], w[1])).collect();
    if uncompute {
        pairs.reverse();
    }
    for (control, target) in pairs {
        circuit.cx(QubitId(control), QubitId(target))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use vqe_ir::Instruction;

    fn names(circuit: &Circuit) -> Vec<&'static str> {
        circuit.instructions().iter().map(Instruction::name).collect()
    }

    #[test]
    fn test_single_z_is_one_rotation() {
        let mut circuit = Circuit::with_size("t", 2);
        append_exp_pauli(&mut circuit, &"Z1".parse().unwrap(), 0.3).unwrap();
        assert_eq!(names(&circuit), vec!["rz"]);
        let angle = circuit.instructions()[0].gate.angle().and_then(|a| a.as_f64());
        assert_eq!(angle, Some(0.6));
        assert_eq!(circuit.instructions()[0].qubits, vec![QubitId(1)]);
    }

    #[test]
    fn test_xy_term_layout() {
        let mut circuit = Circuit::with_size("t", 3);
        append_exp_pauli(&mut circuit, &"X0 Z1 Y2".parse().unwrap(), 0.1).unwrap();
        assert_eq!(
            names(&circuit),
            vec!["h", "sdg", "h", "cx", "cx", "rz", "cx", "cx", "h", "h", "s"]
        );
        // Rotation lands on the highest qubit.
        assert_eq!(circuit.instructions()[5].qubits, vec![QubitId(2)]);
        assert_eq!(circuit.num_two_qubit_gates(), 4);
    }

    #[test]
    fn test_identity_term_is_noop() {
        let mut circuit = Circuit::with_size("t", 1);
        append_exp_pauli(&mut circuit, &PauliString::identity(), 1.0).unwrap();
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_out_of_range_qubit_rejected() {
        let mut circuit = Circuit::with_size("t", 2);
        assert!(matches!(
            append_exp_pauli(&mut circuit, &"X0 Z2".parse().unwrap(), 0.1),
            Err(AnsatzError::QubitOutOfRange { qubit: 2, n_qubits: 2 })
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_operator_wider_than_register_rejected() {
        let mut op = QubitOperator::new();
        op.add_term("Z0".parse().unwrap(), 0.5);
        op.add_term("X0 Z2".parse().unwrap(), 0.1);
        assert!(matches!(
            exponentiate(&op, 2),
            Err(AnsatzError::QubitOutOfRange { qubit: 2, n_qubits: 2 })
        ));
        assert!(exponentiate(&op, 3).is_ok());
    }

    #[test]
    fn test_parity_ladder_is_mirrored() {
        let mut circuit = Circuit::with_size("t", 4);
        append_exp_pauli(&mut circuit, &"Z0 Z1 Z3".parse().unwrap(), 0.2).unwrap();
        let pairs: Vec<Vec<QubitId>> = circuit
            .instructions()
            .iter()
            .filter(|i| i.name() == "cx")
            .map(|i| i.qubits.clone())
            .collect();
        assert_eq!(
            pairs,
            vec![
                vec![QubitId(0), QubitId(1)],
                vec![QubitId(1), QubitId(3)],
                vec![QubitId(1), QubitId(3)],
                vec![QubitId(0), QubitId(1)],
            ]
        );
    }

    #[test]
    fn test_complex_coefficient_rejected() {
        let op = QubitOperator::from_term("X0 Y1".parse().unwrap(), Complex64::new(0.1, 0.2));
        assert!(matches!(
            exponentiate(&op, 2),
            Err(AnsatzError::ComplexCoefficient { .. })
        ));
    }

    #[test]
    fn test_exponentiate_keeps_term_order() {
        let mut op = QubitOperator::new();
        op.add_term("Z1".parse().unwrap(), 0.5);
        op.add_term("Z0".parse().unwrap(), 0.25);
        let circuit = exponentiate(&op, 2).unwrap();
        assert_eq!(circuit.num_ops(), 2);
        assert_eq!(circuit.instructions()[0].qubits, vec![QubitId(1)]);
        assert_eq!(circuit.instructions()[1].qubits, vec![QubitId(0)]);
    }
}
