//! Hardware-efficient ansatz for quantum compiling.
//!
//! Each layer on `Q` qubits (Q even) is
//!
//! ```text
//! rotations(θ[0 .. 3Q])      Rz · Rx(π/2) · Rz · Rx(π/2) · Rz on every qubit
//! CX(0,1) CX(2,3) …          even-odd pairs
//! rotations(θ[3Q .. 6Q])
//! inside-out CX layer        CX(i, Q−i−1) [+ CX(Q−i, i−1)] for i = Q/2−1, Q/2−3, …
//! ```
//!
//! so a layer consumes `6Q` parameters and contains `10Q` single-qubit and
//! `Q` two-qubit gates.

use std::f64::consts::FRAC_PI_2;

use tracing::debug;
use vqe_ir::{Circuit, IrResult, ParameterExpression, QubitId};

use crate::ansatz::{Ansatz, check_param_count};
use crate::error::{AnsatzError, AnsatzResult};

/// Layered Rz/Rx rotations with brick and inside-out CNOT entanglers.
#[derive(Debug, Clone)]
pub struct HeaQuantumCompilingAnsatz {
    number_of_layers: u32,
    number_of_qubits: u32,
    parametrized_circuit: Option<Circuit>,
}

impl HeaQuantumCompilingAnsatz {
    /// Create an ansatz with `number_of_layers ≥ 1` on an even, non-zero
    /// number of qubits.
    pub fn new(number_of_layers: u32, number_of_qubits: u32) -> AnsatzResult<Self> {
        validate_layers(number_of_layers)?;
        validate_qubits(number_of_qubits)?;
        Ok(Self {
            number_of_layers,
            number_of_qubits,
            parametrized_circuit: None,
        })
    }

    /// Parameters consumed by one layer (`6Q`).
    pub fn number_of_params_per_layer(&self) -> usize {
        6 * self.number_of_qubits as usize
    }

    /// Change the register width.
    pub fn set_number_of_qubits(&mut self, number_of_qubits: u32) -> AnsatzResult<()> {
        validate_qubits(number_of_qubits)?;
        self.number_of_qubits = number_of_qubits;
        self.invalidate_parametrized_circuit();
        Ok(())
    }

    fn append_rotations(&self, circuit: &mut Circuit, params: &[ParameterExpression]) -> IrResult<()> {
        for (q, angles) in params.chunks_exact(3).enumerate() {
            let qubit = QubitId(q as u32);
            circuit
                .rz(angles[0].clone(), qubit)?
                .rx(FRAC_PI_2, qubit)?
                .rz(angles[1].clone(), qubit)?
                .rx(FRAC_PI_2, qubit)?
                .rz(angles[2].clone(), qubit)?;
        }
        Ok(())
    }

    fn append_layer(&self, circuit: &mut Circuit, params: &[ParameterExpression]) -> IrResult<()> {
        let n = self.number_of_qubits;
        let (first, second) = params.split_at(3 * n as usize);

        self.append_rotations(circuit, first)?;
        for control in (0..n).step_by(2) {
            circuit.cx(QubitId(control), QubitId(control + 1))?;
        }

        self.append_rotations(circuit, second)?;
        for i in (0..n / 2).rev().step_by(2) {
            circuit.cx(QubitId(i), QubitId(n - i - 1))?;
            if i != 0 {
                circuit.cx(QubitId(n - i), QubitId(i - 1))?;
            }
        }
        Ok(())
    }
}

impl Ansatz for HeaQuantumCompilingAnsatz {
    fn name(&self) -> &'static str {
        "HEAQuantumCompilingAnsatz"
    }

    fn number_of_layers(&self) -> u32 {
        self.number_of_layers
    }

    fn set_number_of_layers(&mut self, number_of_layers: u32) -> AnsatzResult<()> {
        validate_layers(number_of_layers)?;
        self.number_of_layers = number_of_layers;
        self.invalidate_parametrized_circuit();
        Ok(())
    }

    fn number_of_qubits(&self) -> u32 {
        self.number_of_qubits
    }

    fn number_of_params(&self) -> usize {
        self.number_of_params_per_layer() * self.number_of_layers as usize
    }

    fn supports_parametrized_circuits(&self) -> bool {
        true
    }

    fn generate_circuit(&self, params: Option<&[f64]>) -> AnsatzResult<Circuit> {
        let angles: Vec<ParameterExpression> = match params {
            Some(values) => {
                check_param_count(self.number_of_params(), values)?;
                values.iter().copied().map(ParameterExpression::constant).collect()
            }
            None => self
                .symbols()
                .into_iter()
                .map(ParameterExpression::symbol)
                .collect(),
        };

        let mut circuit = Circuit::with_size("hea_quantum_compiling", self.number_of_qubits);
        for layer in angles.chunks_exact(self.number_of_params_per_layer()) {
            self.append_layer(&mut circuit, layer)?;
        }

        debug!(
            n_layers = self.number_of_layers,
            n_qubits = self.number_of_qubits,
            symbolic = params.is_none(),
            n_ops = circuit.num_ops(),
            "generated HEA quantum-compiling circuit"
        );
        Ok(circuit)
    }

    fn circuit_cache(&mut self) -> &mut Option<Circuit> {
        &mut self.parametrized_circuit
    }
}

fn validate_layers(number_of_layers: u32) -> AnsatzResult<()> {
    if number_of_layers == 0 {
        return Err(AnsatzError::InvalidLayerCount {
            got: number_of_layers,
            reason: "at least one layer is required",
        });
    }
    Ok(())
}

fn validate_qubits(number_of_qubits: u32) -> AnsatzResult<()> {
    if number_of_qubits == 0 || number_of_qubits % 2 != 0 {
        return Err(AnsatzError::InvalidQubitCount {
            got: number_of_qubits,
            reason: "the register must hold a positive, even number of qubits",
        });
    }
    Ok(())
}
