//! High-level circuit builder API.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::parameter::ParameterExpression;
use crate::qubit::QubitId;

/// A quantum circuit: a fixed-width register and an ordered gate list.
///
/// Instructions are kept in application order; circuits are built by
/// appending gates and concatenated with [`Circuit::compose`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits in the register.
    num_qubits: u32,
    /// Gates in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit with no qubits.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_size(name, 0)
    }

    /// Create a circuit with a given number of qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Append an instruction after validating its operands.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let gate = instruction.name();
        let expected = instruction.gate.num_qubits();
        let got = instruction.qubits.len() as u32;
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate,
                expected,
                got,
            });
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate,
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit { qubit, gate });
            }
        }

        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Rx(theta.into()),
            qubit,
        ))
    }

    /// Apply Rz rotation gate.
    pub fn rz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Rz(theta.into()),
            qubit,
        ))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    // =========================================================================
    // Composition and binding
    // =========================================================================

    /// Append every instruction of `other` to this circuit.
    ///
    /// `other` may be narrower than `self` but not wider.
    pub fn compose(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        if other.num_qubits > self.num_qubits {
            return Err(IrError::WidthMismatch {
                left: self.num_qubits,
                right: other.num_qubits,
            });
        }
        self.instructions.extend(other.instructions.iter().cloned());
        Ok(self)
    }

    /// Return a copy with every symbol found in `bindings` replaced by its value.
    pub fn bind_parameters(&self, bindings: &FxHashMap<String, f64>) -> Circuit {
        let mut bound = self.clone();
        for instruction in &mut bound.instructions {
            if let Some(angle) = instruction.gate.angle_mut() {
                *angle = angle.bind_all(bindings);
            }
        }
        bound
    }

    /// Fail with [`IrError::UnboundParameter`] if any gate is still symbolic.
    pub fn ensure_bound(&self) -> IrResult<()> {
        match self.symbols().into_iter().next() {
            Some(name) => Err(IrError::UnboundParameter(name)),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the circuit.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Total number of gates.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of single-qubit gates.
    pub fn num_single_qubit_gates(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| i.is_single_qubit())
            .count()
    }

    /// Number of two-qubit gates.
    pub fn num_two_qubit_gates(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_two_qubit()).count()
    }

    /// Gate counts keyed by gate name.
    pub fn count_ops(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for instruction in &self.instructions {
            *counts.entry(instruction.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Circuit depth (longest chain of gates sharing a qubit).
    pub fn depth(&self) -> usize {
        let mut levels = vec![0usize; self.num_qubits as usize];
        let mut depth = 0;
        for instruction in &self.instructions {
            let level = instruction
                .qubits
                .iter()
                .map(|q| levels[q.0 as usize])
                .max()
                .unwrap_or(0)
                + 1;
            for q in &instruction.qubits {
                levels[q.0 as usize] = level;
            }
            depth = depth.max(level);
        }
        depth
    }

    /// Check if any gate still carries a symbol.
    pub fn is_parameterized(&self) -> bool {
        self.instructions.iter().any(|i| i.gate.is_parameterized())
    }

    /// Symbol names in order of first appearance.
    pub fn symbols(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        self.instructions
            .iter()
            .filter_map(|i| i.gate.angle().and_then(ParameterExpression::symbol_name))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }
}
