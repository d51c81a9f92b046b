//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::qubit::QubitId;

/// A gate applied to concrete qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: StandardGate,
    /// Qubits this instruction operates on (control first for `cx`).
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Gate name shorthand.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }

    /// Check if this acts on exactly one qubit.
    pub fn is_single_qubit(&self) -> bool {
        self.qubits.len() == 1
    }

    /// Check if this acts on exactly two qubits.
    pub fn is_two_qubit(&self) -> bool {
        self.qubits.len() == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_constructors() {
        let h = Instruction::single_qubit_gate(StandardGate::H, QubitId(1));
        assert!(h.is_single_qubit());
        assert_eq!(h.name(), "h");

        let cx = Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(2));
        assert!(cx.is_two_qubit());
        assert_eq!(cx.qubits, vec![QubitId(0), QubitId(2)]);
    }
}
