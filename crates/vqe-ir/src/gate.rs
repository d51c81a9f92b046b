//! Gate set used by the ansatz builders.

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterExpression;

/// Standard gates with known semantics.
///
/// This is the gate set emitted by reference-state preparation,
/// Pauli-exponential synthesis and the hardware-efficient layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X gate.
    X,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// Rotation around X axis.
    Rx(ParameterExpression),
    /// Rotation around Z axis.
    Rz(ParameterExpression),
    /// Controlled-X (CNOT) gate.
    CX,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::X
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::Rx(_)
            | StandardGate::Rz(_) => 1,
            StandardGate::CX => 2,
        }
    }

    /// Check if this gate still carries an unbound symbol.
    pub fn is_parameterized(&self) -> bool {
        match self {
            StandardGate::Rx(p) | StandardGate::Rz(p) => p.is_symbolic(),
            _ => false,
        }
    }

    /// The rotation angle, for rotation gates.
    pub fn angle(&self) -> Option<&ParameterExpression> {
        match self {
            StandardGate::Rx(p) | StandardGate::Rz(p) => Some(p),
            _ => None,
        }
    }

    pub(crate) fn angle_mut(&mut self) -> Option<&mut ParameterExpression> {
        match self {
            StandardGate::Rx(p) | StandardGate::Rz(p) => Some(p),
            _ => None,
        }
    }
}
