//! Error types for the IR crate.

use thiserror::Error;

use crate::qubit::QubitId;

/// Errors raised while building or binding circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// An operand addresses a qubit beyond the register.
    #[error("{gate} on {qubit}: register holds only {num_qubits} qubits")]
    QubitNotFound {
        qubit: QubitId,
        num_qubits: u32,
        gate: &'static str,
    },

    /// Operand count does not match the gate arity.
    #[error("{gate} acts on {expected} qubits, got {got} operands")]
    QubitCountMismatch {
        gate: &'static str,
        expected: u32,
        got: u32,
    },

    /// The same qubit appears twice in one instruction.
    #[error("{gate} uses {qubit} more than once")]
    DuplicateQubit { qubit: QubitId, gate: &'static str },

    /// Composed circuits must share a register width.
    #[error("cannot compose a {right}-qubit circuit onto a {left}-qubit circuit")]
    WidthMismatch { left: u32, right: u32 },

    /// A symbolic angle has no value.
    #[error("parameter '{0}' is unbound")]
    UnboundParameter(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
