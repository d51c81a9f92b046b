//! Error types for the ansatz crate.

use thiserror::Error;

/// Errors produced by ansatz construction and circuit generation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnsatzError {
    /// Orbital / electron counts violate the ansatz invariants.
    #[error("Invalid chemistry parameters: {0}")]
    InvalidChemistryParameters(String),

    /// Layer count not accepted by this ansatz.
    #[error("Invalid number of layers {got}: {reason}")]
    InvalidLayerCount {
        /// Requested layer count.
        got: u32,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// Qubit count not accepted by this ansatz.
    #[error("Invalid number of qubits {got}: {reason}")]
    InvalidQubitCount {
        /// Requested qubit count.
        got: u32,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// Screening threshold must be a finite, non-negative number.
    #[error("Invalid screening threshold {0}")]
    InvalidThreshold(f64),

    /// The ansatz cannot perform the requested operation.
    #[error("{ansatz} does not support {operation}")]
    NotSupported {
        /// Ansatz name.
        ansatz: &'static str,
        /// Operation that was attempted.
        operation: &'static str,
    },

    /// Parameter vector has the wrong length.
    #[error("Expected {expected} parameters, got {got}")]
    ParameterCount {
        /// Parameters the ansatz needs.
        expected: usize,
        /// Parameters that were supplied.
        got: usize,
    },

    /// A generator term still carries an imaginary coefficient.
    #[error("Cannot exponentiate term [{term}] with complex coefficient (imaginary part {imag})")]
    ComplexCoefficient {
        /// The Pauli string, printed.
        term: String,
        /// The offending imaginary part.
        imag: f64,
    },

    /// A Pauli string references a qubit index that is out of range.
    #[error("Pauli string references qubit {qubit} but circuit only has {n_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the target circuit.
        n_qubits: u32,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operator algebra returned an error.
    #[error("Operator error: {0}")]
    Fermion(#[from] vqe_fermion::FermionError),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] vqe_ir::IrError),
}

/// Result type for ansatz operations.
pub type AnsatzResult<T> = Result<T, AnsatzError>;
