//! Error types for the operator crate.

use thiserror::Error;

/// Errors produced by operator construction and fermion-to-qubit encodings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FermionError {
    /// Orbital / electron counts do not describe a valid singlet system.
    #[error("Invalid chemistry parameters: {0}")]
    InvalidChemistryParameters(String),

    /// Packed amplitude vector has the wrong length.
    #[error("Expected {expected} packed amplitudes for this system, got {got}")]
    AmplitudeCount {
        /// Singlet-UCCSD parameter count.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },

    /// Encoding name not recognised.
    #[error("Unsupported fermion-to-qubit transformation '{0}' (expected Jordan-Wigner or Bravyi-Kitaev)")]
    UnsupportedTransformation(String),

    /// A textual operator term could not be parsed.
    #[error("Invalid operator term '{0}'")]
    InvalidTerm(String),

    /// An operator acts on a mode beyond the declared register width.
    #[error("Operator acts on mode {mode} but only {n_modes} modes are available")]
    ModeOutOfRange {
        /// The offending mode index.
        mode: u32,
        /// Declared number of modes.
        n_modes: u32,
    },
}

/// Result type for operator algebra.
pub type FermionResult<T> = Result<T, FermionError>;
