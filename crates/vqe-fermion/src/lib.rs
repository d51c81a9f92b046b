//! Fermion and qubit operator algebra for variational chemistry ansätze.
//!
//! This crate provides:
//!
//! - [`FermionOperator`]: sums of products of creation/annihilation operators
//! - [`QubitOperator`]: sums of Pauli strings with complex coefficients
//! - [`transform`](transform::transform): Jordan-Wigner and Bravyi-Kitaev encodings
//! - [`uccsd`]: spin-adapted singlet UCCSD generators and their packed amplitudes
//!
//! # Example
//!
//! ```rust
//! use vqe_fermion::{Transformation, build_uccsd_generator, singlet_paramsize, transform};
//!
//! // H2 in a minimal basis: 4 spin orbitals, 2 electrons.
//! let n_params = singlet_paramsize(4, 2).unwrap();
//! assert_eq!(n_params, 2);
//!
//! let generator = build_uccsd_generator(&[0.1, 0.2], 4, 2).unwrap();
//! let qubit_op = transform(&generator, Transformation::JordanWigner);
//! assert!(!qubit_op.is_empty());
//! ```

pub mod error;
pub mod fermion;
pub mod pauli;
pub mod qubit_operator;
pub mod transform;
pub mod uccsd;

pub use error::{FermionError, FermionResult};
pub use fermion::{FermionOperator, FermionTerm, LadderOp};
pub use pauli::{PauliOp, PauliString};
pub use qubit_operator::QubitOperator;
pub use transform::{Transformation, transform};
pub use uccsd::{build_uccsd_generator, singlet_packed_amplitudes, singlet_paramsize};

/// Coefficients with magnitude at or below this are treated as zero.
pub const EQ_TOLERANCE: f64 = 1e-8;
