//! Variational ansatz circuit builders.
//!
//! Two ansätze implement the common [`Ansatz`] trait:
//!
//! - [`SingletUccsdAnsatz`]: Hartree-Fock reference plus the exponentiated
//!   spin-adapted UCCSD generator, encoded with Jordan-Wigner or Bravyi-Kitaev
//! - [`HeaQuantumCompilingAnsatz`]: layered single-qubit rotations with
//!   brick and inside-out CNOT entanglers, available as a symbolic template
//!
//! # Example
//!
//! ```rust
//! use vqe_ansatz::{Ansatz, HeaQuantumCompilingAnsatz, SingletUccsdAnsatz};
//! use vqe_fermion::Transformation;
//!
//! let uccsd = SingletUccsdAnsatz::new(1, 2, 1, Transformation::JordanWigner).unwrap();
//! let params = vec![0.05; uccsd.number_of_params()];
//! let circuit = uccsd.generate_circuit(Some(&params)).unwrap();
//! assert_eq!(circuit.num_qubits(), 4);
//!
//! let mut hea = HeaQuantumCompilingAnsatz::new(2, 4).unwrap();
//! let template = hea.parametrized_circuit().unwrap();
//! assert_eq!(template.symbols().len(), 48);
//! ```

pub mod ansatz;
pub mod config;
pub mod error;
pub mod quantum_compiling;
pub mod reference;
pub mod singlet_uccsd;
pub mod synthesis;

pub use ansatz::{Ansatz, random_parameters};
pub use config::AnsatzConfig;
pub use error::{AnsatzError, AnsatzResult};
pub use quantum_compiling::HeaQuantumCompilingAnsatz;
pub use reference::hartree_fock_prefix;
pub use singlet_uccsd::SingletUccsdAnsatz;
pub use synthesis::{append_exp_pauli, exponentiate};
