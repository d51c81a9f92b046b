//! Circuit representation for variational ansatz builders.
//!
//! A [`Circuit`] is a fixed-width qubit register plus an ordered list of
//! [`Instruction`]s. It is what every ansatz in this workspace produces and
//! what downstream execution layers consume.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a qubit by index
//! - **Gates**: [`StandardGate`], the gate set emitted by the ansatz builders
//! - **Parameters**: [`ParameterExpression`] for constant or symbolic angles
//! - **Instructions**: [`Instruction`] combining a gate with its operands
//! - **Circuit**: [`Circuit`] builder with composition and parameter binding
//! - **Emission**: [`qasm::emit`] renders OpenQASM 3
//!
//! # Example: Parameterized Circuit
//!
//! ```rust
//! use rustc_hash::FxHashMap;
//! use vqe_ir::{Circuit, ParameterExpression, QubitId};
//!
//! let mut circuit = Circuit::with_size("variational", 2);
//! circuit.x(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.rz(ParameterExpression::symbol("theta_0"), QubitId(1)).unwrap();
//! assert!(circuit.is_parameterized());
//!
//! let mut values = FxHashMap::default();
//! values.insert("theta_0".to_string(), 0.3);
//! let bound = circuit.bind_parameters(&values);
//! assert!(!bound.is_parameterized());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `X` | 1 | Pauli-X (reference-state flips) |
//! | `H` | 1 | Hadamard (X-basis change) |
//! | `S`, `Sdg` | 1 | Phase gates (Y-basis change) |
//! | `Rx`, `Rz` | 1 | Rotation gates |
//! | `CX` | 2 | Controlled-NOT (CNOT) |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qasm;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::Instruction;
pub use parameter::ParameterExpression;
pub use qubit::QubitId;
