//! Property-based tests for circuit bookkeeping.

use proptest::prelude::*;
use vqe_ir::{Circuit, QubitId};

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    X(u32),
    H(u32),
    Rz(u32, f64),
    CX(u32, u32),
}

impl GateOp {
    fn apply(self, circuit: &mut Circuit) {
        // Invalid operands (equal CX qubits) are rejected and simply skipped.
        let _ = match self {
            GateOp::X(q) => circuit.x(QubitId(q)),
            GateOp::H(q) => circuit.h(QubitId(q)),
            GateOp::Rz(q, theta) => circuit.rz(theta, QubitId(q)),
            GateOp::CX(c, t) => circuit.cx(QubitId(c), QubitId(t)),
        };
    }
}

fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    let max = num_qubits;
    prop_oneof![
        (0..max).prop_map(GateOp::X),
        (0..max).prop_map(GateOp::H),
        (0..max, -3.0_f64..3.0).prop_map(|(q, t)| GateOp::Rz(q, t)),
        (0..max, 0..max).prop_map(|(c, t)| GateOp::CX(c, t)),
    ]
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (2_u32..=6).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 0..=30).prop_map(move |ops| {
            let mut circuit = Circuit::with_size("prop", num_qubits);
            for op in ops {
                op.apply(&mut circuit);
            }
            circuit
        })
    })
}

proptest! {
    #[test]
    fn depth_never_exceeds_gate_count(circuit in arb_circuit()) {
        prop_assert!(circuit.depth() <= circuit.num_ops());
    }

    #[test]
    fn gate_arity_partition_is_complete(circuit in arb_circuit()) {
        prop_assert_eq!(
            circuit.num_single_qubit_gates() + circuit.num_two_qubit_gates(),
            circuit.num_ops()
        );
    }

    #[test]
    fn compose_concatenates(a in arb_circuit(), b in arb_circuit()) {
        let mut wide = Circuit::with_size("wide", 6);
        wide.compose(&a).unwrap();
        wide.compose(&b).unwrap();
        prop_assert_eq!(wide.num_ops(), a.num_ops() + b.num_ops());
        prop_assert_eq!(&wide.instructions()[..a.num_ops()], a.instructions());
    }
}

#[test]
fn circuit_survives_json() {
    let mut circuit = Circuit::with_size("json", 2);
    circuit.x(QubitId(0)).unwrap();
    circuit.rz(0.125, QubitId(1)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();

    let json = serde_json::to_string(&circuit).unwrap();
    let back: Circuit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, circuit);
}
