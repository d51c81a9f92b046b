//! OpenQASM 3 emission.
//!
//! Symbolic angles are declared as `input angle` so that the emitted program
//! stays a valid parametrised template.

use std::fmt::Write as _;

use crate::circuit::Circuit;
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// Emit a circuit as QASM3 source code.
pub fn emit(circuit: &Circuit) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit);
    emitter.output
}

struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) {
        self.writeln("OPENQASM 3.0;");
        self.writeln("include \"stdgates.inc\";");
        self.writeln("");

        let symbols = circuit.symbols();
        for symbol in &symbols {
            self.writeln(&format!("input angle {symbol};"));
        }

        let num_qubits = circuit.num_qubits();
        if num_qubits > 0 {
            self.writeln(&format!("qubit[{num_qubits}] q;"));
        }
        if num_qubits > 0 || !symbols.is_empty() {
            self.writeln("");
        }

        for instruction in circuit.instructions() {
            self.emit_instruction(instruction);
        }
    }

    fn emit_instruction(&mut self, instruction: &Instruction) {
        let name = instruction.name();
        let qubits = emit_qubits(&instruction.qubits);
        match instruction.gate.angle() {
            Some(angle) => self.writeln(&format!("{name}({angle}) {qubits};")),
            None => self.writeln(&format!("{name} {qubits};")),
        }
    }

    fn writeln(&mut self, line: &str) {
        // Writing into a String cannot fail.
        let _ = writeln!(self.output, "{line}");
    }
}

fn emit_qubits(qubits: &[QubitId]) -> String {
    qubits
        .iter()
        .map(|q| format!("q[{}]", q.0))
        .collect::<Vec<_>>()
        .join(", ")
}
