//! Pauli strings.
//!
//! A Pauli string is a tensor product of single-qubit Pauli operators
//! (I, X, Y, Z). Qubits not listed act as identity.
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use vqe_fermion::pauli::{PauliOp, PauliString};
//!
//! // X0 · Y0 = i Z0
//! let x = PauliString::from_ops([(0, PauliOp::X)]);
//! let y = PauliString::from_ops([(0, PauliOp::Y)]);
//! let (phase, product) = x.product(&y);
//! assert_eq!(phase, Complex64::i());
//! assert_eq!(product, PauliString::from_ops([(0, PauliOp::Z)]));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::FermionError;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity; never stored inside a [`PauliString`].
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Multiply two single-qubit Paulis: `self · other = phase · result`.
    pub fn multiply(self, other: PauliOp) -> (Complex64, PauliOp) {
        use PauliOp::{I, X, Y, Z};
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::i();
        match (self, other) {
            (I, p) | (p, I) => (one, p),
            (a, b) if a == b => (one, I),
            (X, Y) => (i, Z),
            (Y, X) => (-i, Z),
            (Y, Z) => (i, X),
            (Z, Y) => (-i, X),
            (Z, X) => (i, Y),
            (X, Z) => (-i, Y),
            // Equal pairs handled by the guard above.
            _ => (one, I),
        }
    }

    fn symbol(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }
}

/// A tensor product of Pauli operators on indexed qubits.
///
/// Stored as a sorted `Vec<(qubit_index, PauliOp)>` with identity factors
/// omitted, so two strings acting identically compare and hash equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity factors, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// The identity string.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Construct a PauliString from an iterator of (qubit, op) pairs.
    ///
    /// Identity operators are dropped and the remaining ops sorted by qubit.
    /// Repeated qubits are multiplied together; the resulting phase is
    /// discarded, so callers that care should use [`PauliString::product`].
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let mut v: Vec<(u32, PauliOp)> = ops.into_iter().collect();
        v.sort_by_key(|(q, _)| *q);
        let mut merged: Vec<(u32, PauliOp)> = Vec::with_capacity(v.len());
        for (q, op) in v {
            match merged.last_mut() {
                Some((last_q, last_op)) if *last_q == q => {
                    *last_op = last_op.multiply(op).1;
                }
                _ => merged.push((q, op)),
            }
        }
        merged.retain(|(_, op)| *op != PauliOp::I);
        Self { ops: merged }
    }

    /// Return the non-identity (qubit, op) pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// Number of non-identity factors.
    pub fn weight(&self) -> usize {
        self.ops.len()
    }

    /// True if there are no non-identity operators (pure global phase).
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for an identity string.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// The operator acting on `qubit` (identity when absent).
    pub fn get(&self, qubit: u32) -> PauliOp {
        self.ops
            .binary_search_by_key(&qubit, |(q, _)| *q)
            .map_or(PauliOp::I, |idx| self.ops[idx].1)
    }

    /// Multiply two strings: `self · other = phase · result`.
    pub fn product(&self, other: &PauliString) -> (Complex64, PauliString) {
        let mut phase = Complex64::new(1.0, 0.0);
        let mut ops = Vec::with_capacity(self.ops.len() + other.ops.len());
        let (mut a, mut b) = (self.ops.iter().peekable(), other.ops.iter().peekable());

        loop {
            match (a.peek(), b.peek()) {
                (Some(&&(qa, pa)), Some(&&(qb, pb))) => match qa.cmp(&qb) {
                    Ordering::Less => {
                        ops.push((qa, pa));
                        a.next();
                    }
                    Ordering::Greater => {
                        ops.push((qb, pb));
                        b.next();
                    }
                    Ordering::Equal => {
                        let (factor, op) = pa.multiply(pb);
                        phase *= factor;
                        if op != PauliOp::I {
                            ops.push((qa, op));
                        }
                        a.next();
                        b.next();
                    }
                },
                (Some(&&entry), None) => {
                    ops.push(entry);
                    a.next();
                }
                (None, Some(&&entry)) => {
                    ops.push(entry);
                    b.next();
                }
                (None, None) => break,
            }
        }

        (phase, Self { ops })
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (q, op) in &self.ops {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{q}", op.symbol())?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for PauliString {
    type Err = FermionError;

    /// Parse the `"X0 Z1 Y3"` form; the empty string is the identity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FermionError::InvalidTerm(s.to_string());
        let ops = s
            .split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                let op = match chars.next() {
                    Some('I') => PauliOp::I,
                    Some('X') => PauliOp::X,
                    Some('Y') => PauliOp::Y,
                    Some('Z') => PauliOp::Z,
                    _ => return Err(invalid()),
                };
                let qubit = chars.as_str().parse::<u32>().map_err(|_| invalid())?;
                Ok((qubit, op))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_ops(ops))
    }
}
