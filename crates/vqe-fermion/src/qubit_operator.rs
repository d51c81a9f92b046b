//! Qubit operators: weighted sums of Pauli strings.
//!
//!   O = Σ_k  c_k · P_k,   c_k ∈ ℂ
//!
//! This is what the fermion-to-qubit encodings produce. Exponentiating a
//! qubit operator into gates requires every coefficient to be real; the
//! ansatz builders take the imaginary part of an anti-Hermitian generator
//! to get there.

use std::fmt;
use std::ops::{Add, Mul};

use indexmap::IndexMap;
use indexmap::map::Entry;
use num_complex::Complex64;
use rustc_hash::FxBuildHasher;

use crate::EQ_TOLERANCE;
use crate::pauli::PauliString;

/// A weighted sum of [`PauliString`]s with insertion-ordered terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QubitOperator {
    terms: IndexMap<PauliString, Complex64, FxBuildHasher>,
}

impl QubitOperator {
    /// The zero operator.
    pub fn new() -> Self {
        Self::default()
    }

    /// `coeff · I`.
    pub fn identity(coeff: impl Into<Complex64>) -> Self {
        Self::from_term(PauliString::identity(), coeff)
    }

    /// An operator with a single term.
    pub fn from_term(pauli: PauliString, coeff: impl Into<Complex64>) -> Self {
        let mut op = Self::new();
        op.add_term(pauli, coeff);
        op
    }

    /// Accumulate `coeff · pauli`; terms that cancel to `|c| <= EQ_TOLERANCE`
    /// are removed.
    pub fn add_term(&mut self, pauli: PauliString, coeff: impl Into<Complex64>) {
        let coeff = coeff.into();
        match self.terms.entry(pauli) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coeff;
                if entry.get().norm() <= EQ_TOLERANCE {
                    entry.shift_remove();
                }
            }
            Entry::Vacant(entry) => {
                if coeff.norm() > EQ_TOLERANCE {
                    entry.insert(coeff);
                }
            }
        }
    }

    /// Iterate over `(pauli, coefficient)` pairs in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = (&PauliString, &Complex64)> {
        self.terms.iter()
    }

    /// Coefficient of `pauli`, if present.
    pub fn coefficient(&self, pauli: &PauliString) -> Option<Complex64> {
        self.terms.get(pauli).copied()
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True for the zero operator.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Minimum register width (highest qubit + 1; 0 for identity-only).
    pub fn n_qubits(&self) -> u32 {
        self.terms
            .keys()
            .filter_map(PauliString::max_qubit)
            .max()
            .map_or(0, |q| q + 1)
    }

    /// Operator product `self · other`, expanded term by term.
    pub fn product(&self, other: &QubitOperator) -> QubitOperator {
        let mut out = QubitOperator::new();
        for (left, lc) in &self.terms {
            for (right, rc) in &other.terms {
                let (phase, pauli) = left.product(right);
                out.add_term(pauli, lc * rc * phase);
            }
        }
        out
    }

    /// Replace every coefficient `c` with the real number `Im(c)`.
    ///
    /// Terms are kept even when their imaginary part is zero; follow with
    /// [`QubitOperator::compress`] to drop them.
    pub fn imaginary_part(&self) -> QubitOperator {
        QubitOperator {
            terms: self
                .terms
                .iter()
                .map(|(p, c)| (p.clone(), Complex64::new(c.im, 0.0)))
                .collect(),
        }
    }

    /// Drop every term with `|c| <= tolerance`.
    pub fn compress(&mut self, tolerance: f64) {
        self.terms.retain(|_, c| c.norm() > tolerance);
    }

    /// Copy keeping only terms with `|c| >= threshold`.
    pub fn screen(&self, threshold: f64) -> QubitOperator {
        QubitOperator {
            terms: self
                .terms
                .iter()
                .filter(|(_, c)| c.norm() >= threshold)
                .map(|(p, c)| (p.clone(), *c))
                .collect(),
        }
    }
}

impl FromIterator<(PauliString, Complex64)> for QubitOperator {
    fn from_iter<T: IntoIterator<Item = (PauliString, Complex64)>>(iter: T) -> Self {
        let mut op = Self::new();
        for (pauli, coeff) in iter {
            op.add_term(pauli, coeff);
        }
        op
    }
}

impl Add for QubitOperator {
    type Output = QubitOperator;

    fn add(mut self, rhs: QubitOperator) -> QubitOperator {
        for (pauli, coeff) in rhs.terms {
            self.add_term(pauli, coeff);
        }
        self
    }
}

impl Mul for &QubitOperator {
    type Output = QubitOperator;

    fn mul(self, rhs: &QubitOperator) -> QubitOperator {
        self.product(rhs)
    }
}

impl Mul<Complex64> for QubitOperator {
    type Output = QubitOperator;

    fn mul(self, rhs: Complex64) -> QubitOperator {
        self.terms.into_iter().map(|(p, c)| (p, c * rhs)).collect()
    }
}

impl fmt::Display for QubitOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (idx, (pauli, coeff)) in self.terms.iter().enumerate() {
            if idx > 0 {
                f.write_str(" +\n")?;
            }
            write!(f, "{coeff} [{pauli}]")?;
        }
        Ok(())
    }
}
