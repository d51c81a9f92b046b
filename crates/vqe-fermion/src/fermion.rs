//! Fermion operators: weighted sums of products of ladder operators.
//!
//! Terms use the textual form `"4^ 0 5^ 1"`: a mode index followed by `^`
//! is a creation operator, a bare index an annihilation operator. The
//! ladder operators are applied right to left, as in the product they write.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use indexmap::IndexMap;
use indexmap::map::Entry;
use num_complex::Complex64;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

use crate::EQ_TOLERANCE;
use crate::error::FermionError;

/// Creation or annihilation of one fermionic mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LadderOp {
    /// `a†_p`, written `p^`.
    Create,
    /// `a_p`, written `p`.
    Annihilate,
}

impl LadderOp {
    /// The adjoint action.
    pub fn dagger(self) -> Self {
        match self {
            LadderOp::Create => LadderOp::Annihilate,
            LadderOp::Annihilate => LadderOp::Create,
        }
    }
}

/// An ordered product of ladder operators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FermionTerm(Vec<(u32, LadderOp)>);

impl FermionTerm {
    /// Build a term from `(mode, action)` pairs in written order.
    pub fn new(ops: impl IntoIterator<Item = (u32, LadderOp)>) -> Self {
        Self(ops.into_iter().collect())
    }

    /// The empty product (identity).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Ladder operators in written order.
    pub fn ops(&self) -> &[(u32, LadderOp)] {
        &self.0
    }

    /// Number of ladder operators.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the identity term.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest mode referenced.
    pub fn max_mode(&self) -> Option<u32> {
        self.0.iter().map(|(mode, _)| *mode).max()
    }

    /// Adjoint of the product: reversed order with every action flipped.
    pub fn hermitian_conjugate(&self) -> Self {
        Self(
            self.0
                .iter()
                .rev()
                .map(|(mode, action)| (*mode, action.dagger()))
                .collect(),
        )
    }
}

impl fmt::Display for FermionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (mode, action)) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            match action {
                LadderOp::Create => write!(f, "{mode}^")?,
                LadderOp::Annihilate => write!(f, "{mode}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for FermionTerm {
    type Err = FermionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(|token| {
                let (digits, action) = match token.strip_suffix('^') {
                    Some(digits) => (digits, LadderOp::Create),
                    None => (token, LadderOp::Annihilate),
                };
                digits
                    .parse::<u32>()
                    .map(|mode| (mode, action))
                    .map_err(|_| FermionError::InvalidTerm(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FermionTerm)
    }
}

/// A weighted sum of [`FermionTerm`]s.
///
/// Terms keep their insertion order, which makes every derived qubit
/// operator and circuit reproducible. Adding a term whose accumulated
/// coefficient falls to `|c| <= EQ_TOLERANCE` removes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FermionOperator {
    terms: IndexMap<FermionTerm, Complex64, FxBuildHasher>,
}

impl FermionOperator {
    /// The zero operator.
    pub fn new() -> Self {
        Self::default()
    }

    /// An operator with a single term.
    pub fn from_term(term: FermionTerm, coeff: impl Into<Complex64>) -> Self {
        let mut op = Self::new();
        op.add_term(term, coeff);
        op
    }

    /// Accumulate `coeff · term` into the operator.
    pub fn add_term(&mut self, term: FermionTerm, coeff: impl Into<Complex64>) {
        let coeff = coeff.into();
        match self.terms.entry(term) {
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

    /// Iterate over `(term, coefficient)` pairs in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = (&FermionTerm, &Complex64)> {
        self.terms.iter()
    }

    /// Coefficient of `term`, if present.
    pub fn coefficient(&self, term: &FermionTerm) -> Option<Complex64> {
        self.terms.get(term).copied()
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True for the zero operator.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of modes the operator touches (highest mode + 1).
    pub fn n_modes(&self) -> u32 {
        self.terms
            .keys()
            .filter_map(FermionTerm::max_mode)
            .max()
            .map_or(0, |m| m + 1)
    }

    /// Adjoint operator.
    pub fn hermitian_conjugate(&self) -> Self {
        let mut out = Self::new();
        for (term, coeff) in &self.terms {
            out.add_term(term.hermitian_conjugate(), coeff.conj());
        }
        out
    }

    /// Drop every term with `|c| <= tolerance`.
    pub fn compress(&mut self, tolerance: f64) {
        self.terms.retain(|_, c| c.norm() > tolerance);
    }

    /// Copy keeping only terms with `|c| >= threshold`.
    pub fn screen(&self, threshold: f64) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .filter(|(_, c)| c.norm() >= threshold)
                .map(|(t, c)| (t.clone(), *c))
                .collect(),
        }
    }
}

impl FromIterator<(FermionTerm, Complex64)> for FermionOperator {
    fn from_iter<T: IntoIterator<Item = (FermionTerm, Complex64)>>(iter: T) -> Self {
        let mut op = Self::new();
        for (term, coeff) in iter {
            op.add_term(term, coeff);
        }
        op
    }
}

impl Add for FermionOperator {
    type Output = FermionOperator;

    fn add(mut self, rhs: FermionOperator) -> FermionOperator {
        for (term, coeff) in rhs.terms {
            self.add_term(term, coeff);
        }
        self
    }
}

impl Sub for FermionOperator {
    type Output = FermionOperator;

    fn sub(mut self, rhs: FermionOperator) -> FermionOperator {
        for (term, coeff) in rhs.terms {
            self.add_term(term, -coeff);
        }
        self
    }
}

impl Mul<Complex64> for FermionOperator {
    type Output = FermionOperator;

    fn mul(self, rhs: Complex64) -> FermionOperator {
        self.terms.into_iter().map(|(t, c)| (t, c * rhs)).collect()
    }
}

impl Mul<f64> for FermionOperator {
    type Output = FermionOperator;

    fn mul(self, rhs: f64) -> FermionOperator {
        self * Complex64::new(rhs, 0.0)
    }
}

impl fmt::Display for FermionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (idx, (term, coeff)) in self.terms.iter().enumerate() {
            if idx > 0 {
                f.write_str(" +\n")?;
            }
            write!(f, "{coeff} [{term}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(s: &str) -> FermionTerm {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display_term() {
        let t = term("4^ 0 5^ 1");
        assert_eq!(
            t.ops(),
            &[
                (4, LadderOp::Create),
                (0, LadderOp::Annihilate),
                (5, LadderOp::Create),
                (1, LadderOp::Annihilate),
            ]
        );
        assert_eq!(t.to_string(), "4^ 0 5^ 1");
        assert_eq!(t.max_mode(), Some(5));
        assert!(term("").is_empty());
        assert!("3^^ 1".parse::<FermionTerm>().is_err());
        assert!("a 1".parse::<FermionTerm>().is_err());
    }

    #[test]
    fn test_hermitian_conjugate_term() {
        assert_eq!(term("2^ 0").hermitian_conjugate(), term("0^ 2"));
        assert_eq!(term("4^ 0 5^ 1").hermitian_conjugate(), term("1^ 5 0^ 4"));
    }

    #[test]
    fn test_add_term_accumulates_and_cancels() {
        let mut op = FermionOperator::new();
        op.add_term(term("2^ 0"), 0.5);
        op.add_term(term("0^ 2"), -0.5);
        op.add_term(term("2^ 0"), 0.25);
        assert_eq!(op.len(), 2);
        assert_eq!(op.coefficient(&term("2^ 0")), Some(Complex64::new(0.75, 0.0)));

        op.add_term(term("2^ 0"), -0.75);
        assert_eq!(op.len(), 1);
        assert_eq!(op.coefficient(&term("2^ 0")), None);
    }

    #[test]
    fn test_cancellation_preserves_order() {
        let mut op = FermionOperator::new();
        op.add_term(term("1^ 0"), 1.0);
        op.add_term(term("2^ 0"), 2.0);
        op.add_term(term("3^ 0"), 3.0);
        op.add_term(term("2^ 0"), -2.0);
        let remaining: Vec<String> = op.terms().map(|(t, _)| t.to_string()).collect();
        assert_eq!(remaining, vec!["1^ 0", "3^ 0"]);
    }

    #[test]
    fn test_tiny_coefficients_are_never_stored() {
        let op = FermionOperator::from_term(term("1^ 0"), 1e-9);
        assert!(op.is_empty());
    }

    #[test]
    fn test_screen_and_compress() {
        let mut op = FermionOperator::new();
        op.add_term(term("1^ 0"), 0.5);
        op.add_term(term("2^ 0"), 0.01);
        op.add_term(term("3^ 0"), -0.02);

        assert_eq!(op.screen(0.0).len(), 3);
        assert_eq!(op.screen(0.02).len(), 2);
        assert_eq!(op.screen(1.0).len(), 0);

        op.compress(0.015);
        assert_eq!(op.len(), 2);
        assert_eq!(op.n_modes(), 4);
    }

    #[test]
    fn test_operator_arithmetic() {
        let a = FermionOperator::from_term(term("1^ 0"), 1.0);
        let b = FermionOperator::from_term(term("0^ 1"), 1.0);
        let generator = (a.clone() - b.clone()) * 0.5;
        assert_eq!(generator.len(), 2);
        assert_eq!(
            generator.coefficient(&term("0^ 1")),
            Some(Complex64::new(-0.5, 0.0))
        );
        assert!((a.clone() - a).is_empty());
        assert_eq!(b.hermitian_conjugate().coefficient(&term("1^ 0")), Some(Complex64::new(1.0, 0.0)));
    }
}
