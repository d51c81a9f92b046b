//! Bravyi-Kitaev encoding on a Fenwick tree.
//!
//! Qubit `j` stores the parity of a binary-indexed block of modes ending at
//! `j`. Three index sets describe how a ladder operator on mode `i` acts:
//!
//! - the **update set**: qubits whose stored parity includes mode `i`
//! - the **occupation set**: qubits whose parity gives the occupation of `i`
//! - the **parity set**: qubits whose parity gives that of all modes below `i`
//!
//! With these, `a†_i = ½ X_U Z_P − ½ i Y_i X_{U∖i} Z_{(P⊕O)∖i}` and `a_i`
//! flips the sign of the second term.

use std::collections::BTreeSet;

use num_complex::Complex64;

use crate::fermion::{FermionOperator, LadderOp};
use crate::pauli::{PauliOp, PauliString};
use crate::qubit_operator::QubitOperator;

/// Qubits whose stored parity must flip when mode `index` changes.
///
/// Always contains `index` itself when `index < n_qubits`.
pub fn update_set(index: u32, n_qubits: u32) -> BTreeSet<u32> {
    let mut indices = BTreeSet::new();
    let mut k = index + 1;
    while k <= n_qubits {
        indices.insert(k - 1);
        k += k & k.wrapping_neg();
    }
    indices
}

/// Qubits whose combined parity equals the occupation of mode `index`.
pub fn occupation_set(index: u32) -> BTreeSet<u32> {
    let mut indices = BTreeSet::new();
    let mut k = index + 1;
    indices.insert(k - 1);
    let parent = k & (k - 1);
    k -= 1;
    while k != parent {
        indices.insert(k - 1);
        k &= k - 1;
    }
    indices
}

/// Qubits whose combined parity equals that of all modes below `index`.
pub fn parity_set(index: u32) -> BTreeSet<u32> {
    let mut indices = BTreeSet::new();
    let mut k = index;
    while k > 0 {
        indices.insert(k - 1);
        k &= k - 1;
    }
    indices
}

/// Qubit image of a single ladder operator on an `n_qubits` register.
pub(crate) fn ladder_operator(index: u32, action: LadderOp, n_qubits: u32) -> QubitOperator {
    let update = update_set(index, n_qubits);
    let occupation = occupation_set(index);
    let parity = parity_set(index);

    let majorana_sum = PauliString::from_ops(
        update
            .iter()
            .map(|&q| (q, PauliOp::X))
            .chain(parity.iter().map(|&q| (q, PauliOp::Z))),
    );

    let remainder: BTreeSet<u32> = parity
        .symmetric_difference(&occupation)
        .copied()
        .filter(|&q| q != index)
        .collect();
    let majorana_diff = PauliString::from_ops(
        std::iter::once((index, PauliOp::Y))
            .chain(update.iter().filter(|&&q| q != index).map(|&q| (q, PauliOp::X)))
            .chain(remainder.iter().map(|&q| (q, PauliOp::Z))),
    );

    let diff_coeff = match action {
        LadderOp::Create => Complex64::new(0.0, -0.5),
        LadderOp::Annihilate => Complex64::new(0.0, 0.5),
    };

    let mut op = QubitOperator::from_term(majorana_sum, 0.5);
    op.add_term(majorana_diff, diff_coeff);
    op
}

/// Encode a whole operator on an `n_qubits` register.
///
/// Callers guarantee every mode is below `n_qubits`.
pub(crate) fn transform_operator(op: &FermionOperator, n_qubits: u32) -> QubitOperator {
    super::transform_with(op, |index, action| {
        ladder_operator(index, action, n_qubits)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u32]) -> BTreeSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_index_sets_on_eight_modes() {
        assert_eq!(update_set(0, 8), set(&[0, 1, 3, 7]));
        assert_eq!(update_set(2, 8), set(&[2, 3, 7]));
        assert_eq!(update_set(7, 8), set(&[7]));
        assert_eq!(update_set(4, 6), set(&[4, 5]));

        assert_eq!(occupation_set(0), set(&[0]));
        assert_eq!(occupation_set(3), set(&[1, 2, 3]));
        assert_eq!(occupation_set(7), set(&[3, 5, 6, 7]));

        assert_eq!(parity_set(0), set(&[]));
        assert_eq!(parity_set(3), set(&[1, 2]));
        assert_eq!(parity_set(6), set(&[3, 5]));
    }

    #[test]
    fn test_creation_on_mode_one_of_two() {
        // a†_1 = ½ X1 Z0 − ½ i Y1
        let op = ladder_operator(1, LadderOp::Create, 2);
        assert_eq!(op.len(), 2);
        assert_eq!(
            op.coefficient(&"Z0 X1".parse().unwrap()),
            Some(Complex64::new(0.5, 0.0))
        );
        assert_eq!(
            op.coefficient(&"Y1".parse().unwrap()),
            Some(Complex64::new(0.0, -0.5))
        );
    }

    #[test]
    fn test_annihilation_on_mode_two_of_four() {
        // a_2 = ½ (X2 X3 Z1 + i Y2 X3 Z1)
        let op = ladder_operator(2, LadderOp::Annihilate, 4);
        assert_eq!(
            op.coefficient(&"Z1 X2 X3".parse().unwrap()),
            Some(Complex64::new(0.5, 0.0))
        );
        assert_eq!(
            op.coefficient(&"Z1 Y2 X3".parse().unwrap()),
            Some(Complex64::new(0.0, 0.5))
        );
    }
}
