//! Jordan-Wigner encoding.
//!
//!   a†_p = ½ (X_p − i Y_p) Z_0 … Z_{p−1}
//!   a_p  = ½ (X_p + i Y_p) Z_0 … Z_{p−1}
//!
//! Mode `p` maps to qubit `p`; the Z string carries the parity of every
//! lower mode.

use num_complex::Complex64;

use crate::fermion::{FermionOperator, LadderOp};
use crate::pauli::{PauliOp, PauliString};
use crate::qubit_operator::QubitOperator;

/// Qubit image of a single ladder operator.
pub(crate) fn ladder_operator(mode: u32, action: LadderOp) -> QubitOperator {
    let z_string = (0..mode).map(|q| (q, PauliOp::Z));
    let x_term = PauliString::from_ops(z_string.clone().chain([(mode, PauliOp::X)]));
    let y_term = PauliString::from_ops(z_string.chain([(mode, PauliOp::Y)]));
    let y_coeff = match action {
        LadderOp::Create => Complex64::new(0.0, -0.5),
        LadderOp::Annihilate => Complex64::new(0.0, 0.5),
    };

    let mut op = QubitOperator::from_term(x_term, 0.5);
    op.add_term(y_term, y_coeff);
    op
}

/// Encode a whole operator.
pub(crate) fn transform_operator(op: &FermionOperator) -> QubitOperator {
    super::transform_with(op, ladder_operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_on_mode_two() {
        let op = ladder_operator(2, LadderOp::Create);
        assert_eq!(
            op.coefficient(&"Z0 Z1 X2".parse().unwrap()),
            Some(Complex64::new(0.5, 0.0))
        );
        assert_eq!(
            op.coefficient(&"Z0 Z1 Y2".parse().unwrap()),
            Some(Complex64::new(0.0, -0.5))
        );
    }

    #[test]
    fn test_number_operator() {
        // a†_1 a_1 = ½ (I − Z_1)
        let number = ladder_operator(1, LadderOp::Create)
            .product(&ladder_operator(1, LadderOp::Annihilate));
        assert_eq!(number.len(), 2);
        assert_eq!(
            number.coefficient(&PauliString::identity()),
            Some(Complex64::new(0.5, 0.0))
        );
        assert_eq!(
            number.coefficient(&"Z1".parse().unwrap()),
            Some(Complex64::new(-0.5, 0.0))
        );
    }
}
