//! Fermion-to-qubit encodings.

pub mod bravyi_kitaev;
pub mod jordan_wigner;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FermionError, FermionResult};
use crate::fermion::{FermionOperator, LadderOp};
use crate::qubit_operator::QubitOperator;

/// Supported fermion-to-qubit encodings.
///
/// Serialises to the canonical name; deserialising accepts every spelling
/// [`FromStr`] does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Transformation {
    /// Jordan-Wigner: mode `p` on qubit `p` with a Z parity string.
    #[default]
    #[serde(rename = "Jordan-Wigner")]
    JordanWigner,
    /// Bravyi-Kitaev: Fenwick-tree parity encoding.
    #[serde(rename = "Bravyi-Kitaev")]
    BravyiKitaev,
}

impl Transformation {
    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Transformation::JordanWigner => "Jordan-Wigner",
            Transformation::BravyiKitaev => "Bravyi-Kitaev",
        }
    }

    /// Encode `op` on a register of `n_modes` qubits.
    pub fn apply(self, op: &FermionOperator, n_modes: u32) -> FermionResult<QubitOperator> {
        let needed = op.n_modes();
        if needed > n_modes {
            return Err(FermionError::ModeOutOfRange {
                mode: needed - 1,
                n_modes,
            });
        }
        Ok(self.encode(op, n_modes))
    }

    fn encode(self, op: &FermionOperator, n_modes: u32) -> QubitOperator {
        debug!(
            transformation = self.name(),
            n_terms = op.len(),
            n_modes,
            "Encoding fermion operator"
        );
        match self {
            Transformation::JordanWigner => jordan_wigner::transform_operator(op),
            Transformation::BravyiKitaev => bravyi_kitaev::transform_operator(op, n_modes),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transformation {
    type Err = FermionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jordan-wigner" | "jordan_wigner" | "jordanwigner" | "jw" => {
                Ok(Transformation::JordanWigner)
            }
            "bravyi-kitaev" | "bravyi_kitaev" | "bravyikitaev" | "bk" => {
                Ok(Transformation::BravyiKitaev)
            }
            _ => Err(FermionError::UnsupportedTransformation(s.to_string())),
        }
    }
}

impl TryFrom<String> for Transformation {
    type Error = FermionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Encode `op` with the register width inferred from its highest mode.
pub fn transform(op: &FermionOperator, encoding: Transformation) -> QubitOperator {
    encoding.encode(op, op.n_modes())
}

/// Expand each term as the product of its ladder-operator images.
fn transform_with<F>(op: &FermionOperator, ladder: F) -> QubitOperator
where
    F: Fn(u32, LadderOp) -> QubitOperator,
{
    let mut out = QubitOperator::new();
    for (term, coeff) in op.terms() {
        let mut image = QubitOperator::identity(*coeff);
        for &(mode, action) in term.ops() {
            image = image.product(&ladder(mode, action));
        }
        for (pauli, c) in image.terms() {
            out.add_term(pauli.clone(), *c);
        }
    }
    out
}
