//! Spin-adapted (singlet) UCCSD generators.
//!
//! Spatial orbital `i` owns spin orbitals `2i` (up) and `2i + 1` (down).
//! Occupied spatial orbitals are `0 .. n_occupied`, virtual ones follow.
//!
//! Amplitudes are packed as `[t1 | t2_1 | t2_2]`:
//!
//! - `t1`: one single excitation per (virtual, occupied) pair
//! - `t2_1`: one paired double per (virtual, occupied) pair
//! - `t2_2`: one mixed double per unordered pair of distinct pairs
//!
//! Pairs are enumerated virtual-major: `(v0, o0), (v0, o1), …, (v1, o0), …`.

use tracing::debug;

use crate::error::{FermionError, FermionResult};
use crate::fermion::{FermionOperator, FermionTerm, LadderOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spin {
    Up,
    Down,
}

impl Spin {
    const BOTH: [Spin; 2] = [Spin::Up, Spin::Down];

    fn flip(self) -> Self {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }

    fn orbital(self, spatial: u32) -> u32 {
        match self {
            Spin::Up => 2 * spatial,
            Spin::Down => 2 * spatial + 1,
        }
    }
}

/// Occupied / virtual spatial-orbital split for a singlet system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OrbitalSpace {
    n_occupied: u32,
    n_virtual: u32,
    n_single: usize,
    n_double: usize,
}

impl OrbitalSpace {
    fn new(n_qubits: u32, n_electrons: u32) -> FermionResult<Self> {
        if n_qubits % 2 != 0 {
            return Err(FermionError::InvalidChemistryParameters(format!(
                "number of spin orbitals must be even, got {n_qubits}"
            )));
        }
        if n_electrons % 2 != 0 {
            return Err(FermionError::InvalidChemistryParameters(format!(
                "number of electrons must be even, got {n_electrons}"
            )));
        }
        if n_electrons >= n_qubits {
            return Err(FermionError::InvalidChemistryParameters(format!(
                "{n_electrons} electrons leave no virtual orbitals among {n_qubits} spin orbitals"
            )));
        }

        let n_occupied = n_electrons / 2;
        let n_virtual = n_qubits / 2 - n_occupied;
        let counts = (n_occupied as usize)
            .checked_mul(n_virtual as usize)
            .and_then(|s| Some((s, s.checked_mul(s + 1)? / 2)))
            .filter(|&(s, d)| s.checked_add(d).is_some());
        let Some((n_single, n_double)) = counts else {
            return Err(FermionError::InvalidChemistryParameters(format!(
                "amplitude count of {n_electrons} electrons in {n_qubits} spin orbitals overflows"
            )));
        };

        Ok(Self {
            n_occupied,
            n_virtual,
            n_single,
            n_double,
        })
    }

    /// (virtual, occupied) spatial-orbital pairs in packing order.
    fn pairs(&self) -> Vec<(u32, u32)> {
        (0..self.n_virtual)
            .flat_map(|v| (0..self.n_occupied).map(move |o| (self.n_occupied + v, o)))
            .collect()
    }

    fn n_params(&self) -> usize {
        self.n_single + self.n_double
    }
}

/// Every unordered pair `(pairs[a], pairs[b])` with `a < b`, in order.
fn pair_combinations(pairs: &[(u32, u32)]) -> impl Iterator<Item = ((u32, u32), (u32, u32))> + '_ {
    pairs
        .iter()
        .enumerate()
        .flat_map(move |(a, &first)| pairs[a + 1..].iter().map(move |&second| (first, second)))
}

/// Number of packed singlet-UCCSD amplitudes for the given system.
///
/// `n_qubits` and `n_electrons` must both be even with
/// `n_electrons < n_qubits`. With `n_occ = n_electrons / 2` and
/// `n_virt = n_qubits / 2 − n_occ` there are `s = n_occ · n_virt` singles and
/// `s (s + 1) / 2` doubles.
pub fn singlet_paramsize(n_qubits: u32, n_electrons: u32) -> FermionResult<usize> {
    Ok(OrbitalSpace::new(n_qubits, n_electrons)?.n_params())
}

fn add_excitation(generator: &mut FermionOperator, ops: &[(u32, LadderOp)], amplitude: f64) {
    let term = FermionTerm::new(ops.iter().copied());
    let conjugate = term.hermitian_conjugate();
    generator.add_term(term, amplitude);
    generator.add_term(conjugate, -amplitude);
}

/// Build the anti-Hermitian singlet UCCSD generator `T − T†`.
///
/// `packed_amplitudes` must have length [`singlet_paramsize`]. Zero
/// amplitudes contribute no terms.
pub fn build_uccsd_generator(
    packed_amplitudes: &[f64],
    n_qubits: u32,
    n_electrons: u32,
) -> FermionResult<FermionOperator> {
    use LadderOp::{Annihilate, Create};

    let space = OrbitalSpace::new(n_qubits, n_electrons)?;
    let expected = space.n_params();
    if packed_amplitudes.len() != expected {
        return Err(FermionError::AmplitudeCount {
            expected,
            got: packed_amplitudes.len(),
        });
    }

    let pairs = space.pairs();
    let (t1, rest) = packed_amplitudes.split_at(space.n_single);
    let (t2_1, t2_2) = rest.split_at(space.n_single);

    let mut generator = FermionOperator::new();

    for (idx, &(virt, occ)) in pairs.iter().enumerate() {
        for spin in Spin::BOTH {
            let other = spin.flip();
            let (v_this, o_this) = (spin.orbital(virt), spin.orbital(occ));
            let (v_other, o_other) = (other.orbital(virt), other.orbital(occ));

            add_excitation(&mut generator, &[(v_this, Create), (o_this, Annihilate)], t1[idx]);
            add_excitation(
                &mut generator,
                &[
                    (v_this, Create),
                    (o_this, Annihilate),
                    (v_other, Create),
                    (o_other, Annihilate),
                ],
                t2_1[idx],
            );
        }
    }

    for (idx, ((virt_1, occ_1), (virt_2, occ_2))) in pair_combinations(&pairs).enumerate() {
        for spin_a in Spin::BOTH {
            for spin_b in Spin::BOTH {
                let (v1_a, o1_a) = (spin_a.orbital(virt_1), spin_a.orbital(occ_1));
                let (v2_b, o2_b) = (spin_b.orbital(virt_2), spin_b.orbital(occ_2));
                if v1_a == v2_b || o1_a == o2_b {
                    continue;
                }
                add_excitation(
                    &mut generator,
                    &[(v1_a, Create), (o1_a, Annihilate), (v2_b, Create), (o2_b, Annihilate)],
                    t2_2[idx],
                );
            }
        }
    }

    debug!(
        n_qubits,
        n_electrons,
        n_amplitudes = expected,
        n_terms = generator.len(),
        "Built singlet UCCSD generator"
    );
    Ok(generator)
}

/// Read packed amplitudes back out of an excitation operator.
///
/// This inverts the packing of [`build_uccsd_generator`]: each amplitude is
/// the real part of the coefficient of its representative spin-up term
/// (`v↑^ o↑` for singles, `v↑^ o↑ v↓^ o↓` for paired doubles and
/// `v1↑^ o1↑ v2↓^ o2↓` for mixed doubles). Missing terms read as zero.
pub fn singlet_packed_amplitudes(
    operator: &FermionOperator,
    n_qubits: u32,
    n_electrons: u32,
) -> FermionResult<Vec<f64>> {
    use LadderOp::{Annihilate, Create};

    let space = OrbitalSpace::new(n_qubits, n_electrons)?;
    let pairs = space.pairs();
    let amplitude = |ops: &[(u32, LadderOp)]| {
        operator
            .coefficient(&FermionTerm::new(ops.iter().copied()))
            .map_or(0.0, |c| c.re)
    };

    let mut singles = Vec::with_capacity(space.n_single);
    let mut doubles_1 = Vec::with_capacity(space.n_single);
    for &(virt, occ) in &pairs {
        let (v_up, o_up) = (Spin::Up.orbital(virt), Spin::Up.orbital(occ));
        let (v_down, o_down) = (Spin::Down.orbital(virt), Spin::Down.orbital(occ));
        singles.push(amplitude(&[(v_up, Create), (o_up, Annihilate)]));
        doubles_1.push(amplitude(&[
            (v_up, Create),
            (o_up, Annihilate),
            (v_down, Create),
            (o_down, Annihilate),
        ]));
    }

    let doubles_2 = pair_combinations(&pairs).map(|((virt_1, occ_1), (virt_2, occ_2))| {
        amplitude(&[
            (Spin::Up.orbital(virt_1), Create),
            (Spin::Up.orbital(occ_1), Annihilate),
            (Spin::Down.orbital(virt_2), Create),
            (Spin::Down.orbital(occ_2), Annihilate),
        ])
    });

    Ok(singles.into_iter().chain(doubles_1).chain(doubles_2).collect())
}
