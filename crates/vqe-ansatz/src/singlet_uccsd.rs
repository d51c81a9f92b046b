//! Singlet UCCSD ansatz.
//!
//! The circuit is a Hartree-Fock reference prefix followed by the
//! exponentiated singlet UCCSD generator:
//!
//! 1. build `G = T − T†` from the packed amplitudes
//! 2. encode `G` on qubits (Jordan-Wigner or Bravyi-Kitaev)
//! 3. replace every coefficient by its imaginary part and drop zeros
//! 4. optionally drop terms below the screening threshold
//! 5. emit `∏_k exp(-i θ_k P_k)` term by term
//!
//! Because step 3 keeps `Im(c)` of an anti-Hermitian generator, the emitted
//! unitary is `exp(−G)` rather than `exp(G)`; the sign is absorbed into the
//! amplitudes by any optimiser driving the ansatz.

use tracing::{debug, warn};
use vqe_fermion::{
    EQ_TOLERANCE, FermionOperator, FermionTerm, Transformation, build_uccsd_generator,
    singlet_packed_amplitudes, singlet_paramsize,
};
use vqe_ir::Circuit;

use crate::ansatz::{Ansatz, check_param_count};
use crate::error::{AnsatzError, AnsatzResult};
use crate::reference::hartree_fock_prefix;
use crate::synthesis::exponentiate;

/// Spin-adapted UCCSD ansatz with a Hartree-Fock reference.
///
/// Only one layer is supported and the circuit has no symbolic form, so
/// [`Ansatz::parametrized_circuit`] always fails with
/// [`AnsatzError::NotSupported`].
#[derive(Debug, Clone)]
pub struct SingletUccsdAnsatz {
    number_of_layers: u32,
    number_of_spatial_orbitals: u32,
    number_of_alpha_electrons: u32,
    transformation: Transformation,
    number_of_params: usize,
    screening_threshold: f64,
    initial_guess: Option<Vec<f64>>,
    parametrized_circuit: Option<Circuit>,
}

impl SingletUccsdAnsatz {
    /// Create an ansatz; the beta electron count equals the alpha count.
    pub fn new(
        number_of_layers: u32,
        number_of_spatial_orbitals: u32,
        number_of_alpha_electrons: u32,
        transformation: Transformation,
    ) -> AnsatzResult<Self> {
        validate_layers(number_of_layers)?;
        let number_of_params = validate_orbitals(number_of_spatial_orbitals, number_of_alpha_electrons)?;
        Ok(Self {
            number_of_layers,
            number_of_spatial_orbitals,
            number_of_alpha_electrons,
            transformation,
            number_of_params,
            screening_threshold: 0.0,
            initial_guess: None,
            parametrized_circuit: None,
        })
    }

    /// Attach a screening threshold at construction time.
    pub fn with_screening_threshold(mut self, threshold: f64) -> AnsatzResult<Self> {
        self.set_screening_threshold(threshold)?;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of spatial orbitals.
    pub fn number_of_spatial_orbitals(&self) -> u32 {
        self.number_of_spatial_orbitals
    }

    /// Number of spin-up electrons.
    pub fn number_of_alpha_electrons(&self) -> u32 {
        self.number_of_alpha_electrons
    }

    /// Number of spin-down electrons (always equal to the alpha count).
    pub fn number_of_beta_electrons(&self) -> u32 {
        self.number_of_alpha_electrons
    }

    /// Total number of electrons.
    pub fn number_of_electrons(&self) -> u32 {
        self.number_of_alpha_electrons + self.number_of_beta_electrons()
    }

    /// Fermion-to-qubit encoding.
    pub fn transformation(&self) -> Transformation {
        self.transformation
    }

    /// Generator terms with `|c|` below this are dropped (0 disables screening).
    pub fn screening_threshold(&self) -> f64 {
        self.screening_threshold
    }

    /// Packed amplitudes from the last [`Self::set_initial_guess_from_amplitudes`].
    pub fn initial_guess(&self) -> Option<&[f64]> {
        self.initial_guess.as_deref()
    }

    // =========================================================================
    // Validating setters
    // =========================================================================

    /// Change the number of spatial orbitals.
    pub fn set_number_of_spatial_orbitals(&mut self, number_of_spatial_orbitals: u32) -> AnsatzResult<()> {
        self.number_of_params = validate_orbitals(number_of_spatial_orbitals, self.number_of_alpha_electrons)?;
        self.number_of_spatial_orbitals = number_of_spatial_orbitals;
        self.invalidate_parametrized_circuit();
        Ok(())
    }

    /// Change the number of alpha (and therefore beta) electrons.
    pub fn set_number_of_alpha_electrons(&mut self, number_of_alpha_electrons: u32) -> AnsatzResult<()> {
        self.number_of_params = validate_orbitals(self.number_of_spatial_orbitals, number_of_alpha_electrons)?;
        self.number_of_alpha_electrons = number_of_alpha_electrons;
        self.invalidate_parametrized_circuit();
        Ok(())
    }

    /// Change the fermion-to-qubit encoding.
    pub fn set_transformation(&mut self, transformation: Transformation) {
        self.transformation = transformation;
        self.invalidate_parametrized_circuit();
    }

    /// Change the screening threshold.
    pub fn set_screening_threshold(&mut self, threshold: f64) -> AnsatzResult<()> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(AnsatzError::InvalidThreshold(threshold));
        }
        self.screening_threshold = threshold;
        self.invalidate_parametrized_circuit();
        Ok(())
    }

    // =========================================================================
    // Amplitude screening and initial guesses
    // =========================================================================

    /// Keep the terms of `operator` whose real coefficient satisfies
    /// `|c| >= threshold`, skipping one-body terms when `ignore_singles` is set.
    ///
    /// Returns the kept coefficients (in operator order) and the screened
    /// operator.
    pub fn screen_out_operator_terms_below_threshold(
        threshold: f64,
        operator: &FermionOperator,
        ignore_singles: bool,
    ) -> (Vec<f64>, FermionOperator) {
        let mut amplitudes = Vec::new();
        let mut screened = FermionOperator::new();
        for (term, coeff) in operator.terms() {
            if ignore_singles && is_single_excitation(term) {
                continue;
            }
            let amplitude = coeff.re;
            if amplitude.abs() >= threshold {
                amplitudes.push(amplitude);
                screened.add_term(term.clone(), amplitude);
            }
        }
        debug!(
            threshold,
            n_terms = operator.len(),
            n_kept = screened.len(),
            "screened amplitude operator"
        );
        (amplitudes, screened)
    }

    /// Pack an excitation-amplitude operator (e.g. MP2 or CCSD amplitudes)
    /// into an initial parameter vector, after screening it with the current
    /// threshold.
    pub fn set_initial_guess_from_amplitudes(&mut self, amplitudes: &FermionOperator) -> AnsatzResult<&[f64]> {
        let (_, screened) =
            Self::screen_out_operator_terms_below_threshold(self.screening_threshold, amplitudes, false);
        let guess = singlet_packed_amplitudes(&screened, self.number_of_qubits(), self.number_of_electrons())?;
        Ok(self.initial_guess.insert(guess).as_slice())
    }

    /// Set the initial guess from `amplitudes` and build the matching circuit.
    pub fn generate_circuit_from_amplitudes(&mut self, amplitudes: &FermionOperator) -> AnsatzResult<Circuit> {
        let guess = self.set_initial_guess_from_amplitudes(amplitudes)?.to_vec();
        self.generate_circuit(Some(&guess))
    }
}

impl Ansatz for SingletUccsdAnsatz {
    fn name(&self) -> &'static str {
        "SingletUCCSDAnsatz"
    }

    fn number_of_layers(&self) -> u32 {
        self.number_of_layers
    }

    fn set_number_of_layers(&mut self, number_of_layers: u32) -> AnsatzResult<()> {
        validate_layers(number_of_layers)?;
        self.number_of_layers = number_of_layers;
        self.invalidate_parametrized_circuit();
        Ok(())
    }

    fn number_of_qubits(&self) -> u32 {
        2 * self.number_of_spatial_orbitals
    }

    fn number_of_params(&self) -> usize {
        self.number_of_params
    }

    fn supports_parametrized_circuits(&self) -> bool {
        false
    }

    fn generate_circuit(&self, params: Option<&[f64]>) -> AnsatzResult<Circuit> {
        let Some(params) = params else {
            return Err(AnsatzError::NotSupported {
                ansatz: self.name(),
                operation: "parametrized circuits",
            });
        };
        check_param_count(self.number_of_params(), params)?;

        let n_qubits = self.number_of_qubits();
        let mut circuit = hartree_fock_prefix(
            n_qubits,
            self.number_of_alpha_electrons,
            self.number_of_beta_electrons(),
            self.transformation,
        )?;

        let generator = build_uccsd_generator(params, n_qubits, self.number_of_electrons())?;
        let mut qubit_generator = self
            .transformation
            .apply(&generator, n_qubits)?
            .imaginary_part();
        qubit_generator.compress(EQ_TOLERANCE);

        if self.screening_threshold > 0.0 {
            let screened = qubit_generator.screen(self.screening_threshold);
            if screened.is_empty() && !qubit_generator.is_empty() {
                warn!(
                    threshold = self.screening_threshold,
                    n_terms = qubit_generator.len(),
                    "screening removed every generator term"
                );
            }
            qubit_generator = screened;
        }

        debug!(
            n_qubits,
            n_electrons = self.number_of_electrons(),
            transformation = %self.transformation,
            n_fermion_terms = generator.len(),
            n_qubit_terms = qubit_generator.len(),
            "generating singlet UCCSD circuit"
        );

        circuit.compose(&exponentiate(&qubit_generator, n_qubits)?)?;
        circuit.set_name("singlet_uccsd");
        Ok(circuit)
    }

    fn circuit_cache(&mut self) -> &mut Option<Circuit> {
        &mut self.parametrized_circuit
    }
}

fn validate_layers(number_of_layers: u32) -> AnsatzResult<()> {
    if number_of_layers != 1 {
        return Err(AnsatzError::InvalidLayerCount {
            got: number_of_layers,
            reason: "singlet UCCSD supports exactly one layer",
        });
    }
    Ok(())
}

/// Check the orbital and electron counts and return the packed parameter count.
fn validate_orbitals(number_of_spatial_orbitals: u32, number_of_alpha_electrons: u32) -> AnsatzResult<usize> {
    if number_of_spatial_orbitals < 2 {
        return Err(AnsatzError::InvalidChemistryParameters(format!(
            "number of spatial orbitals must be at least 2, got {number_of_spatial_orbitals}"
        )));
    }
    if number_of_spatial_orbitals <= number_of_alpha_electrons {
        return Err(AnsatzError::InvalidChemistryParameters(format!(
            "number of spatial orbitals ({number_of_spatial_orbitals}) must exceed the number of alpha electrons ({number_of_alpha_electrons})"
        )));
    }
    let Some(n_qubits) = number_of_spatial_orbitals.checked_mul(2) else {
        return Err(AnsatzError::InvalidChemistryParameters(format!(
            "{number_of_spatial_orbitals} spatial orbitals exceed the addressable qubit range"
        )));
    };
    Ok(singlet_paramsize(n_qubits, 2 * number_of_alpha_electrons)?)
}

fn is_single_excitation(term: &FermionTerm) -> bool {
    term.len() == 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ansatz() -> SingletUccsdAnsatz {
        SingletUccsdAnsatz::new(1, 3, 1, Transformation::JordanWigner).unwrap()
    }

    #[test]
    fn test_derived_counts() {
        let a = ansatz();
        assert_eq!(a.number_of_qubits(), 6);
        assert_eq!(a.number_of_beta_electrons(), 1);
        assert_eq!(a.number_of_electrons(), 2);
        assert_eq!(a.number_of_params(), 5);
        assert_eq!(a.number_of_layers(), 1);
        assert!(!a.supports_parametrized_circuits());
    }

    #[test]
    fn test_layers_fixed_at_one() {
        assert!(matches!(
            SingletUccsdAnsatz::new(0, 3, 1, Transformation::JordanWigner),
            Err(AnsatzError::InvalidLayerCount { got: 0, .. })
        ));
        let mut a = ansatz();
        assert!(a.set_number_of_layers(100).is_err());
        assert_eq!(a.number_of_layers(), 1);
        assert!(a.set_number_of_layers(1).is_ok());
    }

    #[test]
    fn test_orbital_validation() {
        assert!(SingletUccsdAnsatz::new(1, 0, 1, Transformation::JordanWigner).is_err());
        assert!(SingletUccsdAnsatz::new(1, 1, 0, Transformation::JordanWigner).is_err());
        assert!(SingletUccsdAnsatz::new(1, 2, 2, Transformation::JordanWigner).is_err());
        assert!(SingletUccsdAnsatz::new(1, 2, 1, Transformation::JordanWigner).is_ok());
    }

    #[test]
    fn test_rejected_setter_keeps_state() {
        let mut a = ansatz();
        assert!(a.set_number_of_alpha_electrons(3).is_err());
        assert_eq!(a.number_of_alpha_electrons(), 1);

        a.set_number_of_spatial_orbitals(4).unwrap();
        a.set_number_of_alpha_electrons(3).unwrap();
        assert!(a.set_number_of_spatial_orbitals(3).is_err());
        assert_eq!(a.number_of_spatial_orbitals(), 4);
        assert!(a.set_number_of_spatial_orbitals(1).is_err());
        assert_eq!(a.number_of_qubits(), 8);
        assert_eq!(a.number_of_params(), 9);
    }

    #[test]
    fn test_oversized_systems_rejected() {
        let a = SingletUccsdAnsatz::new(1, 20_000, 10_000, Transformation::JordanWigner).unwrap();
        let singles = 100_000_000usize;
        assert_eq!(a.number_of_params(), singles + singles * (singles + 1) / 2);

        assert!(matches!(
            SingletUccsdAnsatz::new(1, 200_000, 100_000, Transformation::JordanWigner),
            Err(AnsatzError::Fermion(_))
        ));
        assert!(matches!(
            SingletUccsdAnsatz::new(1, u32::MAX / 2 + 1, 1, Transformation::JordanWigner),
            Err(AnsatzError::InvalidChemistryParameters(_))
        ));

        let mut b = ansatz();
        assert!(b.set_number_of_spatial_orbitals(u32::MAX / 2 + 1).is_err());
        assert_eq!(b.number_of_spatial_orbitals(), 3);
        assert_eq!(b.number_of_params(), 5);
    }

    #[test]
    fn test_threshold_validation() {
        let mut a = ansatz();
        assert!(matches!(
            a.set_screening_threshold(-0.1),
            Err(AnsatzError::InvalidThreshold(_))
        ));
        assert!(a.set_screening_threshold(f64::NAN).is_err());
        assert_eq!(a.screening_threshold(), 0.0);
        a.set_screening_threshold(0.01).unwrap();
        assert_eq!(a.screening_threshold(), 0.01);
    }

    #[test]
    fn test_parametrized_circuit_not_supported() {
        let mut a = ansatz();
        assert!(matches!(
            a.generate_circuit(None),
            Err(AnsatzError::NotSupported { .. })
        ));
        assert!(matches!(
            a.parametrized_circuit(),
            Err(AnsatzError::NotSupported { .. })
        ));
    }

    #[test]
    fn test_parameter_count_checked() {
        let a = ansatz();
        assert!(matches!(
            a.generate_circuit(Some(&[0.1, 0.2])),
            Err(AnsatzError::ParameterCount { expected: 5, got: 2 })
        ));
    }

    #[test]
    fn test_zero_amplitudes_leave_reference_only() {
        let a = ansatz();
        let circuit = a.generate_circuit(Some(&[0.0; 5])).unwrap();
        assert_eq!(circuit.num_ops(), 2);
        assert_eq!(circuit.num_qubits(), 6);
        assert!(circuit.instructions().iter().all(|i| i.name() == "x"));
    }

    #[test]
    fn test_single_is_ignored_when_requested() {
        let mut op = FermionOperator::new();
        op.add_term("2^ 0".parse().unwrap(), 0.5);
        op.add_term("2^ 0 3^ 1".parse().unwrap(), 0.5);
        let (_, kept) = SingletUccsdAnsatz::screen_out_operator_terms_below_threshold(0.0, &op, true);
        assert_eq!(kept.len(), 1);
        let (amplitudes, kept) =
            SingletUccsdAnsatz::screen_out_operator_terms_below_threshold(0.0, &op, false);
        assert_eq!(kept.len(), 2);
        assert_eq!(amplitudes, vec![0.5, 0.5]);
    }
}
