//! The common ansatz interface.

use rand::Rng;
use vqe_ir::Circuit;

use crate::error::{AnsatzError, AnsatzResult};

/// A parametrised circuit family.
///
/// Implementors own their structural parameters (layers, qubits, …) and a
/// cache slot for the symbolic circuit. Every structural setter must clear
/// that slot after it validates and commits the new state.
pub trait Ansatz {
    /// Human-readable ansatz name.
    fn name(&self) -> &'static str;

    /// Number of repeated layers.
    fn number_of_layers(&self) -> u32;

    /// Change the number of layers.
    fn set_number_of_layers(&mut self, number_of_layers: u32) -> AnsatzResult<()>;

    /// Register width of generated circuits.
    fn number_of_qubits(&self) -> u32;

    /// Length of the parameter vector [`Ansatz::generate_circuit`] expects.
    fn number_of_params(&self) -> usize;

    /// Whether [`Ansatz::generate_circuit`] accepts `None`.
    fn supports_parametrized_circuits(&self) -> bool;

    /// Symbol names in parameter order.
    fn symbols(&self) -> Vec<String> {
        (0..self.number_of_params())
            .map(|i| format!("theta_{i}"))
            .collect()
    }

    /// Build the circuit for `params`, or the symbolic circuit for `None`.
    fn generate_circuit(&self, params: Option<&[f64]>) -> AnsatzResult<Circuit>;

    /// Cache slot backing [`Ansatz::parametrized_circuit`].
    fn circuit_cache(&mut self) -> &mut Option<Circuit>;

    /// The symbolic circuit, generated on first use and cached.
    fn parametrized_circuit(&mut self) -> AnsatzResult<&Circuit> {
        if !self.supports_parametrized_circuits() {
            return Err(AnsatzError::NotSupported {
                ansatz: self.name(),
                operation: "parametrized circuits",
            });
        }
        let circuit = match self.circuit_cache().take() {
            Some(cached) => cached,
            None => self.generate_circuit(None)?,
        };
        let circuit: &Circuit = self.circuit_cache().insert(circuit);
        Ok(circuit)
    }

    /// Drop the cached symbolic circuit.
    fn invalidate_parametrized_circuit(&mut self) {
        *self.circuit_cache() = None;
    }
}

/// Check a parameter vector against the ansatz size.
pub(crate) fn check_param_count(expected: usize, params: &[f64]) -> AnsatzResult<()> {
    if params.len() != expected {
        return Err(AnsatzError::ParameterCount {
            expected,
            got: params.len(),
        });
    }
    Ok(())
}

/// Draw `n` parameters uniformly from `[min, max)`.
///
/// Returns all-`min` values when the range is empty.
///
/// ```rust
/// use rand::SeedableRng;
/// use vqe_ansatz::random_parameters;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let params = random_parameters(5, -0.1, 0.1, &mut rng);
/// assert_eq!(params.len(), 5);
/// assert!(params.iter().all(|p| (-0.1..0.1).contains(p)));
/// ```
pub fn random_parameters<R: Rng + ?Sized>(n: usize, min: f64, max: f64, rng: &mut R) -> Vec<f64> {
    if min >= max {
        return vec![min; n];
    }
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_parameters_are_seeded() {
        let a = random_parameters(10, 0.0, 1.0, &mut StdRng::seed_from_u64(1));
        let b = random_parameters(10, 0.0, 1.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert!(a.iter().all(|p| (0.0..1.0).contains(p)));
    }

    #[test]
    fn test_random_parameters_degenerate_range() {
        let params = random_parameters(3, 0.5, 0.5, &mut StdRng::seed_from_u64(0));
        assert_eq!(params, vec![0.5; 3]);
    }

    #[test]
    fn test_param_count_check() {
        assert!(check_param_count(2, &[0.0, 1.0]).is_ok());
        assert!(matches!(
            check_param_count(3, &[0.0]),
            Err(AnsatzError::ParameterCount { expected: 3, got: 1 })
        ));
    }
}
