//! Ansatz configuration files.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML or JSON, chosen by extension)
//! 2. Environment variables (`VQE_TRANSFORMATION`, `VQE_SCREENING_THRESHOLD`)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values
//!
//! ```yaml
//! kind: singlet-uccsd
//! number_of_spatial_orbitals: 4
//! number_of_alpha_electrons: 1
//! transformation: Bravyi-Kitaev
//! screening_threshold: 0.001
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vqe_fermion::Transformation;

use crate::ansatz::Ansatz;
use crate::error::{AnsatzError, AnsatzResult};
use crate::quantum_compiling::HeaQuantumCompilingAnsatz;
use crate::singlet_uccsd::SingletUccsdAnsatz;

/// Overrides the fermion-to-qubit encoding of a singlet UCCSD config.
pub const ENV_TRANSFORMATION: &str = "VQE_TRANSFORMATION";
/// Overrides the screening threshold of a singlet UCCSD config.
pub const ENV_SCREENING_THRESHOLD: &str = "VQE_SCREENING_THRESHOLD";

/// Serialised form of an ansatz, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnsatzConfig {
    /// [`SingletUccsdAnsatz`] settings.
    SingletUccsd(SingletUccsdConfig),
    /// [`HeaQuantumCompilingAnsatz`] settings.
    HeaQuantumCompiling(HeaQuantumCompilingConfig),
}

/// Singlet UCCSD settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingletUccsdConfig {
    /// Number of spatial orbitals
    pub number_of_spatial_orbitals: u32,

    /// Number of alpha electrons (beta = alpha)
    pub number_of_alpha_electrons: u32,

    /// Encoding name, e.g. "Jordan-Wigner" or "Bravyi-Kitaev"
    #[serde(default)]
    pub transformation: Transformation,

    /// Number of layers (only 1 is accepted)
    #[serde(default = "default_layers")]
    pub number_of_layers: u32,

    /// Generator terms below this magnitude are dropped (0 disables)
    #[serde(default)]
    pub screening_threshold: f64,
}

/// Hardware-efficient quantum-compiling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaQuantumCompilingConfig {
    /// Number of layers
    #[serde(default = "default_layers")]
    pub number_of_layers: u32,

    /// Number of qubits (even)
    pub number_of_qubits: u32,
}

fn default_layers() -> u32 {
    1
}

/// On-disk encoding of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> AnsatzResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(AnsatzError::Config(format!(
                "cannot infer config format of '{}' (expected .yaml, .yml or .json)",
                path.display()
            ))),
        }
    }
}

impl AnsatzConfig {
    /// Parse a config from a string.
    pub fn parse(contents: &str, format: ConfigFormat) -> AnsatzResult<Self> {
        match format {
            ConfigFormat::Yaml => {
                serde_yaml_ng::from_str(contents).map_err(|e| AnsatzError::Config(e.to_string()))
            }
            ConfigFormat::Json => {
                serde_json::from_str(contents).map_err(|e| AnsatzError::Config(e.to_string()))
            }
        }
    }

    /// Render the config as a string.
    pub fn render(&self, format: ConfigFormat) -> AnsatzResult<String> {
        match format {
            ConfigFormat::Yaml => {
                serde_yaml_ng::to_string(self).map_err(|e| AnsatzError::Config(e.to_string()))
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| AnsatzError::Config(e.to_string()))
            }
        }
    }

    /// Load a config file, then apply environment overrides.
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnsatzResult<Self> {
        Self::from_file_with_env(path, |key| std::env::var(key).ok())
    }

    /// Load a config file, then apply overrides looked up through `env`.
    pub fn from_file_with_env<P, F>(path: P, env: F) -> AnsatzResult<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AnsatzError::Config(format!("failed to read '{}': {e}", path.display())))?;

        let mut config = Self::parse(&contents, format)?;
        config.apply_env_overrides(env)?;
        debug!(path = %path.display(), ?config, "loaded ansatz config");
        Ok(config)
    }

    /// Write the config, choosing the format from the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> AnsatzResult<()> {
        let path = path.as_ref();
        let contents = self.render(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, contents)
            .map_err(|e| AnsatzError::Config(format!("failed to write '{}': {e}", path.display())))
    }

    /// Apply environment overrides.
    ///
    /// Only singlet UCCSD configs have overridable fields. A variable that is
    /// set but malformed is an error.
    pub fn apply_env_overrides<F>(&mut self, env: F) -> AnsatzResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let AnsatzConfig::SingletUccsd(uccsd) = self else {
            return Ok(());
        };

        let transformation = env(ENV_TRANSFORMATION)
            .map(|name| name.parse::<Transformation>())
            .transpose()?;
        let threshold = env(ENV_SCREENING_THRESHOLD)
            .map(|value| {
                value.trim().parse::<f64>().map_err(|_| {
                    AnsatzError::Config(format!("{ENV_SCREENING_THRESHOLD}='{value}' is not a number"))
                })
            })
            .transpose()?;

        if let Some(transformation) = transformation {
            uccsd.transformation = transformation;
        }
        if let Some(threshold) = threshold {
            uccsd.screening_threshold = threshold;
        }
        Ok(())
    }

    /// Construct the configured ansatz.
    pub fn build(&self) -> AnsatzResult<Box<dyn Ansatz>> {
        match self {
            AnsatzConfig::SingletUccsd(c) => {
                let ansatz = SingletUccsdAnsatz::new(
                    c.number_of_layers,
                    c.number_of_spatial_orbitals,
                    c.number_of_alpha_electrons,
                    c.transformation,
                )?
                .with_screening_threshold(c.screening_threshold)?;
                Ok(Box::new(ansatz))
            }
            AnsatzConfig::HeaQuantumCompiling(c) => Ok(Box::new(HeaQuantumCompilingAnsatz::new(
                c.number_of_layers,
                c.number_of_qubits,
            )?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UCCSD_YAML: &str = "
kind: singlet-uccsd
number_of_spatial_orbitals: 4
number_of_alpha_electrons: 1
transformation: Bravyi-Kitaev
";

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_yaml_with_defaults() {
        let config = AnsatzConfig::parse(UCCSD_YAML, ConfigFormat::Yaml).unwrap();
        let AnsatzConfig::SingletUccsd(c) = &config else {
            panic!("expected singlet UCCSD config");
        };
        assert_eq!(c.transformation, Transformation::BravyiKitaev);
        assert_eq!(c.number_of_layers, 1);
        assert_eq!(c.screening_threshold, 0.0);

        let ansatz = config.build().unwrap();
        assert_eq!(ansatz.name(), "SingletUCCSDAnsatz");
        assert_eq!(ansatz.number_of_qubits(), 8);
        assert_eq!(ansatz.number_of_params(), 9);
    }

    #[test]
    fn test_parse_json_hea() {
        let json = r#"{"kind": "hea-quantum-compiling", "number_of_qubits": 4, "number_of_layers": 2}"#;
        let config = AnsatzConfig::parse(json, ConfigFormat::Json).unwrap();
        let ansatz = config.build().unwrap();
        assert_eq!(ansatz.number_of_params(), 48);
        assert!(ansatz.supports_parametrized_circuits());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = AnsatzConfig::parse(UCCSD_YAML, ConfigFormat::Yaml).unwrap();
        config
            .apply_env_overrides(|key| match key {
                ENV_TRANSFORMATION => Some("jw".to_string()),
                ENV_SCREENING_THRESHOLD => Some("0.01".to_string()),
                _ => None,
            })
            .unwrap();
        let AnsatzConfig::SingletUccsd(c) = &config else {
            panic!("expected singlet UCCSD config");
        };
        assert_eq!(c.transformation, Transformation::JordanWigner);
        assert_eq!(c.screening_threshold, 0.01);
    }

    #[test]
    fn test_malformed_env_is_an_error() {
        let mut config = AnsatzConfig::parse(UCCSD_YAML, ConfigFormat::Yaml).unwrap();
        let before = config.clone();
        assert!(matches!(
            config.apply_env_overrides(|key| (key == ENV_TRANSFORMATION).then(|| "parity".to_string())),
            Err(AnsatzError::Fermion(_))
        ));
        assert!(matches!(
            config.apply_env_overrides(|key| (key == ENV_SCREENING_THRESHOLD).then(|| "lots".to_string())),
            Err(AnsatzError::Config(_))
        ));
        assert_eq!(config, before);
        assert!(config.apply_env_overrides(no_env).is_ok());
    }

    #[test]
    fn test_invalid_config_fails_to_build() {
        let yaml = "kind: singlet-uccsd\nnumber_of_spatial_orbitals: 2\nnumber_of_alpha_electrons: 2\n";
        let config = AnsatzConfig::parse(yaml, ConfigFormat::Yaml).unwrap();
        assert!(matches!(
            config.build(),
            Err(AnsatzError::InvalidChemistryParameters(_))
        ));

        let yaml = "kind: singlet-uccsd\nnumber_of_spatial_orbitals: 3\nnumber_of_alpha_electrons: 1\nscreening_threshold: -1.0\n";
        let config = AnsatzConfig::parse(yaml, ConfigFormat::Yaml).unwrap();
        assert!(matches!(config.build(), Err(AnsatzError::InvalidThreshold(_))));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(AnsatzConfig::parse("kind: qaoa\nnumber_of_qubits: 2\n", ConfigFormat::Yaml).is_err());
        assert!(ConfigFormat::from_path(Path::new("ansatz.toml")).is_err());
        assert_eq!(
            ConfigFormat::from_path(Path::new("ansatz.yml")).unwrap(),
            ConfigFormat::Yaml
        );
    }
}
