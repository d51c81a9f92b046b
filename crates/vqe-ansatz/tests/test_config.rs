//! Config files on disk.

use tempfile::TempDir;
use vqe_ansatz::{Ansatz, AnsatzConfig};
use vqe_ansatz::config::{
    ConfigFormat, ENV_SCREENING_THRESHOLD, HeaQuantumCompilingConfig, SingletUccsdConfig,
};
use vqe_fermion::Transformation;

fn uccsd_config() -> AnsatzConfig {
    AnsatzConfig::SingletUccsd(SingletUccsdConfig {
        number_of_spatial_orbitals: 4,
        number_of_alpha_electrons: 1,
        transformation: Transformation::BravyiKitaev,
        number_of_layers: 1,
        screening_threshold: 0.001,
    })
}

#[test]
fn yaml_and_json_files_round_trip() {
    let dir = TempDir::new().unwrap();
    let hea = AnsatzConfig::HeaQuantumCompiling(HeaQuantumCompilingConfig {
        number_of_layers: 3,
        number_of_qubits: 6,
    });

    for (file, config) in [("uccsd.yaml", uccsd_config()), ("hea.json", hea)] {
        let path = dir.path().join(file);
        config.save(&path).unwrap();
        let loaded = AnsatzConfig::from_file_with_env(&path, |_| None).unwrap();
        assert_eq!(loaded, config, "{file}");
    }
}

#[test]
fn environment_overrides_loaded_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("uccsd.yml");
    uccsd_config().save(&path).unwrap();

    let loaded = AnsatzConfig::from_file_with_env(&path, |key| {
        (key == ENV_SCREENING_THRESHOLD).then(|| "0.05".to_string())
    })
    .unwrap();
    let AnsatzConfig::SingletUccsd(c) = &loaded else {
        panic!("expected singlet UCCSD config");
    };
    assert_eq!(c.screening_threshold, 0.05);
    assert_eq!(c.transformation, Transformation::BravyiKitaev);
}

#[test]
fn loaded_config_builds_ansatz() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("uccsd.json");
    uccsd_config().save(&path).unwrap();

    let ansatz = AnsatzConfig::from_file_with_env(&path, |_| None)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(ansatz.number_of_qubits(), 8);
    assert_eq!(ansatz.number_of_params(), 9);
    let circuit = ansatz.generate_circuit(Some(&[0.01; 9])).unwrap();
    assert_eq!(circuit.num_qubits(), 8);
}

#[test]
fn hand_written_transformation_names_match_the_cli() {
    for name in ["jordan-wigner", "JW", "bk", "Bravyi-Kitaev"] {
        let yaml = format!(
            "kind: singlet-uccsd\nnumber_of_spatial_orbitals: 2\nnumber_of_alpha_electrons: 1\ntransformation: {name}\n"
        );
        let config = AnsatzConfig::parse(&yaml, ConfigFormat::Yaml).unwrap();
        let AnsatzConfig::SingletUccsd(c) = &config else {
            panic!("expected singlet UCCSD config");
        };
        assert_eq!(c.transformation, name.parse::<Transformation>().unwrap(), "{name}");
    }

    let yaml = "kind: singlet-uccsd\nnumber_of_spatial_orbitals: 2\nnumber_of_alpha_electrons: 1\ntransformation: parity\n";
    assert!(AnsatzConfig::parse(yaml, ConfigFormat::Yaml).is_err());
}

#[test]
fn missing_or_unknown_files_are_errors() {
    let dir = TempDir::new().unwrap();
    assert!(AnsatzConfig::from_file_with_env(dir.path().join("absent.yaml"), |_| None).is_err());

    let path = dir.path().join("ansatz.toml");
    std::fs::write(&path, "kind = 'singlet-uccsd'").unwrap();
    assert!(AnsatzConfig::from_file_with_env(&path, |_| None).is_err());
}
