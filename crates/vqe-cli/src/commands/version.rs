//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - variational ansatz circuit builders",
        style("vqe").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  vqe-ir       Circuit representation and QASM 3 emission");
    println!("  vqe-fermion  Fermion operators, JW/BK encodings, UCCSD generators");
    println!("  vqe-ansatz   Singlet UCCSD and HEA quantum-compiling ansätze");
    println!("  vqe-cli      Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
