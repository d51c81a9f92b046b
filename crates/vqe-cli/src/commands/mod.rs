//! CLI command implementations.

pub mod build;
pub mod common;
pub mod hea;
pub mod params;
pub mod uccsd;
pub mod version;
