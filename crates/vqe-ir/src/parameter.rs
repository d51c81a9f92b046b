//! Gate angles: concrete values or named variational symbols.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A gate angle that is either known or still symbolic.
///
/// Variational circuits are first built with one symbol per parameter
/// (`theta_0`, `theta_1`, ...) and later bound to concrete values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A constant numeric value.
    Constant(f64),
    /// A named symbolic parameter.
    Symbol(String),
}

impl ParameterExpression {
    /// Create a constant parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        ParameterExpression::Symbol(name.into())
    }

    /// Check if this expression is still symbolic.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, ParameterExpression::Symbol(_))
    }

    /// The concrete value, if bound.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Symbol(_) => None,
        }
    }

    /// The symbol name, if unbound.
    pub fn symbol_name(&self) -> Option<&str> {
        match self {
            ParameterExpression::Symbol(name) => Some(name),
            ParameterExpression::Constant(_) => None,
        }
    }

    /// Bind every symbol that has an entry in `bindings`.
    pub fn bind_all(&self, bindings: &FxHashMap<String, f64>) -> Self {
        match self {
            ParameterExpression::Symbol(n) => bindings
                .get(n)
                .map_or_else(|| self.clone(), |v| ParameterExpression::Constant(*v)),
            ParameterExpression::Constant(_) => self.clone(),
        }
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Symbol(name) => write!(f, "{name}"),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<&str> for ParameterExpression {
    fn from(name: &str) -> Self {
        ParameterExpression::Symbol(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant() {
        let p = ParameterExpression::constant(1.5);
        assert!(!p.is_symbolic());
        assert_eq!(p.as_f64(), Some(1.5));
        assert_eq!(p.symbol_name(), None);
    }

    #[test]
    fn test_symbol() {
        let p = ParameterExpression::symbol("theta_0");
        assert!(p.is_symbolic());
        assert_eq!(p.as_f64(), None);
        assert_eq!(p.symbol_name(), Some("theta_0"));
    }

    #[test]
    fn test_bind_all_leaves_missing_symbols() {
        let mut bindings = FxHashMap::default();
        bindings.insert("a".to_string(), 0.25);

        assert_eq!(
            ParameterExpression::symbol("a").bind_all(&bindings),
            ParameterExpression::Constant(0.25)
        );
        assert!(ParameterExpression::symbol("b").bind_all(&bindings).is_symbolic());
    }
}
