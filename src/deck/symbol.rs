//! Pair-symbol identifiers.

use serde::{Deserialize, Serialize};

/// Opaque pair symbol. The engine only compares symbols for equality;
/// adapters assign meaning (icon, color, label) via `SymbolConfig`.
///
/// Exactly two cards on a board share each symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        assert_eq!(Symbol::new(3), Symbol::new(3));
        assert_ne!(Symbol::new(3), Symbol::new(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Symbol::new(42)), "Symbol(42)");
    }

    #[test]
    fn test_serialization() {
        let symbol = Symbol::new(5);
        let json = serde_json::to_string(&symbol).unwrap();
        let deserialized: Symbol = serde_json::from_str(&json).unwrap();

        assert_eq!(symbol, deserialized);
    }
}
