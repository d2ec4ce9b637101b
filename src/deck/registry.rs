//! Symbol display-name lookup.

use rustc_hash::FxHashMap;

use crate::core::config::SymbolConfig;

use super::symbol::Symbol;

/// Maps symbols to the display names adapters render them with.
#[derive(Clone, Debug, Default)]
pub struct SymbolRegistry {
    names: FxHashMap<Symbol, String>,
}

impl SymbolRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from symbol configurations.
    ///
    /// Later duplicates are ignored; configurations are validated for
    /// duplicates before a game starts.
    #[must_use]
    pub fn from_configs(configs: &[SymbolConfig]) -> Self {
        let mut registry = Self::new();
        for config in configs {
            registry.register(config.symbol, config.name.clone());
        }
        registry
    }

    /// Register a display name. Returns false if the symbol was already
    /// registered (the existing name is kept).
    pub fn register(&mut self, symbol: Symbol, name: impl Into<String>) -> bool {
        if self.names.contains_key(&symbol) {
            return false;
        }
        self.names.insert(symbol, name.into());
        true
    }

    /// Look up a symbol's display name.
    #[must_use]
    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.names.get(&symbol).map(String::as_str)
    }

    /// Number of registered symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SymbolRegistry::new();

        assert!(registry.register(Symbol::new(0), "apple"));
        assert_eq!(registry.name(Symbol::new(0)), Some("apple"));
        assert_eq!(registry.name(Symbol::new(1)), None);
    }

    #[test]
    fn test_duplicate_registration_keeps_first() {
        let mut registry = SymbolRegistry::new();

        assert!(registry.register(Symbol::new(0), "apple"));
        assert!(!registry.register(Symbol::new(0), "carrot"));
        assert_eq!(registry.name(Symbol::new(0)), Some("apple"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_from_configs() {
        let registry = SymbolRegistry::from_configs(&[
            SymbolConfig::new(Symbol::new(0), "apple"),
            SymbolConfig::new(Symbol::new(1), "carrot"),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.name(Symbol::new(1)), Some("carrot"));
    }
}
