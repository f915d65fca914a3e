//! Indicator registry for creating plugins by name.
//!
//! Replaces import-path probing: every available plugin is registered up
//! front and looked up by the `name` key of its configuration.

use crate::error::IndicatorError;
use crate::impl_::willr_open::WilliamsROpen;
use crate::traits::IndicatorPlugin;
use std::collections::HashMap;
use std::sync::Arc;
use willr_types::IndicatorConfig;

/// Factory function type for creating indicator plugins from a configuration.
pub type IndicatorFactory = Box<
    dyn Fn(&IndicatorConfig) -> Result<Box<dyn IndicatorPlugin>, IndicatorError> + Send + Sync,
>;

/// Registry for indicator factories.
///
/// Names are case-insensitive.
///
/// # Example
/// ```ignore
/// let registry = IndicatorRegistry::with_defaults();
/// let config = IndicatorConfig::new(14, -80.0, -20.0)?;
/// let mut indicator = registry.create("willr_open", &config)?;
/// ```
pub struct IndicatorRegistry {
    factories: HashMap<String, Arc<IndicatorFactory>>,
}

impl IndicatorRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in indicators pre-registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Registers an indicator factory, replacing any factory with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&IndicatorConfig) -> Result<Box<dyn IndicatorPlugin>, IndicatorError>
            + Send
            + Sync
            + 'static,
    {
        self.factories
            .insert(name.into().to_lowercase(), Arc::new(Box::new(factory)));
    }

    /// Creates an indicator by name.
    ///
    /// # Errors
    /// Returns [`IndicatorError::UnknownIndicator`] if the name is not registered,
    /// otherwise whatever the factory returns.
    pub fn create(
        &self,
        name: &str,
        config: &IndicatorConfig,
    ) -> Result<Box<dyn IndicatorPlugin>, IndicatorError> {
        let factory = self
            .factories
            .get(&name.to_lowercase())
            .ok_or_else(|| IndicatorError::UnknownIndicator(name.to_string()))?;

        factory(config)
    }

    /// Parses a JSON configuration and creates the indicator named by its `name` key.
    ///
    /// # Errors
    /// Returns [`IndicatorError::Configuration`] for an invalid configuration and
    /// [`IndicatorError::UnknownIndicator`] for an unregistered name.
    pub fn create_from_value(
        &self,
        params: &serde_json::Value,
    ) -> Result<Box<dyn IndicatorPlugin>, IndicatorError> {
        let config = IndicatorConfig::from_value(params)?;
        self.create(&config.name, &config)
    }

    /// Checks if an indicator is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// Returns all registered indicator names.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.factories.keys()
    }

    /// Returns the number of registered indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Checks if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn register_defaults(&mut self) {
        self.register("willr_open", |config| {
            let indicator = WilliamsROpen::new(config.clone())?;
            Ok(Box::new(indicator))
        });
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use willr_types::{Dataset, IndicatorSignal};

    /// Plugin that always signals buy, for registry tests
    struct AlwaysBuy {
        config: IndicatorConfig,
        is_buy: IndicatorSignal,
    }

    impl IndicatorPlugin for AlwaysBuy {
        fn name(&self) -> &str {
            "always_buy"
        }

        fn config(&self) -> &IndicatorConfig {
            &self.config
        }

        fn process(
            &mut self,
            _run_id: &str,
            _ticker: &str,
            dataset: &Dataset,
        ) -> Result<(), IndicatorError> {
            self.subscribed_table(dataset)?;
            self.is_buy = IndicatorSignal::Buy;
            Ok(())
        }

        fn reset_internals(&mut self) {
            self.is_buy = IndicatorSignal::Reset;
        }

        fn value(&self) -> Option<f64> {
            None
        }

        fn is_buy(&self) -> IndicatorSignal {
            self.is_buy
        }

        fn is_sell(&self) -> IndicatorSignal {
            IndicatorSignal::Ignore
        }

        fn report(&self) -> crate::traits::IndicatorReport {
            crate::traits::IndicatorReport {
                name: self.name().to_string(),
                ticker: None,
                value: None,
                is_buy: self.is_buy,
                is_sell: IndicatorSignal::Ignore,
                num_points: self.config.num_points,
                buy_below: self.config.buy_below,
                sell_above: self.config.sell_above,
            }
        }
    }

    fn make_config() -> IndicatorConfig {
        IndicatorConfig::new(14, -80.0, -20.0).unwrap()
    }

    #[test]
    fn test_registry_new() {
        let registry = IndicatorRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = IndicatorRegistry::with_defaults();
        assert!(registry.contains("willr_open"));
        assert!(registry.contains("WILLR_OPEN"));
        assert!(!registry.contains("unknown"));
        assert_eq!(registry.names().collect::<Vec<_>>(), ["willr_open"]);
    }

    #[test]
    fn test_registry_create_willr_open() {
        let registry = IndicatorRegistry::with_defaults();
        let indicator = registry.create("willr_open", &make_config()).unwrap();

        assert_eq!(indicator.name(), "willr_open");
        assert_eq!(indicator.config().num_points, 14);
        assert_eq!(indicator.is_buy(), IndicatorSignal::Reset);
    }

    #[test]
    fn test_registry_unknown_indicator() {
        let registry = IndicatorRegistry::with_defaults();
        let result = registry.create("UNKNOWN", &make_config());

        if let Err(IndicatorError::UnknownIndicator(name)) = result {
            assert_eq!(name, "UNKNOWN");
        } else {
            panic!("Expected UnknownIndicator error");
        }
    }

    #[test]
    fn test_registry_create_from_value() {
        let registry = IndicatorRegistry::with_defaults();
        let indicator = registry
            .create_from_value(&json!({
                "name": "willr_open",
                "num_points": 10,
                "buy_below": -90,
                "sell_above": -10
            }))
            .unwrap();
        assert_eq!(indicator.config().num_points, 10);

        let missing = registry.create_from_value(&json!({
            "name": "willr_open",
            "buy_below": -90,
            "sell_above": -10
        }));
        assert!(matches!(missing, Err(IndicatorError::Configuration(_))));

        let unknown = registry.create_from_value(&json!({
            "name": "macd",
            "num_points": 10,
            "buy_below": -90,
            "sell_above": -10
        }));
        assert!(matches!(unknown, Err(IndicatorError::UnknownIndicator(_))));
    }

    #[test]
    fn test_registry_custom_indicator() {
        let mut registry = IndicatorRegistry::new();
        registry.register("Always_Buy", |config| {
            Ok(Box::new(AlwaysBuy {
                config: config.clone(),
                is_buy: IndicatorSignal::Reset,
            }))
        });

        let mut indicator = registry.create("always_buy", &make_config()).unwrap();
        let dataset = Dataset::new().with_rows("daily", &[]);

        indicator.process("algo", "SPY", &dataset).unwrap();
        assert_eq!(indicator.is_buy(), IndicatorSignal::Buy);

        indicator.reset_internals();
        assert_eq!(indicator.report().is_buy, IndicatorSignal::Reset);
    }

    #[test]
    fn test_registry_register_replaces() {
        let mut registry = IndicatorRegistry::with_defaults();
        registry.register("WILLR_OPEN", |_| {
            Err(IndicatorError::configuration("disabled"))
        });

        assert_eq!(registry.len(), 1);
        assert!(registry.create("willr_open", &make_config()).is_err());
    }
}
