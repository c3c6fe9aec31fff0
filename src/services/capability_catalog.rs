//! Registry of strategy capabilities.

use std::collections::HashMap;

use crate::domain::errors::{CatalogError, StrategyError, StrategyResult};
use crate::domain::models::strategy_templates::builtin_capabilities;
use crate::domain::models::CapabilitySpec;

/// Read-only mapping from capability name to its spec.
///
/// Built once at startup; every spec is validated on the way in.
#[derive(Debug, Clone)]
pub struct CapabilityCatalog {
    specs: Vec<CapabilitySpec>,
    index: HashMap<&'static str, usize>,
}

impl CapabilityCatalog {
    /// Build a catalog, rejecting duplicates and inconsistent specs.
    pub fn new(specs: impl IntoIterator<Item = CapabilitySpec>) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            specs: Vec::new(),
            index: HashMap::new(),
        };

        for spec in specs {
            if catalog.index.contains_key(spec.name) {
                return Err(CatalogError::DuplicateCapability(spec.name.to_string()));
            }
            spec.validate()?;
            catalog.index.insert(spec.name, catalog.specs.len());
            catalog.specs.push(spec);
        }

        Ok(catalog)
    }

    /// Catalog of the built-in detailing capabilities.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_capabilities())
    }

    pub fn lookup(&self, name: &str) -> StrategyResult<&CapabilitySpec> {
        self.index
            .get(name)
            .map(|&i| &self.specs[i])
            .ok_or_else(|| StrategyError::CapabilityNotFound(name.to_string()))
    }

    /// Specs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CapabilitySpec> {
        self.specs.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::strategy_templates::{CRISIS_MANAGEMENT, LOCAL_SEO};
    use crate::domain::models::{ParamKind, ParamSpec};

    #[test]
    fn test_builtin_catalog() {
        let catalog = CapabilityCatalog::builtin().expect("builtin catalog is valid");
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.names().next(), Some("marketing_strategy"));
        assert_eq!(catalog.lookup("local_seo").unwrap().max_tokens, 1600);
    }

    #[test]
    fn test_lookup_unknown() {
        let catalog = CapabilityCatalog::builtin().unwrap();
        let err = catalog.lookup("tiktok_dance").unwrap_err();
        assert!(matches!(err, StrategyError::CapabilityNotFound(ref n) if n == "tiktok_dance"));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let err = CapabilityCatalog::new([LOCAL_SEO, CRISIS_MANAGEMENT, LOCAL_SEO]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCapability("local_seo".to_string()));
    }

    #[test]
    fn test_inconsistent_spec_rejected() {
        const BROKEN: CapabilitySpec = CapabilitySpec {
            name: "broken",
            description: "declares a parameter it never uses",
            params: &[
                ParamSpec::new("business_name", ParamKind::Text, "Business name"),
                ParamSpec::new("region", ParamKind::Text, "Region"),
            ],
            template: "{knowledge}\nPlan for {business_name}",
            max_tokens: 100,
        };
        let err = CapabilityCatalog::new([CRISIS_MANAGEMENT, BROKEN]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnusedParameter {
                capability: "broken".to_string(),
                parameter: "region".to_string()
            }
        );
    }
}
