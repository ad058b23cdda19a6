//! Provider-plugin contract shared by all catalog adapters, and the
//! registry that routes query requests to them.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::asf::AsfAdapter;
use crate::config::AsfConfig;
use crate::domain::{Granule, ProductDate};
use crate::errors::QueryResult;

/// Contract every catalog adapter implements so the registry can treat
/// providers polymorphically.
#[async_trait]
pub trait ProviderQuery: Send + Sync {
    /// Execute one catalog search for the given window, AOI, and product
    /// mapping tag. Implementations perform exactly one outbound request
    /// per call and return results in catalog order.
    async fn query(
        &self,
        start: &str,
        end: &str,
        aoi: &Value,
        mapping: &str,
    ) -> QueryResult<Vec<Granule>>;

    /// Provider tag the registry routes on.
    fn supported_type(&self) -> &'static str;

    /// Artifact type of downloads produced from this provider's results.
    fn file_type(&self) -> &'static str;

    /// Derive an acquisition date from a product title, for bucketing
    /// downloads. Total: unknown titles yield the sentinel date.
    fn date_from_title(&self, title: &str) -> ProductDate;
}

/// Tag-to-adapter map, built once at startup. No dynamic discovery.
pub struct ProviderRegistry {
    providers: HashMap<&'static str, Arc<dyn ProviderQuery>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Registry with every built-in adapter registered.
    pub fn with_defaults(config: AsfConfig) -> QueryResult<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(AsfAdapter::new(config)?));
        Ok(registry)
    }

    pub fn register(&mut self, provider: Arc<dyn ProviderQuery>) {
        self.providers.insert(provider.supported_type(), provider);
    }

    pub fn get(&self, tag: &str) -> Option<Arc<dyn ProviderQuery>> {
        self.providers.get(tag).cloned()
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.providers.keys().copied().collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_routes_asf() {
        let registry = ProviderRegistry::with_defaults(AsfConfig::default()).unwrap();
        let provider = registry.get("asf").expect("asf adapter registered");
        assert_eq!(provider.supported_type(), "asf");
        assert_eq!(provider.file_type(), "zip");
    }

    #[test]
    fn unknown_tag_does_not_resolve() {
        let registry = ProviderRegistry::with_defaults(AsfConfig::default()).unwrap();
        assert!(registry.get("scihub").is_none());
    }
}
