//! ASF DAAC catalog adapter: the provider-plugin implementation for
//! <https://api.daac.asf.alaska.edu>.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::clients::SearchClient;
use crate::config::{AsfConfig, SENTINEL1_PLATFORMS};
use crate::domain::{Granule, ProductDate, ProductMapping};
use crate::errors::QueryResult;
use crate::provider::ProviderQuery;
use crate::query::build_query;
use crate::response::decode_granules;
use crate::utils::extract_date;

/// ASF query implementer.
///
/// Stateless per call: each `query` compiles a fresh URL, performs one GET,
/// and decodes the response. The only held state is read-only
/// configuration and the shared HTTP client.
pub struct AsfAdapter {
    config: AsfConfig,
    client: SearchClient,
}

impl AsfAdapter {
    /// Mapping used when the caller does not care which product family.
    pub const DEFAULT_MAPPING: &'static str = "S1_IW_SLC";

    pub fn new(config: AsfConfig) -> QueryResult<Self> {
        let client = SearchClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// `query` with the default `S1_IW_SLC` mapping.
    pub async fn query_default(
        &self,
        start: &str,
        end: &str,
        aoi: &Value,
    ) -> QueryResult<Vec<Granule>> {
        self.query(start, end, aoi, Self::DEFAULT_MAPPING).await
    }
}

#[async_trait]
impl ProviderQuery for AsfAdapter {
    async fn query(
        &self,
        start: &str,
        end: &str,
        aoi: &Value,
        mapping: &str,
    ) -> QueryResult<Vec<Granule>> {
        // Unknown mappings are a silent no-op, not an error. Callers that
        // typo a tag get an empty result; see the registry docs.
        let Some(mapping) = ProductMapping::from_tag(mapping) else {
            debug!("unrecognized product mapping {:?}, skipping query", mapping);
            return Ok(Vec::new());
        };

        let query = build_query(&self.config, start, end, SENTINEL1_PLATFORMS, aoi, mapping)?;
        info!("Listing: {}", query);

        let (status, body) = self.client.fetch(&query).await?;
        decode_granules(status, &body)
    }

    fn supported_type(&self) -> &'static str {
        "asf"
    }

    fn file_type(&self) -> &'static str {
        "zip"
    }

    fn date_from_title(&self, title: &str) -> ProductDate {
        extract_date(title)
    }
}
