//! ASF DAAC catalog query adapter.
//!
//! Given a time range and an area of interest, compiles a parameterized
//! search against the ASF catalog, executes a single GET, and normalizes
//! the response into ordered `(title, download URL)` pairs for downstream
//! download-job submission. Implements the provider-plugin contract in
//! [`provider::ProviderQuery`]; the registry routes on the `"asf"` tag.

pub mod asf;
pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod provider;
pub mod query;
pub mod response;
pub mod utils;

pub use crate::asf::AsfAdapter;
pub use crate::config::AsfConfig;
pub use crate::domain::{Granule, ProductDate, ProductMapping};
pub use crate::errors::{QueryError, QueryResult};
pub use crate::provider::{ProviderQuery, ProviderRegistry};
