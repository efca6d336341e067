use crate::config::LookupConfig;
use crate::error::lookup::LookupError;
use crate::DEFAULT_USER_AGENT;

use common::HttpStatusCode;
use models::{ErrorRecord, LookupQuery};

use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use serde_json::Value;
use url::Url;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const SEARCH_QUERY_KEY: &str = "search";
const PLATFORM_QUERY_KEY: &str = "platform";

/// Client for the status-code lookup service.
///
/// One GET per [`fetch`](Self::fetch); no retries, no caching. The base URL
/// is whatever the configuration says, including a proxy in front of the
/// real service.
#[derive(Clone)]
pub struct OsStatusClient {
    base_url: Url,
    client: Client,
}

impl OsStatusClient {
    /// Client for `base_url_str` with the default user agent and timeout.
    pub fn new(base_url_str: &str) -> Result<Self, LookupError> {
        Self::with_settings(base_url_str, DEFAULT_USER_AGENT, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        Self::with_settings(&config.base_url, &config.user_agent, config.timeout())
    }

    pub fn with_settings(
        base_url_str: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Request URL for `query`: `search` always, `platform` only when set.
    ///
    /// Query parameters already on the base URL are kept.
    pub fn lookup_url(&self, query: &LookupQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(SEARCH_QUERY_KEY, &query.code);
            if let Some(platform) = query.platform {
                pairs.append_pair(PLATFORM_QUERY_KEY, platform.as_str());
            }
        }
        url
    }

    /// Look up `query` and decode the response into records, in service order.
    ///
    /// # Errors
    /// - [`LookupError::Connection`] when no response arrives
    /// - [`LookupError::Status`] for any non-2xx status
    /// - [`LookupError::Decode`] when the body is not a JSON array of records
    pub async fn fetch(&self, query: &LookupQuery) -> Result<Vec<ErrorRecord>, LookupError> {
        let url = self.lookup_url(query);
        debug!("Looking up {url}");

        let response = self.client.get(url).send().await?;

        let status = HttpStatusCode(response.status().as_u16());
        if !status.is_success() {
            debug!(
                "Lookup for '{}' failed: HTTP {} - {}",
                query.code,
                status,
                response.text().await.unwrap_or_default()
            );
            return Err(LookupError::status(status));
        }

        let json: Value = response.json().await?;
        let records: Vec<ErrorRecord> = serde_json::from_value(json)?;

        info!("Lookup for '{}' returned {} record(s)", query.code, records.len());
        Ok(records)
    }
}
