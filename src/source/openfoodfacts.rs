use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{AnalystError, Result};
use crate::source::ProductSource;

/// Sync client for the OpenFoodFacts product API.
///
/// One GET per lookup, bounded by the configured timeout. No retries.
pub struct OpenFoodFactsClient {
    base_url: String,
    user_agent: String,
    agent: ureq::Agent,
}

impl OpenFoodFactsClient {
    pub fn new(config: &ApiConfig) -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .new_agent();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            agent,
        }
    }

    pub fn product_url(&self, barcode: &str) -> String {
        format!("{}/product/{}.json", self.base_url, barcode)
    }
}

impl ProductSource for OpenFoodFactsClient {
    fn fetch(&self, barcode: &str) -> Result<Value> {
        let url = self.product_url(barcode);
        debug!(url = %url, "fetching product");

        let response = self
            .agent
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(AnalystError::MissingProduct(barcode.to_string()));
        }
        if status >= 400 {
            let body = response.into_body().read_to_string().unwrap_or_default();
            return Err(AnalystError::Http(format!(
                "OpenFoodFacts returned {}: {}",
                status,
                body.trim()
            )));
        }

        let body: Value = response.into_body().read_json()?;
        Ok(body)
    }
}
