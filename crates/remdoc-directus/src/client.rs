//! Directus REST API client.
//!
//! Provides a sync HTTP client for the Directus items endpoint with optional
//! static-token authentication.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::info;
use ureq::Agent;

use crate::error::RemoteQueryError;
use crate::query::{ErrorsResponse, ItemsQuery, ItemsResponse};
use crate::source::ContentSource;
use crate::types::Area;

/// Largest response body accepted. Page content is inlined in the tree.
const MAX_RESPONSE_BYTES: u64 = 256 * 1024 * 1024;

/// Directus REST API client.
pub struct DirectusClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl DirectusClient {
    /// Create a client.
    ///
    /// # Arguments
    /// * `base_url` - Directus instance base URL
    /// * `token` - Static access token, `None` for public access
    /// * `timeout` - Global timeout applied to each request
    #[must_use]
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.map(ToOwned::to_owned),
        }
    }

    /// Run a `readItems` query and decode the `data` envelope.
    pub fn read_items<T: DeserializeOwned>(
        &self,
        query: &ItemsQuery,
    ) -> Result<T, RemoteQueryError> {
        let url = query.to_url(&self.base_url);

        info!(
            "Reading up to {} items from {}",
            query.limit, query.collection
        );

        let mut request = self.agent.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        let response = request.call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(RemoteQueryError::HttpResponse {
                status,
                body: ErrorsResponse::message_from(&error_body).unwrap_or(error_body),
            });
        }

        let body = body_reader
            .with_config()
            .limit(MAX_RESPONSE_BYTES)
            .read_to_string()?;

        decode_items(query.collection, &body)
    }
}

impl ContentSource for DirectusClient {
    fn fetch_documentation_tree(&self) -> Result<Vec<Area>, RemoteQueryError> {
        let areas: Vec<Area> = self.read_items(&ItemsQuery::documentation_tree())?;
        info!("Fetched {} documentation areas", areas.len());
        Ok(areas)
    }
}

/// Decode a successful items response body.
fn decode_items<T: DeserializeOwned>(collection: &str, body: &str) -> Result<T, RemoteQueryError> {
    serde_json::from_str::<ItemsResponse<T>>(body)
        .map(|response| response.data)
        .map_err(|source| RemoteQueryError::Schema {
            collection: collection.to_owned(),
            source,
        })
}
