//! Error types for Directus queries.

/// Error from a Directus read query.
#[derive(Debug, thiserror::Error)]
pub enum RemoteQueryError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Error message from the `errors` envelope, or the raw body.
        body: String,
    },

    /// Response body did not match the expected item shape.
    #[error("unexpected response from {collection}: {source}")]
    Schema {
        /// Collection that was queried.
        collection: String,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The source refused to produce a tree (used by in-memory sources).
    #[error("query failed: {0}")]
    Unavailable(String),
}
