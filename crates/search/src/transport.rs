//! The seam between this crate and the Elasticsearch client.
//!
//! [`SearchTransport`] exposes exactly the client operations the record
//! accessor and the multi-search coordinator call. Every method returns the
//! raw status and JSON body so callers can tell a 404 apart from other
//! failures; transport-level errors pass through as
//! [`SearchError::Transport`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use elasticsearch::auth::Credentials;
use elasticsearch::cert::CertificateValidation;
use elasticsearch::http::request::JsonBody;
use elasticsearch::http::response::Response;
use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use elasticsearch::{
    BulkParts, CountParts, DeleteByQueryParts, DeleteParts, Elasticsearch, ExistsParts, GetParts,
    MsearchParts, SearchParts, UpdateParts,
};
use serde_json::Value;

use crate::config::{SearchAuth, SearchConfig};
use crate::error::{SearchError, SearchResult};

/// Status and decoded body of one engine reply.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// The JSON body, `Value::String` when the body was not JSON, or
    /// `Value::Null` when empty.
    pub body: Value,
}

impl RawResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns the body of a successful reply, or [`SearchError::Response`].
    pub fn into_body(self) -> SearchResult<Value> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(SearchError::Response {
                status: self.status,
                body: match self.body {
                    Value::String(text) => text,
                    other => other.to_string(),
                },
            })
        }
    }
}

/// Client operations used by [`Record`](crate::record::Record) and
/// [`MultiSearch`](crate::batch::MultiSearch).
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn get(&self, index: &str, id: &str) -> SearchResult<RawResponse>;

    /// `HEAD /{index}/_doc/{id}`.
    async fn exists(&self, index: &str, id: &str) -> SearchResult<RawResponse>;

    async fn search(&self, index: &str, body: Value) -> SearchResult<RawResponse>;

    /// `POST /{index}/_update/{id}` with an update body (`doc`,
    /// `doc_as_upsert`, ...).
    async fn update(&self, index: &str, id: &str, body: Value) -> SearchResult<RawResponse>;

    async fn delete(&self, index: &str, id: &str) -> SearchResult<RawResponse>;

    async fn delete_by_query(&self, index: &str, body: Value) -> SearchResult<RawResponse>;

    async fn count(&self, index: &str, body: Value) -> SearchResult<RawResponse>;

    /// `POST /{index}/_bulk`; `lines` are the NDJSON action and source lines.
    async fn bulk(&self, index: &str, lines: Vec<Value>) -> SearchResult<RawResponse>;

    /// `POST /_msearch`; `lines` alternate header and body.
    async fn msearch(&self, lines: Vec<Value>) -> SearchResult<RawResponse>;
}

#[async_trait]
impl<T: SearchTransport + ?Sized> SearchTransport for Arc<T> {
    async fn get(&self, index: &str, id: &str) -> SearchResult<RawResponse> {
        (**self).get(index, id).await
    }

    async fn exists(&self, index: &str, id: &str) -> SearchResult<RawResponse> {
        (**self).exists(index, id).await
    }

    async fn search(&self, index: &str, body: Value) -> SearchResult<RawResponse> {
        (**self).search(index, body).await
    }

    async fn update(&self, index: &str, id: &str, body: Value) -> SearchResult<RawResponse> {
        (**self).update(index, id, body).await
    }

    async fn delete(&self, index: &str, id: &str) -> SearchResult<RawResponse> {
        (**self).delete(index, id).await
    }

    async fn delete_by_query(&self, index: &str, body: Value) -> SearchResult<RawResponse> {
        (**self).delete_by_query(index, body).await
    }

    async fn count(&self, index: &str, body: Value) -> SearchResult<RawResponse> {
        (**self).count(index, body).await
    }

    async fn bulk(&self, index: &str, lines: Vec<Value>) -> SearchResult<RawResponse> {
        (**self).bulk(index, lines).await
    }

    async fn msearch(&self, lines: Vec<Value>) -> SearchResult<RawResponse> {
        (**self).msearch(lines).await
    }
}

/// [`SearchTransport`] over the official client.
pub struct EsTransport {
    client: Elasticsearch,
    config: SearchConfig,
}

impl std::fmt::Debug for EsTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EsTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EsTransport {
    /// Builds a client from `config`. Does not connect.
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        let client = Self::build_client(&config)?;
        tracing::info!(node = config.primary_node(), "Elasticsearch client configured");
        Ok(Self { client, config })
    }

    /// Wraps an already configured client.
    pub fn from_client(client: Elasticsearch, config: SearchConfig) -> Self {
        Self { client, config }
    }

    fn build_client(config: &SearchConfig) -> SearchResult<Elasticsearch> {
        let url: elasticsearch::http::Url = config
            .primary_node()
            .parse()
            .map_err(|e| SearchError::Config(format!("invalid node URL: {}", e)))?;

        let conn_pool = SingleNodeConnectionPool::new(url);
        let mut builder = TransportBuilder::new(conn_pool)
            .timeout(Duration::from_millis(config.request_timeout_ms));

        if config.disable_certificate_validation {
            builder = builder.cert_validation(CertificateValidation::None);
        }

        if let Some(ref auth) = config.auth {
            builder = builder.auth(match auth {
                SearchAuth::Basic { username, password } => {
                    Credentials::Basic(username.clone(), password.clone())
                }
                SearchAuth::Bearer { token } => Credentials::Bearer(token.clone()),
                SearchAuth::ApiKey { id, api_key } => {
                    Credentials::ApiKey(id.clone(), api_key.clone())
                }
            });
        }

        let transport = builder
            .build()
            .map_err(|e| SearchError::Config(format!("failed to build transport: {}", e)))?;

        Ok(Elasticsearch::new(transport))
    }

    pub fn client(&self) -> &Elasticsearch {
        &self.client
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Reads status and body. Bodies that are not JSON are kept as text.
async fn read_response(response: Response) -> SearchResult<RawResponse> {
    let status = response.status_code().as_u16();
    let text = response.text().await?;
    let body = if text.is_empty() {
        Value::Null
    } else {
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => Value::String(text),
        }
    };
    Ok(RawResponse { status, body })
}

fn ndjson(lines: Vec<Value>) -> Vec<JsonBody<Value>> {
    lines.into_iter().map(JsonBody::new).collect()
}

#[async_trait]
impl SearchTransport for EsTransport {
    async fn get(&self, index: &str, id: &str) -> SearchResult<RawResponse> {
        tracing::debug!(index, id, "get");
        let response = self.client.get(GetParts::IndexId(index, id)).send().await?;
        read_response(response).await
    }

    async fn exists(&self, index: &str, id: &str) -> SearchResult<RawResponse> {
        tracing::debug!(index, id, "exists");
        let response = self
            .client
            .exists(ExistsParts::IndexId(index, id))
            .send()
            .await?;
        read_response(response).await
    }

    async fn search(&self, index: &str, body: Value) -> SearchResult<RawResponse> {
        tracing::debug!(index, "search");
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(body)
            .send()
            .await?;
        read_response(response).await
    }

    async fn update(&self, index: &str, id: &str, body: Value) -> SearchResult<RawResponse> {
        tracing::debug!(index, id, "update");
        let response = self
            .client
            .update(UpdateParts::IndexId(index, id))
            .body(body)
            .send()
            .await?;
        read_response(response).await
    }

    async fn delete(&self, index: &str, id: &str) -> SearchResult<RawResponse> {
        tracing::debug!(index, id, "delete");
        let response = self
            .client
            .delete(DeleteParts::IndexId(index, id))
            .send()
            .await?;
        read_response(response).await
    }

    async fn delete_by_query(&self, index: &str, body: Value) -> SearchResult<RawResponse> {
        tracing::debug!(index, "delete_by_query");
        let response = self
            .client
            .delete_by_query(DeleteByQueryParts::Index(&[index]))
            .body(body)
            .send()
            .await?;
        read_response(response).await
    }

    async fn count(&self, index: &str, body: Value) -> SearchResult<RawResponse> {
        tracing::debug!(index, "count");
        let response = self
            .client
            .count(CountParts::Index(&[index]))
            .body(body)
            .send()
            .await?;
        read_response(response).await
    }

    async fn bulk(&self, index: &str, lines: Vec<Value>) -> SearchResult<RawResponse> {
        tracing::debug!(index, lines = lines.len(), "bulk");
        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .body(ndjson(lines))
            .send()
            .await?;
        read_response(response).await
    }

    async fn msearch(&self, lines: Vec<Value>) -> SearchResult<RawResponse> {
        tracing::debug!(searches = lines.len() / 2, "msearch");
        let response = self
            .client
            .msearch(MsearchParts::None)
            .body(ndjson(lines))
            .send()
            .await?;
        read_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_body_success() {
        let response = RawResponse::new(200, json!({"found": true}));
        assert!(response.is_success());
        assert_eq!(response.into_body().unwrap(), json!({"found": true}));
    }

    #[test]
    fn test_into_body_failure_keeps_status_and_text() {
        let response = RawResponse::new(400, json!({"error": "bad"}));
        match response.into_body() {
            Err(SearchError::Response { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"error":"bad"}"#);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let response = RawResponse::new(502, Value::String("Bad Gateway".to_string()));
        match response.into_body() {
            Err(SearchError::Response { body, .. }) => assert_eq!(body, "Bad Gateway"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_transport_creation_does_not_connect() {
        let transport = EsTransport::new(SearchConfig::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_invalid_node_url_rejected() {
        let config = SearchConfig {
            nodes: vec!["not a url".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            EsTransport::new(config),
            Err(SearchError::Config(_))
        ));
    }

    #[test]
    fn test_transport_with_auth() {
        let config = SearchConfig {
            auth: Some(SearchAuth::Basic {
                username: "elastic".to_string(),
                password: "changeme".to_string(),
            }),
            disable_certificate_validation: true,
            nodes: vec!["https://localhost:9200".to_string()],
            ..Default::default()
        };
        assert!(EsTransport::new(config).is_ok());
    }
}
