//! HTTP client for a mem0-compatible memory service.

use memlink_core::config::MemlinkConfig;
use memlink_core::error::{MemlinkError, MemlinkResult};
use memlink_core::types::{AddMemoryRequest, ListMemoriesQuery, SearchRequest};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Headers attached to every request.
///
/// `Authorization: Bearer <key>` is only present when a non-empty key is
/// configured.
pub fn default_headers(api_key: Option<&SecretString>) -> MemlinkResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(key) = api_key.filter(|k| !k.expose_secret().is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", key.expose_secret()))
            .map_err(|_| {
                MemlinkError::configuration("MEM0_API_KEY is not a valid header value")
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// Client for the memory service REST API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct MemoryClient {
    client: Client,
    base_url: Url,
}

impl MemoryClient {
    /// Create a client from adapter configuration.
    pub fn new(config: &MemlinkConfig) -> MemlinkResult<Self> {
        let client = Client::builder()
            .default_headers(default_headers(config.api_key.as_ref())?)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                MemlinkError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    /// Submit a memory for storage (`POST /memories`).
    pub async fn add(&self, request: &AddMemoryRequest) -> MemlinkResult<Value> {
        let url = self.endpoint(&["memories"])?;
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, url, Some(body)).await
    }

    /// Search memories (`POST /search`).
    pub async fn search(&self, request: &SearchRequest) -> MemlinkResult<Value> {
        let url = self.endpoint(&["search"])?;
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, url, Some(body)).await
    }

    /// List memories (`GET /memories?user_id=..&limit=..[&agent_id=..]`).
    pub async fn list(&self, query: &ListMemoriesQuery) -> MemlinkResult<Value> {
        let mut url = self.endpoint(&["memories"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("user_id", &query.user_id)
                .append_pair("limit", &query.limit.to_string());
            if let Some(agent_id) = &query.agent_id {
                pairs.append_pair("agent_id", agent_id);
            }
        }
        self.request(Method::GET, url, None).await
    }

    /// Delete one memory (`DELETE /memories/{id}`).
    ///
    /// The id is encoded as a single path segment, so `/` inside it does not
    /// split the path. `.` and `..` are rejected: URL normalization removes
    /// them even when percent-encoded, which would target `/memories` itself.
    pub async fn delete(&self, memory_id: &str) -> MemlinkResult<Value> {
        if is_dot_segment(memory_id) {
            return Err(MemlinkError::validation(format!(
                "memory_id '{}' cannot be used as a path segment",
                memory_id
            )));
        }
        let url = self.endpoint(&["memories", memory_id])?;
        self.request(Method::DELETE, url, None).await
    }

    fn endpoint(&self, segments: &[&str]) -> MemlinkResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MemlinkError::configuration("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request(&self, method: Method, url: Url, body: Option<Value>) -> MemlinkResult<Value> {
        debug!(%method, %url, "Sending request to memory service");

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(MemlinkError::api(status.as_u16(), text));
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| MemlinkError::parse(format!("Failed to parse response: {}", e)))
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_without_key() {
        let headers = default_headers(None).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_headers_with_key() {
        let key = SecretString::new("sk-123".to_string());
        let headers = default_headers(Some(&key)).unwrap();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(auth, "Bearer sk-123");
        assert!(auth.is_sensitive());
    }

    #[test]
    fn test_headers_ignore_empty_key() {
        let key = SecretString::new(String::new());
        let headers = default_headers(Some(&key)).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_headers_reject_invalid_key() {
        let key = SecretString::new("bad\nkey".to_string());
        let err = default_headers(Some(&key)).unwrap_err();
        assert!(matches!(err, MemlinkError::Configuration(_)));
    }

    fn client_for(base: &str) -> MemoryClient {
        let base = base.to_string();
        let config = MemlinkConfig::from_lookup(move |key| {
            (key == "MEM0_API_URL").then(|| base.clone())
        })
        .unwrap();
        MemoryClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let client = client_for("http://localhost:29476");
        let url = client.endpoint(&["memories"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:29476/memories");
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let client = client_for("https://mem.example.com/api/");
        let url = client.endpoint(&["search"]).unwrap();
        assert_eq!(url.as_str(), "https://mem.example.com/api/search");
    }

    #[test]
    fn test_dot_segments_detected() {
        assert!(is_dot_segment("."));
        assert!(is_dot_segment(".."));
        assert!(is_dot_segment("%2E%2e"));
        assert!(!is_dot_segment("..."));
        assert!(!is_dot_segment(".hidden"));
    }

    #[test]
    fn test_endpoint_encodes_slash_in_segment() {
        let client = client_for("http://localhost:29476");
        let url = client.endpoint(&["memories", "a/b c"]).unwrap();
        assert_eq!(url.path(), "/memories/a%2Fb%20c");
    }
}
