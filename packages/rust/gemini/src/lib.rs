//! Generation client for a Gemini-style `generateContent` endpoint.
//!
//! This crate is the engine's only network-I/O boundary. One call to
//! [`TextGenerator::generate`] performs exactly one HTTP POST — no retries,
//! no response caching, no shared global client. Callers that want retries
//! issue fully independent requests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use agriguide_shared::{AgriGuideError, AppConfig, Result, endpoint_url, resolve_api_key};

/// User-Agent string for generation requests.
const USER_AGENT: &str = concat!("AgriGuide/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// TextGenerator trait
// ---------------------------------------------------------------------------

/// The injected seam between the orchestration pipeline and the network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` as the sole content of a single generation request and
    /// return the raw generated text.
    ///
    /// Performs exactly one attempt. Fails with
    /// [`Transport`](AgriGuideError::Transport) on any non-success transport
    /// outcome and with [`EmptyResponse`](AgriGuideError::EmptyResponse) when
    /// the decoded payload carries no generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

// Request body: {"contents":[{"parts":[{"text": <prompt>}]}]}
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    fn for_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

// Response body: {"candidates":[{"content":{"parts":[{"text": ...}]}}]}
// All fields default so that a structurally valid but content-free payload
// decodes cleanly and maps to EmptyResponse instead of a decode error.
#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// The generated text at the fixed path `candidates[0].content.parts[0].text`,
    /// or `None` when any step of the path is absent or the text is empty.
    fn into_text(self) -> Option<String> {
        let part = self
            .candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .next()?;
        if part.text.is_empty() {
            None
        } else {
            Some(part.text)
        }
    }
}

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

/// HTTP client for one configured generation endpoint.
///
/// Constructed explicitly and injected into the pipeline — there is no
/// process-wide client instance.
pub struct GeminiClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl GeminiClient {
    /// Create a client for `endpoint`, authenticating with `api_key`.
    pub fn new(endpoint: Url, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AgriGuideError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Create a client from the application config, reading the API key from
    /// the configured environment variable.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let endpoint = endpoint_url(config)?;
        let api_key = resolve_api_key(config)?;
        Self::new(endpoint, api_key)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip_all, fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest::for_prompt(prompt);

        // The key rides in the query string, so error messages must never
        // echo the request URL.
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgriGuideError::transport(format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgriGuideError::transport(format!(
                "generation endpoint returned HTTP {status}"
            )));
        }

        let payload: GenerateResponse = response.json().await.map_err(|e| {
            AgriGuideError::transport(format!(
                "failed to decode response body: {}",
                e.without_url()
            ))
        })?;

        match payload.into_text() {
            Some(text) => {
                debug!(response_len = text.len(), "generation complete");
                Ok(text)
            }
            None => Err(AgriGuideError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GeminiClient {
        let endpoint = Url::parse(&format!("{}/v1beta/models/gemini-pro:generateContent", server.uri()))
            .unwrap();
        GeminiClient::new(endpoint, "test-key".into()).unwrap()
    }

    fn text_response(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] }
            }]
        })
    }

    #[test]
    fn request_body_has_exact_wire_shape() {
        let request = GenerateRequest::for_prompt("hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"contents":[{"parts":[{"text":"hello"}]}]})
        );
    }

    #[test]
    fn response_text_path_is_first_candidate_first_part() {
        let payload: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(payload.into_text().as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn generate_posts_once_and_returns_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_json(
                serde_json::json!({"contents":[{"parts":[{"text":"describe goats"}]}]}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("[FEEDING]hay[END]")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let text = client.generate("describe goats").await.unwrap();
        assert_eq!(text, "[FEEDING]hay[END]");
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1) // exactly one attempt, no internal retry
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AgriGuideError::Transport(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AgriGuideError::Transport(_)));
    }

    #[tokio::test]
    async fn missing_candidates_is_an_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AgriGuideError::EmptyResponse));
    }

    #[tokio::test]
    async fn candidate_without_parts_is_an_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [] } }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AgriGuideError::EmptyResponse));
    }

    #[tokio::test]
    async fn empty_text_is_an_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("")))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AgriGuideError::EmptyResponse));
    }

    #[tokio::test]
    async fn errors_never_leak_the_api_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let endpoint = Url::parse(&format!("{}/generate", server.uri())).unwrap();
        let client = GeminiClient::new(endpoint, "sekrit-key-value".into()).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(!err.to_string().contains("sekrit-key-value"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error_without_the_key() {
        // Bind-then-drop leaves a port nothing is listening on.
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let endpoint = Url::parse(&format!("{uri}/generate")).unwrap();
        let client = GeminiClient::new(endpoint, "sekrit-key-value".into()).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AgriGuideError::Transport(_)));
        assert!(!err.to_string().contains("sekrit-key-value"));
    }
}
