//! Gemini generative-language client with endpoint fallback.
//!
//! The client holds an ordered list of model endpoints and tries them
//! strictly in sequence: the next endpoint is only attempted after the
//! previous one has failed, bounding outbound requests to one at a time
//! against a rate-limited API. There are no per-endpoint retries and no
//! parallel racing. The first endpoint that yields a well-formed reply
//! wins; exhausting the list returns the last error (or
//! [`NexusAiError::NoEndpoint`]), which callers treat as "no remote
//! content".
//!
//! See: <https://ai.google.dev/api/generate-content>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::traits::GenerateProvider;
use crate::telemetry;
use crate::types::GenerationOptions;
use crate::{NexusAiError, Result};

/// Model endpoints tried in order. Newest model first; the older entries
/// exist because the newest one is the first to be rate limited or retired.
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent",
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent",
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent",
];

/// Per-endpoint attempt timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    http: Client,
    endpoints: Vec<String>,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a client against the default endpoint list.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoints(
            api_key,
            DEFAULT_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        )
    }

    /// Create a client with a custom endpoint list (for testing with
    /// wiremock, or for self-hosted proxies).
    pub fn with_endpoints(api_key: impl Into<String>, endpoints: Vec<String>) -> Self {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            http,
            endpoints,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-endpoint attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured endpoint list, in attempt order.
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// One attempt against one endpoint.
    async fn attempt(&self, endpoint: &str, request: &GenerateRequest<'_>) -> Result<String> {
        let send = self
            .http
            .post(endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send();

        let response = tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| NexusAiError::Timeout(self.timeout))?
            .map_err(|e| NexusAiError::Http(e.to_string()))?;

        Self::handle_response_errors(&response)?;

        let reply: GenerateReply = tokio::time::timeout(self.timeout, response.json())
            .await
            .map_err(|_| NexusAiError::Timeout(self.timeout))?
            .map_err(|e| NexusAiError::Http(e.to_string()))?;

        extract_text(reply).ok_or(NexusAiError::EmptyResponse)
    }

    /// Check response status and map to the appropriate error.
    fn handle_response_errors(response: &reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        match status.as_u16() {
            401 | 403 => Err(NexusAiError::AuthenticationFailed),
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                Err(NexusAiError::RateLimited { retry_after })
            }
            code => Err(NexusAiError::Api {
                status: code,
                message: format!("Gemini API error: {status}"),
            }),
        }
    }
}

#[async_trait]
impl GenerateProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: options,
        };

        let mut last_err = None;
        for endpoint in &self.endpoints {
            match self.attempt(endpoint, &request).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    metrics::counter!(telemetry::ENDPOINT_FAILURES_TOTAL,
                        "endpoint" => endpoint.clone(),
                    )
                    .increment(1);
                    warn!(endpoint = %endpoint, error = %e, "endpoint attempt failed, trying next");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or(NexusAiError::NoEndpoint))
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: &'a GenerationOptions,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response envelope for `generateContent`.
///
/// Every level is optional or defaulted: the extractor must tolerate any
/// missing intermediate field instead of failing to deserialize.
#[derive(Debug, Deserialize)]
pub struct GenerateReply {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyPart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Pull the generated text out of a reply envelope.
///
/// Looks at the first candidate's first content part. Absence anywhere on
/// that path, or empty text, yields `None`.
pub fn extract_text(reply: GenerateReply) -> Option<String> {
    reply
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
        .filter(|t| !t.is_empty())
}
