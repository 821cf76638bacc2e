//! Builder for configuring client instances

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::ContentClient;
use crate::cache::ContentCache;
use crate::providers::{GeminiClient, GenerateProvider};
use crate::types::GenerationOptions;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Main entry point for creating client instances.
pub struct NexusAi;

impl NexusAi {
    /// Create a new builder for configuring the client.
    pub fn builder() -> NexusAiBuilder {
        NexusAiBuilder::new()
    }

    /// Build a client from process configuration.
    ///
    /// Reads the credential from [`API_KEY_ENV`]; when the variable is
    /// unset or empty, the client serves offline templates only and never
    /// touches the network.
    pub fn from_env() -> ContentClient {
        let mut builder = Self::builder();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                builder = builder.api_key(key);
            }
        }
        builder.build()
    }
}

/// Builder for configuring client instances.
pub struct NexusAiBuilder {
    api_key: Option<String>,
    endpoints: Option<Vec<String>>,
    timeout: Option<Duration>,
    options: GenerationOptions,
    cache_path: Option<PathBuf>,
    cache_max_entries: Option<usize>,
    cache_ttl: Option<Duration>,
    provider: Option<Arc<dyn GenerateProvider>>,
}

impl NexusAiBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            endpoints: None,
            timeout: None,
            options: GenerationOptions::default(),
            cache_path: None,
            cache_max_entries: None,
            cache_ttl: None,
            provider: None,
        }
    }

    /// Set the Gemini API credential. Without one (and without an injected
    /// provider), every request is answered from offline templates.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the endpoint list tried in order (for testing with
    /// wiremock, or for self-hosted proxies).
    pub fn endpoints(mut self, endpoints: Vec<String>) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Set the per-endpoint attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the sampling options sent with every remote request.
    pub fn options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the spoiler cache file path (default:
    /// `~/.cache/nexus-ai/spoilers.json`).
    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Override the spoiler cache capacity cap.
    pub fn cache_max_entries(mut self, n: usize) -> Self {
        self.cache_max_entries = Some(n);
        self
    }

    /// Override the spoiler cache retention window.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Inject a custom generation provider, replacing the Gemini client.
    /// Intended for tests and embedding scenarios.
    pub fn provider(mut self, provider: Arc<dyn GenerateProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the client.
    pub fn build(self) -> ContentClient {
        let provider: Option<Arc<dyn GenerateProvider>> = match (self.provider, self.api_key) {
            (Some(provider), _) => Some(provider),
            (None, Some(key)) => {
                let mut client = match self.endpoints {
                    Some(endpoints) => GeminiClient::with_endpoints(key, endpoints),
                    None => GeminiClient::new(key),
                };
                if let Some(timeout) = self.timeout {
                    client = client.timeout(timeout);
                }
                Some(Arc::new(client))
            }
            (None, None) => {
                debug!("no credential configured; all content will be served offline");
                None
            }
        };

        let mut cache = match self.cache_path {
            Some(path) => ContentCache::with_path(path),
            None => ContentCache::new(),
        };
        if let Some(n) = self.cache_max_entries {
            cache = cache.max_entries(n);
        }
        if let Some(ttl) = self.cache_ttl {
            cache = cache.ttl(ttl);
        }

        ContentClient::new(provider, cache, self.options)
    }
}

impl Default for NexusAiBuilder {
    fn default() -> Self {
        Self::new()
    }
}
