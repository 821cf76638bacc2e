//! ContentClient — the orchestrator behind the public operations.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::cache::ContentCache;
use crate::providers::GenerateProvider;
use crate::types::{GenerationOptions, Subject};
use crate::{fallback, prompt, telemetry};

/// AI content client for the NEXUS UI.
///
/// Both operations are infallible by design: a cache hit, remote text, or
/// offline template text always comes back, never an error. The worst case
/// a caller can observe is degraded content quality.
///
/// Flow for [`spoilers`](ContentClient::spoilers): cache → prompt → remote
/// endpoints in order → extract → cache put. Total remote failure (or no
/// configured credential) substitutes the deterministic template, which is
/// cached through the same path and overwritten by a later regeneration
/// once it expires.
pub struct ContentClient {
    provider: Option<Arc<dyn GenerateProvider>>,
    cache: ContentCache,
    options: GenerationOptions,
}

impl ContentClient {
    pub(crate) fn new(
        provider: Option<Arc<dyn GenerateProvider>>,
        cache: ContentCache,
        options: GenerationOptions,
    ) -> Self {
        Self {
            provider,
            cache,
            options,
        }
    }

    /// Whether a remote provider is configured. `false` means every request
    /// is answered offline.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Full spoiler narrative for a subject.
    pub async fn spoilers(&self, subject: &Subject) -> String {
        let start = Instant::now();

        if let Some(content) = self.cache.get(&subject.id) {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "operation" => "spoilers").increment(1);
            debug!(subject = %subject.id, "spoiler cache hit");
            Self::record_request("spoilers", start, "ok");
            return content;
        }
        metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "operation" => "spoilers").increment(1);

        let request = prompt::spoiler_prompt(subject);
        let (content, status) = match self.generate(&request).await {
            Some(text) => (text, "ok"),
            None => (fallback::spoiler_fallback(subject), "fallback"),
        };
        if status == "fallback" {
            Self::record_fallback("spoilers", self.provider.is_some());
        }

        self.cache.put(&subject.id, &content);
        Self::record_request("spoilers", start, status);
        content
    }

    /// Short recommendation reply for a free-form chat message.
    ///
    /// Not cached — there is no subject id to key on.
    pub async fn recommend(&self, user_message: &str) -> String {
        let start = Instant::now();

        let request = prompt::recommendation_prompt(user_message);
        let (content, status) = match self.generate(&request).await {
            Some(text) => (text, "ok"),
            None => (fallback::recommendation_fallback(), "fallback"),
        };
        if status == "fallback" {
            Self::record_fallback("recommend", self.provider.is_some());
        }

        Self::record_request("recommend", start, status);
        content
    }

    /// One remote generation round, or `None` when offline content is due.
    async fn generate(&self, request: &str) -> Option<String> {
        let provider = match &self.provider {
            Some(p) => p,
            None => {
                debug!("no credential configured, serving offline template");
                return None;
            }
        };
        match provider.generate(request, &self.options).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(
                    provider = provider.name(),
                    error = %e,
                    "remote generation failed, serving offline template"
                );
                None
            }
        }
    }

    fn record_request(operation: &'static str, start: Instant, status: &'static str) {
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "operation" => operation,
            "status" => status,
        )
        .increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "operation" => operation)
            .record(start.elapsed().as_secs_f64());
    }

    fn record_fallback(operation: &'static str, had_provider: bool) {
        let reason = if had_provider {
            "exhausted"
        } else {
            "no_credential"
        };
        metrics::counter!(telemetry::FALLBACKS_TOTAL,
            "operation" => operation,
            "reason" => reason,
        )
        .increment(1);
    }
}
