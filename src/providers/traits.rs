//! Provider trait for remote text generation.

use async_trait::async_trait;

use crate::types::GenerationOptions;
use crate::Result;

/// A remote service that turns a prompt into generated text.
///
/// The gateway owns one provider behind this seam; tests substitute mocks
/// for it. An `Err` from [`generate`](GenerateProvider::generate) means "no
/// remote content" — the gateway answers with offline template text instead
/// of propagating the failure.
#[async_trait]
pub trait GenerateProvider: Send + Sync {
    /// Provider name for logs and metrics.
    fn name(&self) -> &str;

    /// Generate text for a prompt.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
}
