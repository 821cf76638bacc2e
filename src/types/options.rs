//! Generation options sent with every remote request.

use serde::{Deserialize, Serialize};

/// Sampling configuration forwarded as the request's `generationConfig`.
///
/// Defaults match what the NEXUS UI ships with; override through the
/// chained setters.
///
/// ```rust
/// # use nexus_ai::GenerationOptions;
/// let options = GenerationOptions::default().temperature(0.9).max_output_tokens(1024);
/// assert_eq!(options.max_output_tokens, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }
}
