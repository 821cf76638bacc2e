//! Remote generation providers.

pub mod gemini;
pub mod traits;

pub use gemini::{extract_text, GeminiClient, GenerateReply, DEFAULT_ENDPOINTS};
pub use traits::GenerateProvider;
