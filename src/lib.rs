//! Nexus AI - content client for the NEXUS streaming UI
//!
//! This crate generates spoiler narratives and chat recommendations for
//! catalog titles by calling a remote generative-language API (Gemini),
//! trying an ordered list of model endpoints until one answers. When no
//! credential is configured or every endpoint fails, deterministic offline
//! templates stand in — the public operations never fail. Generated
//! spoilers are kept in a bounded on-disk cache (50 entries, 7-day
//! retention) keyed by subject id.
//!
//! # Spoiler Example
//!
//! ```rust,no_run
//! use nexus_ai::{NexusAi, Subject};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = NexusAi::builder()
//!         .api_key("your-gemini-key")
//!         .build();
//!
//!     let subject = Subject::new("27205", "Inception")
//!         .release_year(2010)
//!         .overview("A thief who steals corporate secrets through dream-sharing technology.")
//!         .genres(["Sci-Fi", "Thriller"]);
//!
//!     println!("{}", client.spoilers(&subject).await);
//! }
//! ```
//!
//! # Recommendation Example
//!
//! ```rust,no_run
//! use nexus_ai::NexusAi;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Reads GEMINI_API_KEY; without it, replies come from offline templates.
//!     let client = NexusAi::from_env();
//!     println!("{}", client.recommend("something like Blade Runner").await);
//! }
//! ```

pub mod cache;
pub mod error;
pub mod fallback;
pub mod gateway;
pub mod prompt;
pub mod providers;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheEntry, ContentCache, DEFAULT_MAX_ENTRIES, DEFAULT_TTL};
pub use error::{NexusAiError, Result};
pub use gateway::{ContentClient, NexusAi, NexusAiBuilder};
pub use providers::{GeminiClient, GenerateProvider};

// Re-export all types
pub use types::{GenerationOptions, Subject};
