//! Client construction and orchestration.

mod builder;
mod client;

pub use builder::{NexusAi, NexusAiBuilder};
pub use client::ContentClient;
