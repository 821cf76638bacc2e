//! Public types for the Nexus AI API.

mod options;
mod subject;

pub use options::GenerationOptions;
pub use subject::Subject;
