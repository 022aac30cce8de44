pub mod burstiness;
pub mod config;
pub mod contractions;
pub mod hedge;
pub mod inject;
pub mod lexical;
pub mod pipeline;
pub mod punctuation;
pub mod rng;
pub mod tables;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use pipeline::{Pipeline, Stage, STAGES};
pub use rng::Lcg;
pub use types::TransformReport;

/// Rewrite `text` with the default policy.
///
/// The same `(text, Some(seed))` pair always produces byte-identical output.
/// Blank input yields an empty string.
pub fn transform(text: &str, seed: Option<u64>) -> String {
    Pipeline::default().run(text, seed)
}
