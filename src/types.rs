use serde::{Deserialize, Serialize};

/// Result of one pipeline run, with the figures downstream metering needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformReport {
    pub text: String,
    /// The seed actually used; replaying it reproduces `text` exactly.
    pub seed: u64,
    /// Word count of the input, which is what usage is billed on.
    pub original_word_count: usize,
    pub output_word_count: usize,
    pub hedge_quota: usize,
    pub hedges_remaining: usize,
}
