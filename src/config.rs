use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Command-line configuration for the `humanize` binary
#[derive(Debug, Clone, Parser)]
#[command(name = "humanize")]
#[command(about = "Rewrite machine-generated prose with a reproducible, human-looking rhythm")]
pub struct Config {
    /// Text to transform (takes precedence over --input and stdin)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read the text from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Seed for the decision sequence; omit for a random (non-reproducible) run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of variations to produce; variation k uses seed + k
    #[arg(long, default_value = "1")]
    pub variations: usize,

    /// JSON file overriding the pipeline policy (thresholds, quotas, probabilities)
    #[arg(long)]
    pub pipeline_config: Option<PathBuf>,

    /// Emit one JSON report per variation instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Also write log records to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Tunable policy for the rewriting stages.
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Sentences with more words than this may be split
    pub long_sentence_words: usize,
    /// Sentences with fewer words than this may be merged into the next one
    pub short_sentence_words: usize,
    pub split_probability: f64,
    pub merge_probability: f64,
    /// Hedge words allowed per `hedge_window_words` words of text
    pub hedge_allowance: usize,
    pub hedge_window_words: usize,
    /// Lexical substitutions per run fall in `min..min + spread`
    pub min_substitutions: usize,
    pub substitution_spread: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            long_sentence_words: 20,
            short_sentence_words: 8,
            split_probability: 0.3,
            merge_probability: 0.2,
            hedge_allowance: 6,
            hedge_window_words: 700,
            min_substitutions: 5,
            substitution_spread: 3,
        }
    }
}

impl PipelineConfig {
    /// Load a pipeline policy from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pipeline config from {:?}", path))?;
        let config: PipelineConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse pipeline config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hedge_window_words == 0 {
            bail!("hedge_window_words must be greater than zero");
        }
        for (name, p) in [
            ("split_probability", self.split_probability),
            ("merge_probability", self.merge_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                bail!("{} must be within [0, 1], got {}", name, p);
            }
        }
        if self.short_sentence_words > self.long_sentence_words {
            bail!(
                "short_sentence_words ({}) exceeds long_sentence_words ({})",
                self.short_sentence_words,
                self.long_sentence_words
            );
        }
        if self.substitution_spread == 0 {
            bail!("substitution_spread must be at least 1");
        }
        Ok(())
    }

    /// `ceil(word_count / hedge_window_words * hedge_allowance)`, in integer arithmetic.
    pub fn hedge_quota(&self, word_count: usize) -> usize {
        let window = self.hedge_window_words.max(1);
        (word_count * self.hedge_allowance).div_ceil(window)
    }
}
