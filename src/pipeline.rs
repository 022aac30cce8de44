use log::{debug, trace};
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;

use crate::config::PipelineConfig;
use crate::rng::Lcg;
use crate::text::word_count;
use crate::types::TransformReport;
use crate::{burstiness, contractions, hedge, inject, lexical, punctuation};

/// The rewriting stages, in the only order they ever run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Burstiness,
    Contractions,
    HedgeThrottle,
    LexicalSubstitution,
    DatumInjection,
    AsideInjection,
    PunctuationNoise,
}

pub const STAGES: [Stage; 7] = [
    Stage::Burstiness,
    Stage::Contractions,
    Stage::HedgeThrottle,
    Stage::LexicalSubstitution,
    Stage::DatumInjection,
    Stage::AsideInjection,
    Stage::PunctuationNoise,
];

impl Stage {
    pub fn apply<R: RngCore + ?Sized>(
        self,
        text: &str,
        rng: &mut R,
        config: &PipelineConfig,
    ) -> String {
        match self {
            Stage::Burstiness => burstiness::apply(text, rng, config),
            Stage::Contractions => contractions::apply(text, rng),
            Stage::HedgeThrottle => hedge::apply(text, config),
            Stage::LexicalSubstitution => lexical::apply(text, rng, config),
            Stage::DatumInjection => inject::DATUM.inject(text, rng),
            Stage::AsideInjection => inject::ASIDE.inject(text, rng),
            Stage::PunctuationNoise => punctuation::apply(text, rng),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Burstiness => "burstiness",
            Stage::Contractions => "contractions",
            Stage::HedgeThrottle => "hedge-throttle",
            Stage::LexicalSubstitution => "lexical-substitution",
            Stage::DatumInjection => "datum-injection",
            Stage::AsideInjection => "aside-injection",
            Stage::PunctuationNoise => "punctuation-noise",
        };
        f.write_str(name)
    }
}

/// Runs every stage over one freshly seeded generator per call.
///
/// The pipeline holds only its policy, so one instance can serve any number of
/// threads; no generator state survives between calls.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Transform `text`. With `seed: None` a random seed is drawn and the output
    /// is not reproducible.
    pub fn run(&self, text: &str, seed: Option<u64>) -> String {
        self.run_with_report(text, seed).text
    }

    pub fn run_with_report(&self, text: &str, seed: Option<u64>) -> TransformReport {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen::<u32>().into());
        let original_word_count = word_count(text);

        if text.trim().is_empty() {
            return TransformReport {
                text: String::new(),
                seed,
                original_word_count,
                output_word_count: 0,
                hedge_quota: 0,
                hedges_remaining: 0,
            };
        }

        let mut rng = Lcg::seed_from_u64(seed);
        let mut current = text.to_string();
        for stage in STAGES {
            current = stage.apply(&current, &mut rng, &self.config);
            trace!(
                "{}: {} words, {} bytes, rng state {}",
                stage,
                word_count(&current),
                current.len(),
                rng.state()
            );
        }

        let output_word_count = word_count(&current);
        let hedges_remaining = hedge::count(&current);
        debug!(
            "pipeline: seed {}, {} -> {} words, {} hedges",
            seed, original_word_count, output_word_count, hedges_remaining
        );

        TransformReport {
            text: current,
            seed,
            original_word_count,
            output_word_count,
            hedge_quota: self.config.hedge_quota(output_word_count),
            hedges_remaining,
        }
    }
}
