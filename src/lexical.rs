use log::debug;
use rand::RngCore;
use regex::Regex;
use std::sync::OnceLock;

use crate::config::PipelineConfig;
use crate::rng::{pick_index, shuffle, unit};
use crate::tables::SYNONYMS;
use crate::text::match_case;

/// Whole-word, case-insensitive matchers, one per synonym key, in table order.
fn key_regexes() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        SYNONYMS
            .iter()
            .map(|(key, _)| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(key)))
                    .expect("synonym key pattern is built from literals")
            })
            .collect()
    })
}

/// Replace the first occurrence of a budgeted number of synonym keys.
///
/// Draw order: one draw for the budget, one per shuffle step over the whole key
/// table, then one per selected key for its synonym.
pub fn apply<R: RngCore + ?Sized>(text: &str, rng: &mut R, config: &PipelineConfig) -> String {
    let spread = config.substitution_spread.max(1);
    let target = config.min_substitutions + (unit(rng) * spread as f64) as usize;

    let mut order: Vec<usize> = (0..SYNONYMS.len()).collect();
    shuffle(rng, &mut order);

    let regexes = key_regexes();
    let selected: Vec<usize> = order
        .into_iter()
        .filter(|&idx| regexes[idx].is_match(text))
        .take(target)
        .collect();

    let mut out = text.to_string();
    for idx in selected {
        let (_, synonyms) = SYNONYMS[idx];
        let synonym = synonyms[pick_index(rng, synonyms.len())];
        let Some(found) = regexes[idx].find(&out) else {
            continue;
        };
        let range = found.range();
        let replacement = match_case(found.as_str(), synonym);
        debug!("lexical: {:?} -> {:?}", found.as_str(), replacement);
        out.replace_range(range, &replacement);
    }

    out
}
