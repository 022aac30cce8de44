use log::debug;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::PipelineConfig;
use crate::tables::{HEDGE_ALTERNATIVES, HEDGE_WORDS};
use crate::text::{match_case, word_count};

fn hedge_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"(?i)\b({})\b", HEDGE_WORDS.join("|"));
        Regex::new(&pattern).expect("hedge pattern is built from literals")
    })
}

fn alternatives(hedge: &str) -> &'static [&'static str] {
    HEDGE_ALTERNATIVES
        .iter()
        .find(|(h, _)| h.eq_ignore_ascii_case(hedge))
        .map(|(_, alts)| *alts)
        .unwrap_or(&[])
}

/// Count of whole-word, case-insensitive hedge matches.
pub fn count(text: &str) -> usize {
    hedge_regex().find_iter(text).count()
}

/// Keep the first `quota` hedges and swap every later one for an alternative,
/// cycling through that hedge's list. Takes no draws.
pub fn apply(text: &str, config: &PipelineConfig) -> String {
    let quota = config.hedge_quota(word_count(text));
    let mut retained = 0usize;
    let mut cursors: HashMap<String, usize> = HashMap::new();

    let out = hedge_regex().replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        if retained < quota {
            retained += 1;
            return matched.to_string();
        }
        let key = matched.to_lowercase();
        let alts = alternatives(&key);
        if alts.is_empty() {
            return matched.to_string();
        }
        let cursor = cursors.entry(key).or_insert(0);
        let replacement = alts[*cursor % alts.len()];
        *cursor += 1;
        match_case(matched, replacement)
    });

    let replaced: usize = cursors.values().sum();
    debug!(
        "hedge throttle: quota {}, retained {}, replaced {}",
        quota, retained, replaced
    );
    out.into_owned()
}
