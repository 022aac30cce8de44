use log::debug;
use rand::RngCore;
use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::rng::unit;
use crate::tables::{CONTRACTIONS, KEPT_CONTRACTIONS};
use crate::text::match_case;

fn contraction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let stems: Vec<&str> = CONTRACTIONS.iter().map(|(stem, _)| *stem).collect();
        let pattern = format!(r"(?i)\b({})['’]t\b", stems.join("|"));
        Regex::new(&pattern).expect("contraction pattern is built from literals")
    })
}

fn expansion(stem: &str) -> Option<&'static str> {
    CONTRACTIONS
        .iter()
        .find(|(s, _)| s.eq_ignore_ascii_case(stem))
        .map(|(_, full)| *full)
}

/// Expand every known n't contraction except the first occurrence of one kept
/// token, `isn't` or `won't`, chosen by a single draw.
pub fn apply<R: RngCore + ?Sized>(text: &str, rng: &mut R) -> String {
    let kept = if unit(rng) < 0.5 {
        KEPT_CONTRACTIONS[0]
    } else {
        KEPT_CONTRACTIONS[1]
    };
    let mut kept_one = false;
    let mut expanded = 0usize;

    let out = contraction_regex().replace_all(text, |caps: &Captures| {
        let token = &caps[0];
        let stem = &caps[1];
        if !kept_one && stem.eq_ignore_ascii_case(kept) {
            kept_one = true;
            return token.to_string();
        }
        match expansion(stem) {
            Some(full) => {
                expanded += 1;
                match_case(token, full)
            }
            None => token.to_string(),
        }
    });

    debug!("contractions: expanded {}, kept {}'t: {}", expanded, kept, kept_one);
    out.into_owned()
}

/// Number of known n't contractions in `text`.
pub fn count(text: &str) -> usize {
    contraction_regex().find_iter(text).count()
}
