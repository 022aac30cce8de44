use log::debug;
use rand::RngCore;

use crate::rng::pick_index;
use crate::text::word_spans;

pub const EN_DASH: &str = " –";

/// Turn one comma into a semicolon and hang an en-dash off one interior word.
///
/// Each half is skipped, without drawing, when the text has no commas or fewer
/// than four words respectively.
pub fn apply<R: RngCore + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut out = text.to_string();

    let commas: Vec<usize> = out.match_indices(',').map(|(idx, _)| idx).collect();
    if !commas.is_empty() {
        let at = commas[pick_index(rng, commas.len())];
        out.replace_range(at..at + 1, ";");
        debug!("punctuation: comma at byte {} became a semicolon", at);
    }

    let words = word_spans(&out);
    if words.len() >= 4 {
        let idx = 1 + pick_index(rng, words.len() - 2);
        let at = words[idx].end;
        out.insert_str(at, EN_DASH);
        debug!("punctuation: en-dash after word {}", idx);
    }

    out
}
