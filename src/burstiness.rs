use log::debug;
use rand::RngCore;

use crate::config::PipelineConfig;
use crate::rng::unit;
use crate::text::{capitalize_first, lowercase_first, sentences, word_count, TERMINATORS};

/// Vary sentence length: long sentences may be split in two, short ones may be
/// folded into their successor with ", and".
///
/// One draw is taken for every sentence whose length makes it a candidate,
/// whether or not the change is applied. A merged successor is consumed and
/// never considered on its own.
pub fn apply<R: RngCore + ?Sized>(text: &str, rng: &mut R, config: &PipelineConfig) -> String {
    let sentences = sentences(text);
    let mut out: Vec<String> = Vec::with_capacity(sentences.len() + 2);
    let mut i = 0;

    while i < sentences.len() {
        let sentence = sentences[i];
        let words = word_count(sentence);
        let is_last = i + 1 == sentences.len();

        if words > config.long_sentence_words {
            if unit(rng) < config.split_probability {
                let (head, tail) = split_sentence(sentence);
                debug!("burstiness: split sentence {} ({} words)", i, words);
                out.push(head);
                out.push(tail);
            } else {
                out.push(sentence.to_string());
            }
        } else if words < config.short_sentence_words && !is_last {
            if unit(rng) < config.merge_probability {
                debug!("burstiness: merged sentence {} into its successor", i);
                out.push(merge_sentences(sentence, sentences[i + 1]));
                i += 2;
                continue;
            }
            out.push(sentence.to_string());
        } else {
            out.push(sentence.to_string());
        }
        i += 1;
    }

    out.join(" ")
}

/// Split at the first comma or semicolon, falling back to the word midpoint when
/// there is none or when either side would be empty.
fn split_sentence(sentence: &str) -> (String, String) {
    if let Some(pos) = sentence.find([',', ';']) {
        let head = sentence[..pos].trim_end();
        let tail = sentence[pos + 1..].trim_start();
        if !head.is_empty() && word_count(tail) > 0 {
            return (terminate(head), capitalize_first(tail));
        }
    }

    let words: Vec<&str> = sentence.split_whitespace().collect();
    let mid = words.len() / 2;
    let head = words[..mid].join(" ");
    let tail = words[mid..].join(" ");
    (terminate(head.trim_end_matches([',', ';', ':'])), capitalize_first(&tail))
}

fn terminate(fragment: &str) -> String {
    if fragment.ends_with(&TERMINATORS[..]) {
        fragment.to_string()
    } else {
        format!("{}.", fragment)
    }
}

fn merge_sentences(first: &str, next: &str) -> String {
    let stem = first.trim_end_matches(&TERMINATORS[..]);
    format!("{}, and {}", stem, lowercase_first(next))
}
