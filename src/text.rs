use std::ops::Range;

/// Characters that end a sentence when followed by whitespace.
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Byte ranges of each sentence, terminator included, surrounding whitespace excluded.
///
/// A sentence ends at `.`, `!` or `?` immediately followed by whitespace. Text after
/// the last such boundary forms a final sentence even without a terminator.
pub fn sentence_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !TERMINATORS.contains(&c) {
            continue;
        }
        let followed_by_space = chars.peek().is_some_and(|&(_, next)| next.is_whitespace());
        if followed_by_space {
            let end = idx + c.len_utf8();
            push_trimmed(text, start..end, &mut spans);
            start = end;
        }
    }
    push_trimmed(text, start..text.len(), &mut spans);

    spans
}

fn push_trimmed(text: &str, range: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let slice = &text[range.clone()];
    let trimmed = slice.trim_start();
    let start = range.start + (slice.len() - trimmed.len());
    let end = start + trimmed.trim_end().len();
    if end > start {
        spans.push(start..end);
    }
}

/// Sentences as slices of `text`.
pub fn sentences(text: &str) -> Vec<&str> {
    sentence_spans(text)
        .into_iter()
        .map(|span| &text[span])
        .collect()
}

/// Byte ranges of whitespace-separated words.
pub fn word_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut current: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), current) {
            (true, Some(start)) => {
                spans.push(start..idx);
                current = None;
            }
            (false, None) => current = Some(idx),
            _ => {}
        }
    }
    if let Some(start) = current {
        spans.push(start..text.len());
    }

    spans
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Byte offset where a trailing run of sentence terminators begins, if any.
pub fn terminator_start(sentence: &str) -> Option<usize> {
    let stripped = sentence.trim_end_matches(&TERMINATORS[..]);
    (stripped.len() < sentence.len()).then_some(stripped.len())
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first letter unless the leading word is the pronoun "I"
/// (or one of its contractions) or looks like an acronym.
pub fn lowercase_first(s: &str) -> String {
    let first_word = s.split_whitespace().next().unwrap_or("");
    let is_pronoun =
        first_word == "I" || first_word.starts_with("I'") || first_word.starts_with("I’");
    let is_acronym = first_word.chars().filter(|c| c.is_uppercase()).count() > 1;
    if is_pronoun || is_acronym {
        return s.to_string();
    }

    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shape `replacement` after the capitalization of `original`: all caps stays all
/// caps, a leading capital stays a leading capital, anything else is left alone.
pub fn match_case(original: &str, replacement: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    let all_upper = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());
    let first_upper = letters.first().is_some_and(|c| c.is_uppercase());

    if all_upper {
        replacement.to_uppercase()
    } else if first_upper {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}
