use log::debug;
use rand::RngCore;

use crate::rng::pick_index;
use crate::tables::{ASIDE_PHRASES, DATUM_PHRASES};
use crate::text::{sentence_spans, terminator_start};

/// How an injected phrase is set off from the sentence around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    /// `word (phrase), rest`
    Parenthetical,
    /// `word, phrase, rest`
    CommaClause,
    /// `word — phrase, rest`
    EmDash,
}

impl Template {
    pub fn render(self, phrase: &str) -> String {
        match self {
            Template::Parenthetical => format!(" ({})", phrase),
            Template::CommaClause => format!(", {}", phrase),
            Template::EmDash => format!(" — {}", phrase),
        }
    }
}

/// Splices one phrase from a fixed pool into one sentence.
#[derive(Debug)]
pub struct Injector {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
    pub templates: &'static [Template],
}

pub const DATUM: Injector = Injector {
    name: "datum",
    phrases: DATUM_PHRASES,
    templates: &[Template::Parenthetical, Template::CommaClause, Template::EmDash],
};

pub const ASIDE: Injector = Injector {
    name: "aside",
    phrases: ASIDE_PHRASES,
    templates: &[Template::Parenthetical, Template::EmDash],
};

impl Injector {
    /// Insert one phrase into one sentence.
    ///
    /// Texts with fewer than two sentences are returned as-is without drawing.
    /// Otherwise three draws pick the phrase, the sentence and the template; the
    /// phrase goes in at the sentence's first comma, else before its closing
    /// punctuation. A sentence with neither is left alone.
    pub fn inject<R: RngCore + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let spans = sentence_spans(text);
        if spans.len() < 2 || self.phrases.is_empty() || self.templates.is_empty() {
            return text.to_string();
        }

        let phrase = self.phrases[pick_index(rng, self.phrases.len())];
        let target = pick_index(rng, spans.len());
        let template = self.templates[pick_index(rng, self.templates.len())];

        let span = spans[target].clone();
        let sentence = &text[span.clone()];
        let Some(offset) = sentence.find(',').or_else(|| terminator_start(sentence)) else {
            debug!("{} injection: sentence {} has no splice point", self.name, target);
            return text.to_string();
        };

        let at = span.start + offset;
        let mut out = String::with_capacity(text.len() + phrase.len() + 4);
        out.push_str(&text[..at]);
        out.push_str(&template.render(phrase));
        out.push_str(&text[at..]);

        debug!(
            "{} injection: {:?} into sentence {} as {:?}",
            self.name, phrase, target, template
        );
        out
    }
}
