use prose_humanizer::{contractions, hedge, transform, Pipeline, PipelineConfig};
use std::collections::HashSet;
use std::io::Write;

const SCENARIO: &str = "This study may demonstrate significant results. The analysis could show \
    important findings. Researchers might find that the treatment is effective. The data can \
    indicate positive outcomes.";

/// Short opener that can merge, a long sentence that can split, and contractions
const REPORT_DRAFT: &str = "We don't think the pilot failed. It isn't over. The team reviewed \
    every report from the field offices in detail, and it then chose the three strongest sites \
    for a second round of trials next spring. Results can't arrive before June, so leaders won't \
    decide until the analysis is complete.";

/// Helper: the hedge ceiling for a text of this length under the default policy
fn default_quota(text: &str) -> usize {
    let words = text.split_whitespace().count() as f64;
    (words / 700.0 * 6.0).ceil() as usize
}

/// Helper: a long, hedge-heavy, contraction-heavy draft
fn long_draft(paragraphs: usize) -> String {
    let paragraph = "Our team may deliver the feature this quarter, and we don't expect delays. \
        The rollout could slip if testing can't keep pace. Stakeholders might ask for changes, \
        which isn't unusual. Engineers can adapt quickly, but they won't cut corners. \
        Additionally, the analysis could indicate that numerous users can benefit from a \
        robust design. ";
    paragraph.repeat(paragraphs)
}

#[test]
fn test_scenario_is_deterministic() {
    let first = transform(SCENARIO, Some(12345));
    let second = transform(SCENARIO, Some(12345));
    assert_eq!(first, second);
}

#[test]
fn test_scenario_output_is_pinned() {
    // Any change to a stage's draws or their order changes this text.
    assert_eq!(
        transform(SCENARIO, Some(12345)),
        "This study may illustrate notable results \u{2014} which is worth pausing on, and the \
         breakdown would show important observations. Researchers \u{2013} would likely find \
         that the treatment is useful. The data will indicate positive consequences; as a 2022 \
         meta-analysis of 38 studies found."
    );
}

#[test]
fn test_merge_split_and_contractions_output_is_pinned() {
    // Seed 1994 merges the opener, splits the long sentence and keeps "isn't".
    assert_eq!(
        transform(REPORT_DRAFT, Some(1994)),
        "We do not think the pilot failed (oddly enough), and it isn't over. The team reviewed \
         every report from the field \u{2013} offices in detail \u{2014} in about 4 out of 10 \
         cases. And it then chose the three strongest sites for a second round of trials next \
         spring. Results cannot arrive before June; so leaders will not decide until the \
         assessment is complete."
    );
}

#[test]
fn test_scenario_respects_hedge_quota() {
    let out = transform(SCENARIO, Some(12345));
    let quota = default_quota(&out);
    assert_eq!(quota, 1);
    assert!(hedge::count(&out) <= quota, "output {:?} keeps too many hedges", out);
}

#[test]
fn test_seed_sensitivity() {
    let outputs: HashSet<String> = (0..20).map(|seed| transform(SCENARIO, Some(seed))).collect();
    assert!(outputs.len() >= 2, "every seed produced the same text");
}

#[test]
fn test_hedge_bound_on_long_text() {
    let text = long_draft(40);
    for seed in [1, 7, 42, 12345, u64::MAX] {
        let out = transform(&text, Some(seed));
        let quota = default_quota(&out);
        assert!(
            hedge::count(&out) <= quota,
            "seed {}: {} hedges over quota {}",
            seed,
            hedge::count(&out),
            quota
        );
    }
}

#[test]
fn test_at_most_one_contraction_survives() {
    let text = long_draft(5);
    for seed in 0..25 {
        let out = transform(&text, Some(seed));
        assert!(contractions::count(&out) <= 1, "seed {}: {:?}", seed, out);
    }
}

#[test]
fn test_empty_input_law() {
    for seed in [None, Some(0), Some(12345)] {
        assert_eq!(transform("", seed), "");
        assert_eq!(transform("   \n  ", seed), "");
    }
}

#[test]
fn test_degenerate_inputs_do_not_panic() {
    let inputs = [
        "word",
        "a single sentence without an ending",
        "no punctuation at all just a long run of words that keeps going and going without a stop",
        "Only one sentence here, with a comma.",
        "?!.",
        "Ünïcödé téxt, with àccents. And émoji 🎉 too!",
    ];
    for input in inputs {
        for seed in 0..10 {
            let out = transform(input, Some(seed));
            assert!(!out.is_empty(), "{:?} with seed {} produced nothing", input, seed);
        }
    }
}

#[test]
fn test_multi_sentence_text_gains_injected_material() {
    // Every sentence is between 8 and 20 words, so burstiness leaves the
    // sentence count alone and both injectors find a splice point.
    let text = "The committee met on Tuesday morning, as planned in advance. The budget was \
        approved without any debate from the members. Everyone left the building before noon \
        on that same day.";
    let before = text.split_whitespace().count();
    for seed in 0..10 {
        let out = transform(text, Some(seed));
        let after = out.split_whitespace().count();
        assert!(after > before + 5, "seed {}: nothing was injected into {:?}", seed, out);
    }
}

#[test]
fn test_concurrent_runs_match_sequential_runs() {
    let pipeline = Pipeline::default();
    let text = long_draft(3);
    let expected: Vec<String> = (0..8).map(|seed| pipeline.run(&text, Some(seed))).collect();

    let actual: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|seed| {
                let pipeline = &pipeline;
                let text = &text;
                scope.spawn(move || pipeline.run(text, Some(seed)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(expected, actual);
}

#[test]
fn test_pipeline_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"hedge_allowance": 0, "min_substitutions": 1}}"#).unwrap();

    let config = PipelineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.hedge_allowance, 0);
    assert_eq!(config.min_substitutions, 1);
    assert_eq!(config.hedge_window_words, 700);

    let pipeline = Pipeline::new(config.clone());
    assert_eq!(pipeline.config(), &config);
    let out = pipeline.run(SCENARIO, Some(12345));
    assert_eq!(hedge::count(&out), 0);
}

#[test]
fn test_invalid_pipeline_config_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"hedge_window_words": 0}}"#).unwrap();
    assert!(PipelineConfig::from_file(file.path()).is_err());

    let mut garbage = tempfile::NamedTempFile::new().unwrap();
    write!(garbage, "not json").unwrap();
    assert!(PipelineConfig::from_file(garbage.path()).is_err());
}

#[test]
fn test_report_serializes_to_json() {
    let report = Pipeline::default().run_with_report(SCENARIO, Some(12345));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["seed"], 12345);
    assert_eq!(json["original_word_count"], 26);
    assert_eq!(json["text"], report.text.as_str());
}
