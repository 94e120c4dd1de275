//! Integration tests for inflection grouping with an injected dictionary,
//! and for the host-side audit flow around analysis results.

use std::sync::Arc;

use textalyzer::audit::{AuditEvent, AuditSink, MemoryAuditSink};
use textalyzer::engine::TextAnalyzer;
use textalyzer::error::Result;
use textalyzer::morphology::dictionary::DictionaryLemmatizer;
use textalyzer::morphology::lemmatizer::Lemma;
use textalyzer::strategy::{AnalysisReport, InflectionGroupsStrategy};

fn lemmatizer() -> Arc<DictionaryLemmatizer> {
    Arc::new(
        DictionaryLemmatizer::from_json_str(
            r#"[
                ["run", "runs", "ran", "running"],
                ["cat", "cats"],
                ["go", "goes", "went", "going"]
            ]"#,
        )
        .unwrap(),
    )
}

#[test]
fn test_seed_groups_collect_suffixes_in_text_order() -> Result<()> {
    let strategy = InflectionGroupsStrategy::new(lemmatizer(), ["run"])?;

    match TextAnalyzer::run(&strategy, "he runs and ran and running")? {
        AnalysisReport::InflectionGroups(groups) => {
            assert_eq!(groups.len(), 1);
            assert_eq!(
                groups.get(&Lemma::new("run")),
                Some(&["s".to_string(), "".to_string(), "ning".to_string()][..])
            );
        }
        other => panic!("unexpected report: {other:?}"),
    }

    Ok(())
}

#[test]
fn test_multiple_seeds_produce_independent_groups() -> Result<()> {
    let strategy = InflectionGroupsStrategy::new(lemmatizer(), ["run", "cat"])?;

    match TextAnalyzer::run(&strategy, "cats ran while the cat runs")? {
        AnalysisReport::InflectionGroups(groups) => {
            assert_eq!(groups.len(), 2);
            assert_eq!(
                groups.get(&Lemma::new("run")),
                Some(&["".to_string(), "s".to_string()][..])
            );
            assert_eq!(
                groups.get(&Lemma::new("cat")),
                Some(&["s".to_string(), "".to_string()][..])
            );
        }
        other => panic!("unexpected report: {other:?}"),
    }

    Ok(())
}

#[test]
fn test_suppletive_forms_yield_degenerate_suffixes() -> Result<()> {
    // "went" shares the lemma "go" but not its spelling; character-prefix
    // stripping keeps the trailing fragment as documented.
    let strategy = InflectionGroupsStrategy::new(lemmatizer(), ["go"])?;

    match TextAnalyzer::run(&strategy, "she went going")? {
        AnalysisReport::InflectionGroups(groups) => {
            assert_eq!(
                groups.get(&Lemma::new("go")),
                Some(&["nt".to_string(), "ing".to_string()][..])
            );
        }
        other => panic!("unexpected report: {other:?}"),
    }

    Ok(())
}

#[test]
fn test_empty_seed_collection_yields_empty_report() -> Result<()> {
    let strategy = InflectionGroupsStrategy::new(lemmatizer(), Vec::<String>::new())?;

    match TextAnalyzer::run(&strategy, "he runs and ran")? {
        AnalysisReport::InflectionGroups(groups) => assert!(groups.is_empty()),
        other => panic!("unexpected report: {other:?}"),
    }

    Ok(())
}

#[test]
fn test_inflection_groups_idempotent() -> Result<()> {
    let strategy = InflectionGroupsStrategy::new(lemmatizer(), ["run", "go"])?;
    let text = "running went goes ran";

    let first = TextAnalyzer::run(&strategy, text)?;
    let second = TextAnalyzer::run(&strategy, text)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_host_audit_flow() -> Result<()> {
    let strategy = InflectionGroupsStrategy::new(lemmatizer(), ["run"])?;
    let sink = MemoryAuditSink::new();

    let report = TextAnalyzer::run(&strategy, "he runs")?;
    sink.record(AuditEvent::new(
        format!("Inflections Result for {:?}", strategy.seeds()),
        format!("{report}"),
    ));

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].result, "{run: [\"s\"]}");
    assert!(events[0].description.contains("run"));

    Ok(())
}
