//! End-to-end scenarios through the public surface: corpus in, report out.

use promptscope_analysis::aggregation::CorpusAggregator;
use promptscope_analysis::catalog::Category;
use promptscope_analysis::corpus::Corpus;
use promptscope_analysis::discovery::{NamingStyle, VariableSyntax};
use promptscope_core::{CorpusError, PromptscopeErrorCode};
use serde_json::json;

fn analyze(value: serde_json::Value) -> promptscope_analysis::aggregation::CorpusReport {
    let corpus = Corpus::from_value(&value).expect("corpus should load");
    CorpusAggregator::new().analyze(&corpus).expect("analysis should succeed")
}

#[test]
fn structured_prompt_hits_sections_context_and_anti_hallucination() {
    let report = analyze(json!([
        {"prompt": "ROLE: You are an assistant.\n<Context>data</Context>\nDo not hallucinate."}
    ]));

    assert_eq!(report.summary.total_prompts, 1);
    assert_eq!(report.summary.analyzed_prompts, 1);

    let analysis = &report.individual_analyses[0];
    assert!(analysis.convention_results[&Category::Sections]["role"].found);
    assert!(analysis.convention_results[&Category::ContextBlocks]["context_blocks"].found);
    assert!(analysis.convention_results[&Category::AntiHallucination]["dont_hallucinate"].found);

    assert_eq!(report.convention_usage[&Category::Sections]["role"].count, 1);
    assert_eq!(report.convention_usage[&Category::Sections]["role"].percentage, 100.0);
}

#[test]
fn variable_heavy_prompt_reports_formats_and_naming_styles() {
    let report = analyze(json!([
        {"prompt": "{{name}}, @tag, variable_name, variableName"}
    ]));

    let discovered = &report.discovered_patterns;
    assert_eq!(discovered.variable_formats[&VariableSyntax::DoubleBraces], 1);
    assert_eq!(discovered.variable_formats[&VariableSyntax::AtSymbol], 1);
    assert!(discovered.naming_conventions.contains_key(&NamingStyle::SnakeCase));
    assert!(discovered.naming_conventions.contains_key(&NamingStyle::CamelCase));
}

#[test]
fn empty_corpus_is_an_explicit_no_data_error() {
    let corpus = Corpus::from_value(&json!([])).unwrap();
    let err = CorpusAggregator::new().analyze(&corpus).unwrap_err();
    assert!(matches!(err, CorpusError::NoData));
    assert_eq!(err.error_code(), "CORPUS_NO_DATA");
}

#[test]
fn unrecognized_record_shape_still_produces_an_analysis() {
    let report = analyze(json!([
        {"title": "not a prompt field", "owner": "someone"}
    ]));

    // The stringified record is analyzed instead of crashing.
    assert_eq!(report.individual_analyses.len(), 1);
    assert_eq!(report.individual_analyses[0].prompt_id, "unknown");
    assert_eq!(report.summary.analyzed_prompts, 1);
}

#[test]
fn report_serializes_to_the_documented_shape() {
    let report = analyze(json!([
        {"prompt": "<Topic>sales</Topic> {{amount}}", "workspace_name": "Sales"}
    ]));
    let value = report.to_json_value();

    let summary = &value["summary"];
    assert!(summary["total_prompts"].is_u64());
    assert!(summary["average_compliance_score"].is_f64() || summary["average_compliance_score"].is_u64());
    assert!(summary["analysis_date"].is_string());

    let usage = &value["convention_usage"]["context_blocks"]["topic_end_topic"];
    assert_eq!(usage["count"], 1);
    assert!(usage["percentage"].is_f64() || usage["percentage"].is_u64());

    let matches = &value["convention_matches"]["context_blocks_topic_end_topic"];
    assert!(matches.is_array());
    assert!(value["individual_analyses"].is_array());
    assert!(value["groups"]["Sales"]["profile"]["total_records"].is_u64());
}

#[test]
fn analysis_is_idempotent_apart_from_the_timestamp() {
    let corpus_value = json!([
        {"prompt": "# Plan\n{{customer_data}} @review\n<Steps>1. read</Steps>", "workspace_name": "Ops"},
        {"prompt": "ROLE: auditor\nbe precise", "workspace_name": "Ops"},
        {"prompt": ""},
    ]);

    let mut first = analyze(corpus_value.clone()).to_json_value();
    let mut second = analyze(corpus_value).to_json_value();
    first["summary"]["analysis_date"] = json!(null);
    second["summary"]["analysis_date"] = json!(null);

    assert_eq!(first, second);
}

#[test]
fn single_object_corpus_is_one_record() {
    let report = analyze(json!({"prompt": "be precise"}));
    assert_eq!(report.summary.total_prompts, 1);
    assert_eq!(
        report.convention_usage[&Category::AntiHallucination]["be_precise"].count,
        1
    );
}
