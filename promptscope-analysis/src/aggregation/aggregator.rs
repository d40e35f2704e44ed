//! Corpus aggregation.
//!
//! One synchronous pass over the records, folding per-record results into
//! an explicit accumulator — no ambient state, so a corpus can also be
//! aggregated incrementally by feeding records one at a time.

use std::collections::{BTreeMap, BTreeSet};

use promptscope_core::{CorpusError, SignalConfig};

use crate::catalog::{Category, ConventionCatalog};
use crate::corpus::{Corpus, PromptRecord};
use crate::discovery::types::DiscoveredPatterns;
use crate::discovery::DynamicPatternDiscoverer;
use crate::engine::types::PromptAnalysis;
use crate::engine::SinglePromptAnalyzer;

use super::complexity::ComplexityAnalyzer;
use super::report::{CorpusReport, GroupReport, ReportSummary};
use super::signals::{self, InsightSignal, SignalScanner};
use super::types::{ComplexityMetrics, ConventionUsage, DiscoverySummary, GroupProfile};

/// Runs the per-record analyzers over a corpus and reduces the results.
#[derive(Debug)]
pub struct CorpusAggregator {
    catalog: ConventionCatalog,
    discoverer: DynamicPatternDiscoverer,
    signals: SignalScanner,
    complexity: ComplexityAnalyzer,
    config: SignalConfig,
}

impl CorpusAggregator {
    pub fn new() -> Self {
        Self::with_config(SignalConfig::default())
    }

    pub fn with_config(config: SignalConfig) -> Self {
        Self {
            catalog: ConventionCatalog::new(),
            discoverer: DynamicPatternDiscoverer::new(),
            signals: SignalScanner::new(),
            complexity: ComplexityAnalyzer::new(),
            config,
        }
    }

    pub fn catalog(&self) -> &ConventionCatalog {
        &self.catalog
    }

    /// Analyze a whole corpus.
    ///
    /// Records with empty text still yield a per-record analysis but are
    /// excluded from every percentage denominator. A corpus with no
    /// analyzable text at all is a `NoData` error, never a NaN percentage.
    pub fn analyze(&self, corpus: &Corpus) -> Result<CorpusReport, CorpusError> {
        if corpus.is_empty() {
            return Err(CorpusError::NoData);
        }

        let analyzer = SinglePromptAnalyzer::new(&self.catalog);
        let mut acc = Accumulator::new(&self.catalog);

        for record in corpus.records() {
            let analysis = analyzer.analyze(record);

            if record.has_text() {
                let discovered = self.discoverer.discover(&record.text);
                let present = self.signals.scan(&record.text);
                let metrics = self.complexity.measure(&record.id, &record.text);
                acc.absorb(record, &analysis, &discovered, &present, metrics);
            } else {
                tracing::debug!(id = %record.id, "record has empty text; excluded from percentages");
                acc.count_skipped(record);
            }

            acc.analyses.push(analysis);
        }

        if acc.analyzed == 0 {
            return Err(CorpusError::NoData);
        }

        Ok(acc.finish(corpus.len(), &self.config))
    }
}

impl Default for CorpusAggregator {
    fn default() -> Self {
        Self::new()
    }
}

type UsageCounts = BTreeMap<Category, BTreeMap<String, usize>>;

struct Accumulator {
    usage: UsageCounts,
    /// Zeroed per-group starting point, so group reports carry the same
    /// zero-count entries the corpus-level map does.
    usage_template: UsageCounts,
    matches: BTreeMap<String, Vec<String>>,
    signal_hits: BTreeMap<InsightSignal, usize>,
    discovery: DiscoverySummary,
    groups: BTreeMap<String, GroupAccumulator>,
    complexity: Vec<ComplexityMetrics>,
    analyses: Vec<PromptAnalysis>,
    score_sum: f64,
    analyzed: usize,
}

impl Accumulator {
    fn new(catalog: &ConventionCatalog) -> Self {
        Self {
            usage: zeroed_usage(catalog),
            usage_template: zeroed_usage(catalog),
            matches: catalog
                .conventions()
                .iter()
                .map(|c| (match_key(c.definition.category, c.definition.name), Vec::new()))
                .collect(),
            signal_hits: zeroed_signals(),
            discovery: DiscoverySummary::default(),
            groups: BTreeMap::new(),
            complexity: Vec::new(),
            analyses: Vec::new(),
            score_sum: 0.0,
            analyzed: 0,
        }
    }

    fn absorb(
        &mut self,
        record: &PromptRecord,
        analysis: &PromptAnalysis,
        discovered: &DiscoveredPatterns,
        present: &BTreeSet<InsightSignal>,
        metrics: ComplexityMetrics,
    ) {
        self.analyzed += 1;
        self.score_sum += analysis.compliance_score;
        self.discovery.absorb(discovered);

        let template = &self.usage_template;
        let group = self
            .groups
            .entry(record.group_key.clone())
            .or_insert_with(|| GroupAccumulator::new(template.clone()));
        group.total_records += 1;
        group.record_length(metrics.length);
        group.discovery.absorb(discovered);

        for (category, conventions) in &analysis.convention_results {
            for (name, result) in conventions {
                if !result.found {
                    continue;
                }
                increment(&mut self.usage, *category, name);
                increment(&mut group.usage, *category, name);
                self.matches
                    .entry(match_key(*category, name))
                    .or_default()
                    .extend(result.matches.iter().cloned());
            }
        }

        for signal in present {
            *self.signal_hits.entry(*signal).or_insert(0) += 1;
            *group.signal_hits.entry(*signal).or_insert(0) += 1;
        }

        self.complexity.push(metrics);
    }

    /// An empty-text record still counts toward its group's record total.
    fn count_skipped(&mut self, record: &PromptRecord) {
        let template = &self.usage_template;
        let group = self
            .groups
            .entry(record.group_key.clone())
            .or_insert_with(|| GroupAccumulator::new(template.clone()));
        group.total_records += 1;
    }

    fn finish(self, total_records: usize, config: &SignalConfig) -> CorpusReport {
        let analyzed = self.analyzed;
        let convention_usage = percentages(&self.usage, analyzed);
        let signal_usage = signal_percentages(&self.signal_hits, analyzed);
        let findings = signals::evaluate(&signal_usage, config);

        let groups = self
            .groups
            .into_iter()
            .map(|(name, group)| (name, group.finish(total_records)))
            .collect();

        let average = if analyzed > 0 {
            round2(self.score_sum / analyzed as f64)
        } else {
            0.0
        };

        CorpusReport {
            summary: ReportSummary {
                total_prompts: total_records,
                analyzed_prompts: analyzed,
                average_compliance_score: average,
                analysis_date: chrono::Utc::now().to_rfc3339(),
            },
            convention_usage,
            convention_matches: self.matches,
            signal_usage,
            discovered_patterns: self.discovery,
            quality_issues: findings.quality_issues,
            best_practices: findings.best_practices,
            recommendations: findings.recommendations,
            groups,
            complexity: self.complexity,
            individual_analyses: self.analyses,
        }
    }
}

struct GroupAccumulator {
    usage: UsageCounts,
    signal_hits: BTreeMap<InsightSignal, usize>,
    discovery: DiscoverySummary,
    total_records: usize,
    length_sum: usize,
    shortest: usize,
    longest: usize,
}

impl GroupAccumulator {
    fn new(usage: UsageCounts) -> Self {
        Self {
            usage,
            signal_hits: BTreeMap::new(),
            discovery: DiscoverySummary::default(),
            total_records: 0,
            length_sum: 0,
            shortest: usize::MAX,
            longest: 0,
        }
    }

    fn record_length(&mut self, length: usize) {
        self.length_sum += length;
        self.shortest = self.shortest.min(length);
        self.longest = self.longest.max(length);
    }

    fn finish(self, corpus_total: usize) -> GroupReport {
        let analyzed = self.discovery.total_prompts_analyzed;
        let profile = GroupProfile {
            total_records: self.total_records,
            analyzed_records: analyzed,
            share_of_corpus: if corpus_total > 0 {
                round2(self.total_records as f64 / corpus_total as f64 * 100.0)
            } else {
                0.0
            },
            avg_text_length: if analyzed > 0 {
                round2(self.length_sum as f64 / analyzed as f64)
            } else {
                0.0
            },
            shortest_text: if analyzed > 0 { self.shortest } else { 0 },
            longest_text: self.longest,
        };

        GroupReport {
            profile,
            convention_usage: percentages(&self.usage, analyzed),
            signal_usage: signal_percentages(&self.signal_hits, analyzed),
            discovered_patterns: self.discovery,
        }
    }
}

fn zeroed_usage(catalog: &ConventionCatalog) -> UsageCounts {
    let mut usage: UsageCounts = BTreeMap::new();
    for convention in catalog.conventions() {
        usage
            .entry(convention.definition.category)
            .or_default()
            .insert(convention.definition.name.to_string(), 0);
    }
    usage
}

fn zeroed_signals() -> BTreeMap<InsightSignal, usize> {
    InsightSignal::ALL.iter().map(|signal| (*signal, 0)).collect()
}

fn increment(usage: &mut UsageCounts, category: Category, name: &str) {
    *usage
        .entry(category)
        .or_default()
        .entry(name.to_string())
        .or_insert(0) += 1;
}

fn match_key(category: Category, name: &str) -> String {
    format!("{}_{}", category.name(), name)
}

fn percentages(
    usage: &UsageCounts,
    analyzed: usize,
) -> BTreeMap<Category, BTreeMap<String, ConventionUsage>> {
    usage
        .iter()
        .map(|(category, conventions)| {
            let converted = conventions
                .iter()
                .map(|(name, count)| (name.clone(), to_usage(*count, analyzed)))
                .collect();
            (*category, converted)
        })
        .collect()
}

fn signal_percentages(
    hits: &BTreeMap<InsightSignal, usize>,
    analyzed: usize,
) -> BTreeMap<InsightSignal, ConventionUsage> {
    hits.iter()
        .map(|(signal, count)| (*signal, to_usage(*count, analyzed)))
        .collect()
}

fn to_usage(count: usize, analyzed: usize) -> ConventionUsage {
    let percentage = if analyzed > 0 {
        count as f64 / analyzed as f64 * 100.0
    } else {
        0.0
    };
    ConventionUsage { count, percentage }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
