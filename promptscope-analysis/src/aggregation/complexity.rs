//! Structural complexity metrics.

use regex::Regex;

use super::types::ComplexityMetrics;

/// Measures per-record structure density.
#[derive(Debug)]
pub struct ComplexityAnalyzer {
    open_tag: Option<Regex>,
    instruction_keyword: Option<Regex>,
}

impl ComplexityAnalyzer {
    pub fn new() -> Self {
        Self {
            open_tag: Regex::new(r"<[A-Za-z]+>").ok(),
            instruction_keyword: Regex::new(r"[Ii]nstructions?|[Tt]ask|[Oo]bjective|[Ss]tep").ok(),
        }
    }

    pub fn measure(&self, prompt_id: &str, text: &str) -> ComplexityMetrics {
        let length = text.chars().count();
        let xml_open_tags = count(&self.open_tag, text);
        let keywords = count(&self.instruction_keyword, text);

        ComplexityMetrics {
            prompt_id: prompt_id.to_string(),
            length,
            xml_open_tags,
            tag_density: density(xml_open_tags, length),
            instruction_density: density(keywords, length),
        }
    }
}

impl Default for ComplexityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Occurrences per 1000 characters.
fn density(occurrences: usize, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    occurrences as f64 / length as f64 * 1000.0
}

fn count(re: &Option<Regex>, text: &str) -> usize {
    re.as_ref().map_or(0, |re| re.find_iter(text).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn densities_are_per_thousand_characters() {
        let analyzer = ComplexityAnalyzer::new();
        let text = format!("<Tag>{}</Tag>", "x".repeat(989));
        let metrics = analyzer.measure("p1", &text);
        assert_eq!(metrics.length, 1000);
        assert_eq!(metrics.xml_open_tags, 1);
        assert!((metrics.tag_density - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_text_has_zero_density() {
        let analyzer = ComplexityAnalyzer::new();
        let metrics = analyzer.measure("p1", "");
        assert_eq!(metrics.tag_density, 0.0);
        assert_eq!(metrics.instruction_density, 0.0);
    }
}
