//! Variable-name style classification.

use regex::Regex;

use super::types::NamingStyle;

/// Classifies names into naming styles with mutually exclusive precedence:
/// camelCase, snake_case, UPPER_SNAKE_CASE, PascalCase. Names matching no
/// style are silently uncategorized.
#[derive(Debug)]
pub(crate) struct NamingClassifier {
    camel: Option<Regex>,
    snake: Option<Regex>,
    upper_snake: Option<Regex>,
    pascal: Option<Regex>,
}

impl NamingClassifier {
    pub fn new() -> Self {
        Self {
            camel: compile(r"^[a-z]+(?:[A-Z][a-z]+)*$"),
            snake: compile(r"^[a-z]+(?:_[a-z]+)*$"),
            upper_snake: compile(r"^[A-Z]+(?:_[A-Z]+)*$"),
            pascal: compile(r"^[A-Z][a-z]+(?:[A-Z][a-z]+)*$"),
        }
    }

    pub fn classify(&self, name: &str) -> Option<NamingStyle> {
        if is_match(&self.camel, name) {
            Some(NamingStyle::CamelCase)
        } else if is_match(&self.snake, name) {
            Some(NamingStyle::SnakeCase)
        } else if is_match(&self.upper_snake, name) {
            Some(NamingStyle::UpperSnakeCase)
        } else if is_match(&self.pascal, name) {
            Some(NamingStyle::PascalCase)
        } else {
            None
        }
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

fn is_match(re: &Option<Regex>, name: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_mutually_exclusive() {
        let classifier = NamingClassifier::new();
        assert_eq!(classifier.classify("customerData"), Some(NamingStyle::CamelCase));
        assert_eq!(classifier.classify("customer_data"), Some(NamingStyle::SnakeCase));
        assert_eq!(classifier.classify("CUSTOMER_DATA"), Some(NamingStyle::UpperSnakeCase));
        assert_eq!(classifier.classify("CustomerData"), Some(NamingStyle::PascalCase));
    }

    #[test]
    fn single_lowercase_word_is_camel_by_precedence() {
        // "data" matches both the camelCase and snake_case shapes; the
        // precedence order decides.
        let classifier = NamingClassifier::new();
        assert_eq!(classifier.classify("data"), Some(NamingStyle::CamelCase));
    }

    #[test]
    fn unshaped_names_are_uncategorized() {
        let classifier = NamingClassifier::new();
        assert_eq!(classifier.classify("mixed_Case_name"), None);
        assert_eq!(classifier.classify("kebab-case"), None);
        assert_eq!(classifier.classify("123start"), None);
        assert_eq!(classifier.classify(""), None);
    }
}
