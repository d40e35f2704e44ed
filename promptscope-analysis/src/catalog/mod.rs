//! Static registry of named convention patterns.
//!
//! Defined once at process start, compiled once, read-only thereafter —
//! the catalog has no interior mutability and can be shared by any number
//! of concurrent callers without synchronization.

pub mod defaults;
pub mod types;

pub use types::{Category, ConventionDefinition, PatternSpec};

use crate::engine::matcher::{self, CompiledPattern};

/// A convention definition together with its compiled matcher.
#[derive(Debug)]
pub struct CompiledConvention {
    pub definition: ConventionDefinition,
    pub pattern: CompiledPattern,
}

/// The convention registry.
#[derive(Debug)]
pub struct ConventionCatalog {
    conventions: Vec<CompiledConvention>,
}

impl ConventionCatalog {
    /// Build the catalog from the default convention set.
    pub fn new() -> Self {
        Self::with_definitions(defaults::default_conventions())
    }

    /// Build a catalog from custom definitions.
    ///
    /// A definition whose pattern fails to compile is kept but will never
    /// match; the failure is logged, not raised.
    pub fn with_definitions(definitions: Vec<ConventionDefinition>) -> Self {
        let conventions = definitions
            .into_iter()
            .map(|definition| {
                let pattern = matcher::compile(&definition.spec);
                if matches!(pattern, CompiledPattern::Invalid) {
                    tracing::warn!(
                        convention = definition.name,
                        category = definition.category.name(),
                        "convention pattern failed to compile; it will never match"
                    );
                }
                CompiledConvention { definition, pattern }
            })
            .collect();

        Self { conventions }
    }

    /// All conventions, in category order.
    pub fn conventions(&self) -> &[CompiledConvention] {
        &self.conventions
    }

    /// Conventions belonging to one category.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CompiledConvention> {
        self.conventions
            .iter()
            .filter(move |c| c.definition.category == category)
    }

    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }
}

impl Default for ConventionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn default_catalog_compiles_every_pattern() {
        let catalog = ConventionCatalog::new();
        assert_eq!(catalog.len(), 28);
        for convention in catalog.conventions() {
            assert!(
                !matches!(convention.pattern, CompiledPattern::Invalid),
                "{} failed to compile",
                convention.definition.name
            );
        }
    }

    #[test]
    fn every_category_has_conventions() {
        let catalog = ConventionCatalog::new();
        for category in Category::ALL {
            assert!(
                catalog.in_category(category).count() > 0,
                "category {} is empty",
                category.name()
            );
        }
    }

    #[test]
    fn invalid_pattern_is_kept_but_inert() {
        let catalog = ConventionCatalog::with_definitions(vec![ConventionDefinition {
            name: "broken",
            category: Category::Markdown,
            spec: PatternSpec::Regex(r"(unclosed"),
            description: "never matches",
            examples: smallvec![],
        }]);
        assert_eq!(catalog.len(), 1);
        let convention = &catalog.conventions()[0];
        assert!(matches!(convention.pattern, CompiledPattern::Invalid));
        assert!(convention.pattern.find_matches("(unclosed").is_empty());
    }
}
