//! The default convention set.
//!
//! Carried over from the prompt-engineering house style this tool audits:
//! tag-delimited context blocks, `@` topic tags, variable-interpolation
//! syntaxes, uppercase section headers, anti-hallucination phrasing, and
//! markdown formatting.

use smallvec::smallvec;

use super::types::{Category, ConventionDefinition, PatternSpec};

/// All default conventions, in category order.
pub fn default_conventions() -> Vec<ConventionDefinition> {
    vec![
        // Context block conventions
        ConventionDefinition {
            name: "topic_end_topic",
            category: Category::ContextBlocks,
            spec: PatternSpec::Regex(r"<Topic>.*?</Topic>|<Topic>.*?<EndTopic>"),
            description: "<Topic> and </Topic> or <EndTopic> delimiting a context block",
            examples: smallvec!["<Topic>API Integration</Topic>", "<Topic>Data Analysis<EndTopic>"],
        },
        ConventionDefinition {
            name: "topic_lowercase",
            category: Category::ContextBlocks,
            spec: PatternSpec::Regex(r"<topic>.*?</topic>"),
            description: "<topic> and </topic> delimiting a context block",
            examples: smallvec!["<topic>customer support</topic>"],
        },
        ConventionDefinition {
            name: "context_blocks",
            category: Category::ContextBlocks,
            spec: PatternSpec::Regex(r"<context>.*?</context>"),
            description: "<context> and </context> around injected context",
            examples: smallvec!["<context>Analyze this data</context>"],
        },
        ConventionDefinition {
            name: "generic_start_end",
            category: Category::ContextBlocks,
            spec: PatternSpec::StartEndPair { open: r"<(\w+)Start>" },
            description: "<xxxStart> and <xxxEnd> delimiter pairs",
            examples: smallvec!["<DataStart>customer data</DataEnd>"],
        },
        // Topic tag conventions
        ConventionDefinition {
            name: "at_topic",
            category: Category::TopicTags,
            spec: PatternSpec::Regex(r"@\w+"),
            description: "@topic keyword tags",
            examples: smallvec!["@analysis", "@integration"],
        },
        ConventionDefinition {
            name: "at_end_topic",
            category: Category::TopicTags,
            spec: PatternSpec::Regex(r"@endTopic|@EndTopic"),
            description: "@topic paired with @endTopic",
            examples: smallvec!["@endTopic", "@EndTopic"],
        },
        // Variable conventions
        ConventionDefinition {
            name: "curly_braces",
            category: Category::Variables,
            spec: PatternSpec::Regex(r"\{\{[^}]+\}\}"),
            description: "{{variable}} interpolation",
            examples: smallvec!["{{customer_data}}", "{{api_documentation}}"],
        },
        ConventionDefinition {
            name: "camel_case",
            category: Category::Variables,
            spec: PatternSpec::Regex(r#""[^"]*[A-Z][^"]*""#),
            description: "quoted camelCase variable definitions",
            examples: smallvec![r#""variableTest""#, r#""customerData""#],
        },
        ConventionDefinition {
            name: "snake_case",
            category: Category::Variables,
            spec: PatternSpec::Regex(r#""[^"]*_[^"]*""#),
            description: "quoted snake_case variable definitions",
            examples: smallvec![r#""variable_test""#, r#""customer_data""#],
        },
        // Section conventions
        ConventionDefinition {
            name: "role",
            category: Category::Sections,
            spec: PatternSpec::Regex(r"^ROLE:"),
            description: "ROLE: section header",
            examples: smallvec!["ROLE: You are an expert..."],
        },
        ConventionDefinition {
            name: "instructions",
            category: Category::Sections,
            spec: PatternSpec::Regex(r"^INSTRUCTIONS:"),
            description: "INSTRUCTIONS: section header",
            examples: smallvec!["INSTRUCTIONS: 1. First..."],
        },
        ConventionDefinition {
            name: "general_rules",
            category: Category::Sections,
            spec: PatternSpec::Regex(r"^GENERAL RULES:"),
            description: "GENERAL RULES: section header",
            examples: smallvec!["GENERAL RULES: - Do not..."],
        },
        ConventionDefinition {
            name: "variables",
            category: Category::Sections,
            spec: PatternSpec::Regex(r"^VARIABLES:"),
            description: "VARIABLES: section for structured outputs",
            examples: smallvec!["VARIABLES: - variable_name: type..."],
        },
        ConventionDefinition {
            name: "output_format",
            category: Category::Sections,
            spec: PatternSpec::Regex(r"^OUTPUT FORMAT:"),
            description: "OUTPUT FORMAT: section header",
            examples: smallvec![r#"OUTPUT FORMAT: { "key": "value" }"#],
        },
        ConventionDefinition {
            name: "context",
            category: Category::Sections,
            spec: PatternSpec::Regex(r"^CONTEXT:"),
            description: "CONTEXT: section for input variables",
            examples: smallvec!["CONTEXT: {{variable_name}}"],
        },
        ConventionDefinition {
            name: "rules",
            category: Category::Sections,
            spec: PatternSpec::Regex(r"^RULES:"),
            description: "RULES: section header",
            examples: smallvec!["RULES: 1. Think step by step..."],
        },
        // Anti-hallucination conventions
        ConventionDefinition {
            name: "dont_hallucinate",
            category: Category::AntiHallucination,
            spec: PatternSpec::Regex(r"do not hallucinate|don't hallucinate"),
            description: "explicit anti-hallucination instruction",
            examples: smallvec!["do not hallucinate", "don't hallucinate"],
        },
        ConventionDefinition {
            name: "no_assumptions",
            category: Category::AntiHallucination,
            spec: PatternSpec::Regex(r"do not make assumptions|don't make assumptions"),
            description: "no-assumptions instruction",
            examples: smallvec!["do not make assumptions"],
        },
        ConventionDefinition {
            name: "be_precise",
            category: Category::AntiHallucination,
            spec: PatternSpec::Regex(r"be precise|work precise"),
            description: "precision instruction",
            examples: smallvec!["be precise", "work precise"],
        },
        ConventionDefinition {
            name: "step_by_step",
            category: Category::AntiHallucination,
            spec: PatternSpec::Regex(r"think step by step|step by step|step-by-step"),
            description: "step-by-step thinking instruction",
            examples: smallvec!["think step by step"],
        },
        ConventionDefinition {
            name: "follow_formatting",
            category: Category::AntiHallucination,
            spec: PatternSpec::Regex(r"follow the formatting rules|follow formatting"),
            description: "formatting-rule instruction",
            examples: smallvec!["follow the formatting rules"],
        },
        // Markdown conventions
        ConventionDefinition {
            name: "headers",
            category: Category::Markdown,
            spec: PatternSpec::Regex(r"^#+\s+"),
            description: "markdown headers",
            examples: smallvec!["# Header", "## Subheader"],
        },
        ConventionDefinition {
            name: "bold",
            category: Category::Markdown,
            spec: PatternSpec::Regex(r"\*\*[^*]+\*\*"),
            description: "markdown bold text",
            examples: smallvec!["**bold text**"],
        },
        ConventionDefinition {
            name: "italic",
            category: Category::Markdown,
            spec: PatternSpec::Regex(r"\*[^*]+\*"),
            description: "markdown italic text",
            examples: smallvec!["*italic text*"],
        },
        ConventionDefinition {
            name: "code_blocks",
            category: Category::Markdown,
            spec: PatternSpec::Regex(r"```[\s\S]*?```"),
            description: "markdown code blocks",
            examples: smallvec!["```json\n{\"key\": \"value\"}\n```"],
        },
        ConventionDefinition {
            name: "inline_code",
            category: Category::Markdown,
            spec: PatternSpec::Regex(r"`[^`]+`"),
            description: "markdown inline code",
            examples: smallvec!["`variable_name`"],
        },
        ConventionDefinition {
            name: "lists",
            category: Category::Markdown,
            spec: PatternSpec::Regex(r"^\s*[-*+]\s+"),
            description: "markdown bullet lists",
            examples: smallvec!["- item", "* item"],
        },
        ConventionDefinition {
            name: "numbered_lists",
            category: Category::Markdown,
            spec: PatternSpec::Regex(r"^\s*\d+\.\s+"),
            description: "markdown numbered lists",
            examples: smallvec!["1. item", "2. item"],
        },
    ]
}
