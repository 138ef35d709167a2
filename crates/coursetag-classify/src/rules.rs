//! Tiered regular-expression rules with context gating.
//!
//! A record is positive for a [`RuleSet`] when any `Primary` rule matches, or
//! when at least one `Secondary` rule and at least one `Context` rule match
//! together. Context rules never make a record positive on their own.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use coursetag_common::{ClassificationResult, CoursetagError, Result};

use crate::normalise::normalise_opt;

/// Gating tier of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Sufficient alone.
    Primary,
    /// Needs a co-occurring context match.
    Secondary,
    /// Only validates secondary matches.
    Context,
}

/// Which normalised text a rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Title,
    Description,
    /// Title and description joined by a space.
    #[default]
    Combined,
}

/// Uncompiled rule definition, as written in the built-in catalogue or in a
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Label reported in the reason string.
    pub label: String,
    /// Regex body. Word boundaries are added at compile time.
    pub pattern: String,
    pub tier: Tier,
    #[serde(default)]
    pub scope: Scope,
}

impl Rule {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>, tier: Tier, scope: Scope) -> Self {
        Self { label: label.into(), pattern: pattern.into(), tier, scope }
    }
}

#[derive(Debug)]
struct CompiledRule {
    label: String,
    tier: Tier,
    scope: Scope,
    regex: Regex,
}

/// Title, description and combined text, each normalised once per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalisedText {
    title: String,
    description: String,
    combined: String,
}

impl NormalisedText {
    pub fn new(title: Option<&str>, description: Option<&str>) -> Self {
        let title = normalise_opt(title);
        let description = normalise_opt(description);
        let combined = match (title.is_empty(), description.is_empty()) {
            (true, _) => description.clone(),
            (_, true) => title.clone(),
            _ => format!("{title} {description}"),
        };
        Self { title, description, combined }
    }

    pub fn get(&self, scope: Scope) -> &str {
        match scope {
            Scope::Title       => &self.title,
            Scope::Description => &self.description,
            Scope::Combined    => &self.combined,
        }
    }

    pub fn combined(&self) -> &str {
        &self.combined
    }
}

/// Labels hit per tier for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome<'a> {
    pub primary: Vec<&'a str>,
    pub secondary: Vec<&'a str>,
    pub context: Vec<&'a str>,
}

impl<'a> RuleOutcome<'a> {
    /// Secondary hits validated by context.
    pub fn gate_open(&self) -> bool {
        !self.secondary.is_empty() && !self.context.is_empty()
    }

    pub fn is_match(&self) -> bool {
        !self.primary.is_empty() || self.gate_open()
    }

    /// Reason labels: primary hits, plus secondary and context hits when the
    /// gate opened. Empty when the record does not match.
    pub fn into_result(self) -> ClassificationResult {
        if !self.is_match() {
            return ClassificationResult::negative();
        }
        if self.gate_open() {
            let labels = self.primary.iter().chain(&self.secondary).chain(&self.context).copied();
            ClassificationResult::from_labels(true, labels)
        } else {
            ClassificationResult::from_labels(true, self.primary.iter().copied())
        }
    }
}

/// An immutable, compiled collection of rules for one topic.
///
/// Build once at startup and share by reference; evaluation never mutates.
#[derive(Debug)]
pub struct RuleSet {
    name: String,
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile rules in order. An empty or invalid pattern is a configuration
    /// error.
    pub fn compile(name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Result<Self> {
        let name = name.into();
        let mut compiled = Vec::new();

        for rule in rules {
            if rule.pattern.trim().is_empty() {
                return Err(CoursetagError::Config(format!(
                    "rule '{}' in rule set '{}' has an empty pattern",
                    rule.label, name
                )));
            }
            let regex = RegexBuilder::new(&format!(r"\b(?:{})\b", rule.pattern))
                .case_insensitive(true)
                .build()
                .map_err(|source| CoursetagError::InvalidPattern {
                    label: rule.label.clone(),
                    source,
                })?;
            compiled.push(CompiledRule { label: rule.label, tier: rule.tier, scope: rule.scope, regex });
        }

        let set = Self { name, rules: compiled };
        debug!(
            "Compiled rule set '{}': {} primary, {} secondary, {} context",
            set.name,
            set.count(Tier::Primary),
            set.count(Tier::Secondary),
            set.count(Tier::Context)
        );
        Ok(set)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn count(&self, tier: Tier) -> usize {
        self.rules.iter().filter(|r| r.tier == tier).count()
    }

    /// Evaluate every rule against the text its scope selects.
    pub fn evaluate<'a>(&'a self, text: &NormalisedText) -> RuleOutcome<'a> {
        let mut outcome = RuleOutcome::default();
        for rule in &self.rules {
            if !rule.regex.is_match(text.get(rule.scope)) {
                continue;
            }
            let bucket = match rule.tier {
                Tier::Primary   => &mut outcome.primary,
                Tier::Secondary => &mut outcome.secondary,
                Tier::Context   => &mut outcome.context,
            };
            bucket.push(rule.label.as_str());
        }
        outcome
    }

    /// Rules-only classification of raw (unnormalised) text.
    pub fn classify(&self, title: Option<&str>, description: Option<&str>) -> ClassificationResult {
        self.evaluate(&NormalisedText::new(title, description)).into_result()
    }
}
