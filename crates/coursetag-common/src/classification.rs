//! Per-record, per-topic classification output.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Flag plus explanation for one record and one topic.
///
/// `reason` is the comma-joined, sorted set of rule labels that fired. It is
/// empty when no rule matched, including records flagged by fuzzy matching
/// alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub matched: bool,
    pub reason: String,
}

impl ClassificationResult {
    pub fn negative() -> Self {
        Self::default()
    }

    /// Build a result from matched rule labels (any order, duplicates allowed).
    pub fn from_labels<'a>(matched: bool, labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self { matched, reason: join_labels(labels) }
    }

    /// Individual labels of the reason string.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.reason.split(',').filter(|l| !l.is_empty())
    }

    /// Fold another term's result for the same course into this one:
    /// positive if either is positive, reasons unioned.
    pub fn merge(&mut self, other: &ClassificationResult) {
        self.matched |= other.matched;
        if !other.reason.is_empty() {
            self.reason = join_labels(self.labels().chain(other.labels()));
        }
    }
}

fn join_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labels_sorted_and_deduplicated() {
        let r = ClassificationResult::from_labels(true, ["llm", "ai", "llm", "gpt"]);
        assert_eq!(r.reason, "ai,gpt,llm");
    }

    #[test]
    fn test_merge_any_positive_wins() {
        let mut first = ClassificationResult::negative();
        let later = ClassificationResult::from_labels(true, ["machine_learning"]);
        first.merge(&later);
        assert!(first.matched);
        assert_eq!(first.reason, "machine_learning");
    }

    #[test]
    fn test_merge_unions_reasons() {
        let mut a = ClassificationResult::from_labels(true, ["ai", "robotics"]);
        let b = ClassificationResult::from_labels(true, ["ai", "computer_vision"]);
        a.merge(&b);
        assert_eq!(a.reason, "ai,computer_vision,robotics");
    }

    #[test]
    fn test_fuzzy_only_positive_has_empty_reason() {
        let r = ClassificationResult::from_labels(true, std::iter::empty());
        assert!(r.matched);
        assert_eq!(r.reason, "");
        assert_eq!(r.labels().count(), 0);
    }
}
