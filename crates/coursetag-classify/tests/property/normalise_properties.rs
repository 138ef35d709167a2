use coursetag_classify::catalogue;
use coursetag_classify::{normalise, RuleSet};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalise_is_idempotent(s in ".{0,200}") {
        let once = normalise(&s);
        prop_assert_eq!(normalise(&once), once);
    }

    #[test]
    fn output_is_single_spaced_ascii(s in ".{0,200}") {
        let out = normalise(&s);
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn punctuation_never_joins_words(a in "[a-z]{3,8}", b in "[a-z]{3,8}", sep in "[-_/,;:!?()\\s]{1,4}") {
        let out = normalise(&format!("{a}{sep}{b}"));
        prop_assert_eq!(out, format!("{a} {b}"));
    }

    #[test]
    fn ai_rule_never_fires_inside_words(prefix in "[b-z]{1,5}", suffix in "[a-z]{1,5}") {
        // "ai" embedded in a longer word ("said", "main", "aid") is not a hit.
        let rules = RuleSet::compile("ai", catalogue::ai_rules()).unwrap();
        let word = format!("{prefix}ai{suffix}");
        let r = rules.classify(Some(&word), None);
        prop_assert!(!r.reason.split(',').any(|l| l == "ai"), "matched ai in {}", word);
    }
}
