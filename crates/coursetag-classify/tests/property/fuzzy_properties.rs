use coursetag_classify::{normalise, partial_ratio, FuzzyPhraseSet};
use proptest::prelude::*;

const PHRASES: &[&str] = &["machine learning", "neural network", "computer vision", "data mining"];

proptest! {
    #[test]
    fn score_is_bounded_and_symmetric(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        let ab = partial_ratio(&a, &b);
        prop_assert!(ab <= 100);
        prop_assert_eq!(ab, partial_ratio(&b, &a));
    }

    #[test]
    fn verbatim_occurrence_scores_100(prefix in "[a-z ]{0,30}", suffix in "[a-z ]{0,30}", idx in 0usize..4) {
        let phrase = PHRASES[idx];
        let text = format!("{prefix}{phrase}{suffix}");
        prop_assert_eq!(partial_ratio(&text, phrase), 100);
    }

    #[test]
    fn raising_threshold_never_adds_matches(
        texts in proptest::collection::vec("[a-z ]{0,60}", 1..20),
        low in 0u8..=100,
        delta in 0u8..=100,
    ) {
        let high = low.saturating_add(delta).min(100);
        let loose = FuzzyPhraseSet::new(PHRASES, low).unwrap();
        let strict = FuzzyPhraseSet::new(PHRASES, high).unwrap();
        let mut loose_count = 0;
        let mut strict_count = 0;
        for t in &texts {
            let t = normalise(t);
            let l = loose.is_match(&t);
            let s = strict.is_match(&t);
            prop_assert!(!s || l, "matched at {} but not at {} for {:?}", high, low, t);
            loose_count += usize::from(l);
            strict_count += usize::from(s);
        }
        prop_assert!(strict_count <= loose_count);
    }
}
