//! coursetag-classify: Rule-based course classification engine.
//!
//! Three matchers cooperate per topic:
//! - `normalise`: canonical lower-case text for matching
//! - `rules`: primary / secondary / context regex tiers with gating
//! - `fuzzy`: partial-similarity safety net (feature `fuzzy`)
//!
//! Rule sets and phrase sets are built once and shared read-only; every
//! classification is a pure function of the record text.

pub mod catalogue;
pub mod engine;
pub mod normalise;
pub mod rules;
#[cfg(feature = "fuzzy")]
pub mod fuzzy;

pub use engine::{candidate_classifier, CourseClassifier, CourseFlags, FuzzySettings, TopicClassifier};
#[cfg(feature = "fuzzy")]
pub use fuzzy::{partial_ratio, FuzzyPhraseSet};
pub use normalise::normalise;
pub use rules::{NormalisedText, Rule, RuleSet, Scope, Tier};
