//! Course records and their natural key.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Natural key of a course: `(prefix, number)`, e.g. `("CS", "470")`.
///
/// The same key may appear once per term in the raw catalog. Keys order by
/// prefix, then by number in natural order (`99 < 101 < 101A`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseKey {
    pub prefix: String,
    pub number: String,
}

impl CourseKey {
    pub fn new(prefix: impl Into<String>, number: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), number: number.into() }
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.number)
    }
}

impl Ord for CourseKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.prefix
            .cmp(&other.prefix)
            .then_with(|| natural_cmp(&self.number, &other.number))
    }
}

impl PartialOrd for CourseKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare course numbers: leading digits numerically, then the suffix.
/// Numbers without leading digits sort after numbered ones.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a_digits, a_rest) = split_leading_digits(a);
    let (b_digits, b_rest) = split_leading_digits(b);

    let numeric = match (a_digits.is_empty(), b_digits.is_empty()) {
        (false, false) => {
            let a_trim = a_digits.trim_start_matches('0');
            let b_trim = b_digits.trim_start_matches('0');
            a_trim.len().cmp(&b_trim.len()).then_with(|| a_trim.cmp(b_trim))
        }
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    };

    // Raw comparison last keeps the order consistent with `Eq` ("070" vs "70").
    numeric.then_with(|| a_rest.cmp(b_rest)).then_with(|| a.cmp(b))
}

fn split_leading_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// One row of the course catalog (one course offered in one term).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub term: Option<String>,
    pub prefix: String,
    pub number: String,
    pub title: String,
    /// Empty when the catalog has no description for this course.
    pub description: String,
    /// Every input column in header order, passed through unchanged.
    pub fields: Vec<String>,
}

impl CourseRecord {
    pub fn key(&self) -> CourseKey {
        CourseKey::new(self.prefix.clone(), self.number.clone())
    }
}

/// Topical tag assigned by the classification engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    /// AI-related, with context gating on broad terms.
    Ai,
    /// Ethics-related (conservative matcher).
    Ethics,
    /// Broad AI recall list, intentionally permissive.
    AiCandidate,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Ai          => "ai",
            Topic::Ethics      => "ethics",
            Topic::AiCandidate => "ai_candidate",
        }
    }

    /// Boolean column appended to output rows.
    pub fn flag_column(&self) -> &'static str {
        match self {
            Topic::Ai          => "is_ai_related",
            Topic::Ethics      => "is_ethics_related",
            Topic::AiCandidate => "is_ai_candidate",
        }
    }

    /// Reason column appended to output rows.
    pub fn reason_column(&self) -> &'static str {
        match self {
            Topic::Ai          => "ai_reason",
            Topic::Ethics      => "ethics_reason",
            Topic::AiCandidate => "ai_candidate_reason",
        }
    }
}
