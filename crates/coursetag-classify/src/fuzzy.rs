//! Approximate phrase matching used as a recall safety net on top of rules.
//!
//! Scores are partial similarities on a 0–100 scale: the shorter string is
//! aligned against its best-matching substring of the longer one, so 100 means
//! a verbatim contiguous occurrence and small typos cost a few points.

use coursetag_common::{CoursetagError, Result};

use crate::normalise::normalise;

/// Partial similarity between two strings, 0–100.
///
/// Empty input scores 0. Equal-length strings use plain normalised
/// Levenshtein similarity.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0;
    }

    if a_chars.len() == b_chars.len() {
        let similarity = strsim::normalized_levenshtein(a, b);
        return (similarity * 100.0).round().clamp(0.0, 100.0) as u8;
    }

    let (needle, haystack) = if a_chars.len() < b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };
    let m = needle.len();
    let distance = best_substring_distance(needle, haystack);
    (((m - distance) * 100 + m / 2) / m) as u8
}

/// Smallest edit distance between `needle` and any substring of `haystack`
/// (semi-global alignment: free start and end in the haystack).
fn best_substring_distance(needle: &[char], haystack: &[char]) -> usize {
    let m = needle.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];
    let mut best = m;

    for &h in haystack {
        curr[0] = 0;
        for i in 1..=m {
            let substitution = prev[i - 1] + usize::from(needle[i - 1] != h);
            curr[i] = substitution.min(prev[i] + 1).min(curr[i - 1] + 1);
        }
        best = best.min(curr[m]);
        if best == 0 {
            break;
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

/// Canonical topic phrases plus the match threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyPhraseSet {
    phrases: Vec<String>,
    threshold: u8,
}

impl FuzzyPhraseSet {
    /// Phrases are normalised on construction; blanks and duplicates are
    /// dropped. A threshold above 100 is a configuration error.
    pub fn new<S: AsRef<str>>(phrases: impl IntoIterator<Item = S>, threshold: u8) -> Result<Self> {
        if threshold > 100 {
            return Err(CoursetagError::Config(format!(
                "fuzzy threshold must be between 0 and 100, got {threshold}"
            )));
        }
        let mut normalised: Vec<String> = Vec::new();
        for phrase in phrases {
            let p = normalise(phrase.as_ref());
            if !p.is_empty() && !normalised.contains(&p) {
                normalised.push(p);
            }
        }
        Ok(Self { phrases: normalised, threshold })
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Best score over all phrases; 0 for empty text or an empty set.
    pub fn max_score(&self, text_norm: &str) -> u8 {
        if text_norm.is_empty() {
            return 0;
        }
        self.phrases
            .iter()
            .map(|phrase| partial_ratio(text_norm, phrase))
            .max()
            .unwrap_or(0)
    }

    /// `text_norm` must already be normalised.
    pub fn is_match(&self, text_norm: &str) -> bool {
        if text_norm.is_empty() || self.phrases.is_empty() {
            return false;
        }
        self.max_score(text_norm) >= self.threshold
    }
}
