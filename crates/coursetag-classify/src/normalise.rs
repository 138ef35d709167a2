//! Text canonicalisation applied before any rule or fuzzy matching.
//!
//! ```ignore
//! assert_eq!(normalise("A.I. & Machine-Learning\n"), "ai machine learning");
//! ```

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Dotted single-letter acronyms: "a.i.", "u.s.a", "e.g."
///
/// Group 1 is the character before the chain. A chain continuing a dotted
/// token ("2.a.i", "x.a.b") is outline numbering, not an acronym.
fn dotted_acronym() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|[^a-z0-9.])([a-z](?:\.[a-z])+\b\.?)").unwrap())
}

fn non_alnum() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Canonicalise free text for matching.
///
/// Lower-cases, merges dotted acronyms ("A.I." → "ai"), turns every run of
/// characters outside `[a-z0-9]` into a single space and trims. The output
/// only contains `[a-z0-9 ]`, so the function is idempotent.
pub fn normalise(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lowered = text.to_lowercase();
    let merged = dotted_acronym().replace_all(&lowered, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].replace('.', ""))
    });
    let cleaned = non_alnum().replace_all(&merged, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`normalise`] for optional fields; missing text is treated as empty.
pub fn normalise_opt(text: Option<&str>) -> String {
    text.map(normalise).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acronym_with_periods() {
        assert_eq!(normalise("A.I."), "ai");
        assert_eq!(normalise("Intro to A.I"), "intro to ai");
        assert_eq!(normalise("U.S.A. History"), "usa history");
    }

    #[test]
    fn test_punctuation_and_whitespace_collapse() {
        assert_eq!(
            normalise("  Ethical decision-making:\n\tcase   studies!! "),
            "ethical decision making case studies"
        );
    }

    #[test]
    fn test_outline_numbering_is_not_an_acronym() {
        assert_eq!(normalise("See section 2.a.i for grading."), "see section 2 a i for grading");
        assert_eq!(normalise("Sections 1.a.i through 1.a.iv"), "sections 1 a i through 1 a iv");
        assert_eq!(normalise("A.I."), "ai");
        assert_eq!(normalise("(A.I.) and U.S. law"), "ai and us law");
    }

    #[test]
    fn test_multi_letter_abbreviations_are_split() {
        // Only single-letter chains merge.
        assert_eq!(normalise("Ph.D. seminar"), "ph d seminar");
        assert_eq!(normalise("a.ir"), "a ir");
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(normalise("Café Ética"), "caf tica");
    }

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(normalise(""), "");
        assert_eq!(normalise(" -- ... "), "");
        assert_eq!(normalise_opt(None), "");
    }

    #[test]
    fn test_idempotent_on_samples() {
        for s in ["A.I.", "Machine-Learning 101", "  x  ", "Ünïcödé & C++", "e.g. a.b.c.d"] {
            let once = normalise(s);
            assert_eq!(normalise(&once), once, "not idempotent for {s:?}");
        }
    }
}
