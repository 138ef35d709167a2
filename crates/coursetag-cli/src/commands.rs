//! Subcommand implementations. Classifiers are built and the input header is
//! validated before any record is classified.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use coursetag_catalog::{load_courses, write_courses, TaggedCatalog};
use coursetag_classify::{catalogue, CourseClassifier, FuzzySettings, Rule, Scope, TopicClassifier};
use coursetag_common::Topic;

use crate::config::Config;

/// Lines printed to stdout once every file is written.
#[derive(Debug, Default)]
pub struct Summary {
    lines: Vec<String>,
}

impl Summary {
    fn wrote(&mut self, count: usize, what: &str, path: &Path) {
        self.lines.push(format!("Wrote {count} {what} to {}", path.display()));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn topic_classifier(
    topic: Topic,
    rules: Vec<Rule>,
    phrases: &[String],
    settings: &FuzzySettings,
) -> anyhow::Result<TopicClassifier> {
    let clf = TopicClassifier::build(topic, rules, phrases, settings)
        .with_context(|| format!("building '{}' classifier", topic.as_str()))?;
    Ok(clf)
}

pub struct AnalyzeArgs {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub fuzzy_threshold: Option<u32>,
    pub disable_fuzzy: bool,
}

/// Both topics; raw, unique and per-topic subset files.
pub fn analyze(args: &AnalyzeArgs, config: &Config) -> anyhow::Result<Summary> {
    let settings = config.fuzzy_settings(args.fuzzy_threshold, args.disable_fuzzy)?;
    let ai = topic_classifier(
        Topic::Ai,
        config.ai.rules(catalogue::ai_rules()),
        &config.ai.phrases(catalogue::AI_FUZZY_PHRASES),
        &settings,
    )?;
    let ethics = topic_classifier(
        Topic::Ethics,
        config.ethics.rules(catalogue::ethics_rules(true)),
        &config.ethics.phrases(catalogue::ETHICS_FUZZY_PHRASES),
        &settings,
    )?;
    let classifier = CourseClassifier::new(ai, ethics);
    info!(
        "Fuzzy matching: {} (threshold {})",
        if settings.enabled { "on" } else { "off" },
        settings.threshold
    );

    let table = load_courses(&args.input)?;
    let catalog = TaggedCatalog::classify(table, &classifier);
    let unique = catalog.unique();

    let out = &config.output;
    let mut summary = Summary::default();

    let path = args.output_dir.join(&out.raw);
    summary.wrote(write_courses(&path, &catalog, catalog.rows())?, "course rows", &path);

    let path = args.output_dir.join(&out.unique);
    summary.wrote(write_courses(&path, &catalog, &unique)?, "unique courses", &path);

    let path = args.output_dir.join(&out.ai_subset);
    summary.wrote(write_courses(&path, &catalog, &catalog.subset(Topic::Ai))?, "AI-related courses", &path);

    let path = args.output_dir.join(&out.ethics_subset);
    summary.wrote(
        write_courses(&path, &catalog, &catalog.subset(Topic::Ethics))?,
        "ethics-related courses",
        &path,
    );

    Ok(summary)
}

pub struct EthicsArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title_only: bool,
}

/// Conservative ethics subset only.
///
/// With `title_only`, configured rules scoped to the description or the
/// combined text are skipped and fuzzy matching is off, so no description
/// text can flag a course.
pub fn ethics(args: &EthicsArgs, config: &Config) -> anyhow::Result<Summary> {
    let mut rules = config.ethics.rules(catalogue::ethics_rules(!args.title_only));
    let mut settings = config.fuzzy_settings(None, false)?;
    if args.title_only {
        let before = rules.len();
        rules.retain(|r| r.scope == Scope::Title);
        if rules.len() < before {
            warn!(
                "Title-only mode: skipping {} configured ethics rule(s) not scoped to the title",
                before - rules.len()
            );
        }
        settings.enabled = false;
        info!("Ethics matching on titles only");
    }
    let classifier = topic_classifier(
        Topic::Ethics,
        rules,
        &config.ethics.phrases(catalogue::ETHICS_FUZZY_PHRASES),
        &settings,
    )?;

    let table = load_courses(&args.input)?;
    let catalog = TaggedCatalog::classify_topic(table, &classifier);
    let rows = catalog.subset(Topic::Ethics);

    let mut summary = Summary::default();
    summary.wrote(write_courses(&args.output, &catalog, &rows)?, "ethics-related courses", &args.output);
    Ok(summary)
}

pub struct CandidatesArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub fuzzy_threshold: Option<u32>,
    pub disable_fuzzy: bool,
}

/// Broad AI recall list for manual review.
pub fn candidates(args: &CandidatesArgs, config: &Config) -> anyhow::Result<Summary> {
    let settings = config.fuzzy_settings(args.fuzzy_threshold, args.disable_fuzzy)?;
    let classifier = topic_classifier(
        Topic::AiCandidate,
        config.candidates.rules(catalogue::candidate_rules()),
        &config.candidates.phrases(catalogue::CANDIDATE_FUZZY_PHRASES),
        &settings,
    )?;

    let table = load_courses(&args.input)?;
    let catalog = TaggedCatalog::classify_topic(table, &classifier);
    let rows = catalog.subset(Topic::AiCandidate);

    let mut summary = Summary::default();
    summary.wrote(write_courses(&args.output, &catalog, &rows)?, "AI candidate courses", &args.output);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = "\
term,prefix,number,title,description
Fall 2025,CS,470,Artificial Intelligence,Study of artificial intelligence and intelligent systems.
Spring 2026,CS,470,Artificial Intelligence,Study of artificial intelligence and intelligent systems.
Fall 2025,PHIL,100,Introduction to Ethics,Professional ethics and ethical decision-making in modern society.
";

    fn write_fixture(dir: &Path) -> PathBuf {
        let path = dir.join("courses.csv");
        std::fs::write(&path, FIXTURE).unwrap();
        path
    }

    fn count_rows(path: &Path) -> usize {
        std::fs::read_to_string(path).unwrap().lines().count() - 1
    }

    #[test]
    fn test_analyze_writes_four_views() {
        let dir = tempfile::tempdir().unwrap();
        let args = AnalyzeArgs {
            input: write_fixture(dir.path()),
            output_dir: dir.path().join("out"),
            fuzzy_threshold: None,
            disable_fuzzy: true,
        };
        let summary = analyze(&args, &Config::default()).unwrap();
        assert_eq!(summary.lines().len(), 4);

        let out = dir.path().join("out");
        assert_eq!(count_rows(&out.join("courses_with_flag.csv")), 3);
        assert_eq!(count_rows(&out.join("unique_courses_with_flag.csv")), 2);
        assert_eq!(count_rows(&out.join("courses_ai_subset.csv")), 1);
        assert_eq!(count_rows(&out.join("courses_ethics_subset.csv")), 1);
        assert!(summary.lines()[2].starts_with("Wrote 1 AI-related courses to "));
    }

    #[test]
    fn test_ethics_title_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("courses.csv");
        std::fs::write(
            &input,
            "prefix,number,title,description\n\
             NURS,210,Nursing Practice,Covers professional ethics at the bedside.\n\
             PHIL,100,Introduction to Ethics,\n",
        )
        .unwrap();

        let mut args = EthicsArgs { input, output: dir.path().join("ethics.csv"), title_only: false };
        let config = Config::from_toml("[fuzzy]\nenabled = false\n").unwrap();
        ethics(&args, &config).unwrap();
        assert_eq!(count_rows(&args.output), 2);

        args.title_only = true;
        ethics(&args, &config).unwrap();
        let written = std::fs::read_to_string(&args.output).unwrap();
        assert_eq!(
            written,
            "prefix,number,title,description,is_ethics_related,ethics_reason\n\
             PHIL,100,Introduction to Ethics,,true,title_ethics\n"
        );
    }

    #[test]
    fn test_ethics_title_only_skips_description_rules_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("courses.csv");
        std::fs::write(
            &input,
            "prefix,number,title,description\n\
             BIO,450,Lab Methods,Covers research integrity and data handling.\n\
             PHIL,320,Moral Philosophy,Readings.\n",
        )
        .unwrap();
        let config = Config::from_toml(
            "[[ethics.extra_rules]]\nlabel = \"research_integrity\"\npattern = \"research integrity\"\n\
             tier = \"primary\"\nscope = \"description\"\n\
             [[ethics.extra_rules]]\nlabel = \"title_moral\"\npattern = \"moral philosophy\"\n\
             tier = \"primary\"\nscope = \"title\"\n",
        )
        .unwrap();

        let mut args = EthicsArgs { input, output: dir.path().join("ethics.csv"), title_only: false };
        ethics(&args, &config).unwrap();
        let written = std::fs::read_to_string(&args.output).unwrap();
        assert!(written.contains("BIO,450,"));

        args.title_only = true;
        ethics(&args, &config).unwrap();
        let written = std::fs::read_to_string(&args.output).unwrap();
        assert!(!written.contains("BIO,450,"));
        assert!(written.ends_with("PHIL,320,Moral Philosophy,Readings.,true,title_moral\n"));
    }

    #[test]
    fn test_candidates_extra_rule_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("courses.csv");
        std::fs::write(&input, "prefix,number,title,description\nENG,330,Prompt Craft,Writing with chatbots.\n").unwrap();
        let config = Config::from_toml(
            "[[candidates.extra_rules]]\nlabel = \"chatbots\"\npattern = \"chatbots?\"\ntier = \"primary\"\n",
        )
        .unwrap();
        let args = CandidatesArgs {
            input,
            output: dir.path().join("candidates.csv"),
            fuzzy_threshold: None,
            disable_fuzzy: true,
        };
        candidates(&args, &config).unwrap();
        let written = std::fs::read_to_string(&args.output).unwrap();
        assert!(written.ends_with("ENG,330,Prompt Craft,Writing with chatbots.,true,chatbots\n"));
    }

    #[test]
    fn test_missing_columns_fail_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("courses.csv");
        std::fs::write(&input, "prefix,number\nCS,470\n").unwrap();
        let args = AnalyzeArgs {
            input,
            output_dir: dir.path().join("out"),
            fuzzy_threshold: None,
            disable_fuzzy: true,
        };
        let err = analyze(&args, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Missing required columns: title, description"));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_bad_rule_pattern_is_reported() {
        let config = Config::from_toml(
            "[[ai.extra_rules]]\nlabel = \"broken\"\npattern = \"(unclosed\"\ntier = \"primary\"\n",
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let args = AnalyzeArgs {
            input: write_fixture(dir.path()),
            output_dir: dir.path().join("out"),
            fuzzy_threshold: None,
            disable_fuzzy: true,
        };
        let err = analyze(&args, &config).unwrap_err();
        assert!(format!("{err:#}").contains("broken"));
    }
}
