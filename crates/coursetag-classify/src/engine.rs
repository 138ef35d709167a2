//! Per-topic classification: rule tier first, fuzzy safety net second.
//!
//! `flag = rule_match || (fuzzy_enabled && fuzzy_match)`

use tracing::info;

use coursetag_common::{ClassificationResult, CourseRecord, Result, Topic};

use crate::catalogue;
#[cfg(feature = "fuzzy")]
use crate::fuzzy::FuzzyPhraseSet;
use crate::rules::{NormalisedText, Rule, RuleSet};

pub const DEFAULT_THRESHOLD: u8 = 85;

/// Batches larger than this are classified on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Operating mode of the fuzzy tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzySettings {
    pub enabled: bool,
    /// 0–100; higher is stricter.
    pub threshold: u8,
}

impl Default for FuzzySettings {
    fn default() -> Self {
        Self { enabled: true, threshold: DEFAULT_THRESHOLD }
    }
}

impl FuzzySettings {
    /// Rules-only mode.
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }
}

/// Rule set plus optional fuzzy phrases for a single topic.
#[derive(Debug)]
pub struct TopicClassifier {
    topic: Topic,
    rules: RuleSet,
    #[cfg(feature = "fuzzy")]
    fuzzy: Option<FuzzyPhraseSet>,
}

impl TopicClassifier {
    /// Rules-only classifier.
    pub fn new(topic: Topic, rules: RuleSet) -> Self {
        Self {
            topic,
            rules,
            #[cfg(feature = "fuzzy")]
            fuzzy: None,
        }
    }

    /// Compile `rules` and attach fuzzy phrases according to `settings`.
    pub fn build<S: AsRef<str>>(
        topic: Topic,
        rules: Vec<Rule>,
        phrases: &[S],
        settings: &FuzzySettings,
    ) -> Result<Self> {
        let rules = RuleSet::compile(topic.as_str(), rules)?;
        Self::new(topic, rules).with_fuzzy(phrases, settings)
    }

    /// Enable the fuzzy tier. Requesting it from a build without the `fuzzy`
    /// feature fails instead of silently running rules-only.
    pub fn with_fuzzy<S: AsRef<str>>(self, phrases: &[S], settings: &FuzzySettings) -> Result<Self> {
        if !settings.enabled {
            return Ok(self);
        }

        #[cfg(feature = "fuzzy")]
        {
            let set = FuzzyPhraseSet::new(phrases, settings.threshold)?;
            if set.is_empty() {
                tracing::debug!("No fuzzy phrases for '{}'; rules only", self.topic.as_str());
                return Ok(self);
            }
            Ok(Self { fuzzy: Some(set), ..self })
        }

        #[cfg(not(feature = "fuzzy"))]
        {
            let _ = phrases;
            Err(coursetag_common::CoursetagError::FuzzyUnavailable)
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn fuzzy_enabled(&self) -> bool {
        #[cfg(feature = "fuzzy")]
        {
            self.fuzzy.is_some()
        }
        #[cfg(not(feature = "fuzzy"))]
        {
            false
        }
    }

    pub fn classify(&self, title: Option<&str>, description: Option<&str>) -> ClassificationResult {
        self.classify_normalised(&NormalisedText::new(title, description))
    }

    pub fn classify_normalised(&self, text: &NormalisedText) -> ClassificationResult {
        let mut result = self.rules.evaluate(text).into_result();
        if !result.matched && self.fuzzy_match(text.combined()) {
            result.matched = true;
        }
        result
    }

    pub fn classify_record(&self, record: &CourseRecord) -> ClassificationResult {
        self.classify(Some(&record.title), Some(&record.description))
    }

    /// Classify every record; output order equals input order.
    pub fn classify_batch(&self, records: &[CourseRecord]) -> Vec<ClassificationResult> {
        let results = batch_map(records, |r| self.classify_record(r));
        info!(
            "Classified {} records for '{}': {} positive",
            records.len(),
            self.topic.as_str(),
            results.iter().filter(|r| r.matched).count()
        );
        results
    }

    #[cfg(feature = "fuzzy")]
    fn fuzzy_match(&self, combined: &str) -> bool {
        self.fuzzy.as_ref().is_some_and(|set| set.is_match(combined))
    }

    #[cfg(not(feature = "fuzzy"))]
    fn fuzzy_match(&self, _combined: &str) -> bool {
        false
    }
}

/// AI and ethics flags for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFlags {
    pub ai: ClassificationResult,
    pub ethics: ClassificationResult,
}

impl CourseFlags {
    pub fn get(&self, topic: Topic) -> Option<&ClassificationResult> {
        match topic {
            Topic::Ai          => Some(&self.ai),
            Topic::Ethics      => Some(&self.ethics),
            Topic::AiCandidate => None,
        }
    }
}

/// The two independent topic pipelines evaluated per course.
#[derive(Debug)]
pub struct CourseClassifier {
    ai: TopicClassifier,
    ethics: TopicClassifier,
}

impl CourseClassifier {
    pub fn new(ai: TopicClassifier, ethics: TopicClassifier) -> Self {
        Self { ai, ethics }
    }

    /// Built-in AI and ethics catalogues.
    pub fn builtin(settings: &FuzzySettings) -> Result<Self> {
        let ai = TopicClassifier::build(Topic::Ai, catalogue::ai_rules(), catalogue::AI_FUZZY_PHRASES, settings)?;
        let ethics = TopicClassifier::build(
            Topic::Ethics,
            catalogue::ethics_rules(true),
            catalogue::ETHICS_FUZZY_PHRASES,
            settings,
        )?;
        Ok(Self::new(ai, ethics))
    }

    pub fn ai(&self) -> &TopicClassifier {
        &self.ai
    }

    pub fn ethics(&self) -> &TopicClassifier {
        &self.ethics
    }

    /// Text is normalised once and shared by both topics.
    pub fn classify(&self, record: &CourseRecord) -> CourseFlags {
        let text = NormalisedText::new(Some(&record.title), Some(&record.description));
        CourseFlags {
            ai: self.ai.classify_normalised(&text),
            ethics: self.ethics.classify_normalised(&text),
        }
    }

    pub fn classify_batch(&self, records: &[CourseRecord]) -> Vec<CourseFlags> {
        let flags = batch_map(records, |r| self.classify(r));
        info!(
            "Classified {} records: {} AI-related, {} ethics-related",
            records.len(),
            flags.iter().filter(|f| f.ai.matched).count(),
            flags.iter().filter(|f| f.ethics.matched).count()
        );
        flags
    }
}

/// Broad AI recall classifier from the built-in candidate catalogue.
pub fn candidate_classifier(settings: &FuzzySettings) -> Result<TopicClassifier> {
    TopicClassifier::build(
        Topic::AiCandidate,
        catalogue::candidate_rules(),
        catalogue::CANDIDATE_FUZZY_PHRASES,
        settings,
    )
}

/// Order-preserving map over records, parallel for large batches.
fn batch_map<T, F>(records: &[CourseRecord], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&CourseRecord) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if records.len() > PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            return records.par_iter().map(&f).collect();
        }
    }
    records.iter().map(f).collect()
}
