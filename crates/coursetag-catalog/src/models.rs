//! Classified catalog rows.

use coursetag_classify::{CourseClassifier, CourseFlags, TopicClassifier};
use coursetag_common::{ClassificationResult, CourseKey, CourseRecord, Topic};

use crate::reader::CourseTable;

/// A course row plus one classification per topic, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedCourse {
    pub record: CourseRecord,
    pub tags: Vec<(Topic, ClassificationResult)>,
}

impl TaggedCourse {
    pub fn key(&self) -> CourseKey {
        self.record.key()
    }

    pub fn tag(&self, topic: Topic) -> Option<&ClassificationResult> {
        self.tags.iter().find(|(t, _)| *t == topic).map(|(_, r)| r)
    }

    pub fn is_tagged(&self, topic: Topic) -> bool {
        self.tag(topic).is_some_and(|r| r.matched)
    }

    /// Fold another row of the same course into this one, topic by topic.
    pub fn merge_tags(&mut self, other: &TaggedCourse) {
        for (topic, result) in &mut self.tags {
            if let Some(theirs) = other.tag(*topic) {
                result.merge(theirs);
            }
        }
    }
}

/// Input table with classifications attached to every row.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedCatalog {
    headers: Vec<String>,
    topics: Vec<Topic>,
    rows: Vec<TaggedCourse>,
}

impl TaggedCatalog {
    /// Run both topic pipelines over every row.
    pub fn classify(table: CourseTable, classifier: &CourseClassifier) -> Self {
        let flags = classifier.classify_batch(&table.records);
        Self::from_flags(table, flags)
    }

    /// Run a single topic pipeline over every row.
    pub fn classify_topic(table: CourseTable, classifier: &TopicClassifier) -> Self {
        let results = classifier.classify_batch(&table.records);
        Self::from_topic(table, classifier.topic(), results)
    }

    /// Pair each record with its AI and ethics flags.
    ///
    /// `flags` must be in record order, as returned by
    /// [`CourseClassifier::classify_batch`](coursetag_classify::CourseClassifier::classify_batch).
    pub fn from_flags(table: CourseTable, flags: Vec<CourseFlags>) -> Self {
        debug_assert_eq!(table.records.len(), flags.len());
        let rows = table
            .records
            .into_iter()
            .zip(flags)
            .map(|(record, f)| TaggedCourse {
                record,
                tags: vec![(Topic::Ai, f.ai), (Topic::Ethics, f.ethics)],
            })
            .collect();
        Self { headers: table.headers, topics: vec![Topic::Ai, Topic::Ethics], rows }
    }

    /// Pair each record with a single topic's result.
    pub fn from_topic(table: CourseTable, topic: Topic, results: Vec<ClassificationResult>) -> Self {
        debug_assert_eq!(table.records.len(), results.len());
        let rows = table
            .records
            .into_iter()
            .zip(results)
            .map(|(record, r)| TaggedCourse { record, tags: vec![(topic, r)] })
            .collect();
        Self { headers: table.headers, topics: vec![topic], rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Every input row, in input order.
    pub fn rows(&self) -> &[TaggedCourse] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One row per course key. See [`crate::dedup::unique_courses`].
    pub fn unique(&self) -> Vec<TaggedCourse> {
        crate::dedup::unique_courses(&self.rows)
    }

    /// Courses positive for `topic`, in key order. See [`crate::dedup::subset`].
    pub fn subset(&self, topic: Topic) -> Vec<TaggedCourse> {
        crate::dedup::subset(&self.rows, topic)
    }

    /// Output header: input columns followed by flag and reason per topic.
    /// A topic column already present in the input is reused in place.
    pub fn output_headers(&self) -> Vec<String> {
        let mut headers = self.headers.clone();
        for topic in &self.topics {
            for col in [topic.flag_column(), topic.reason_column()] {
                if !headers.iter().any(|h| h == col) {
                    headers.push(col.to_string());
                }
            }
        }
        headers
    }
}
