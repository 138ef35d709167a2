//! Collapsing multi-term catalogs to one row per course.
//!
//! The same `(prefix, number)` appears once per term it is offered. The unique
//! view keeps the first occurrence's columns and folds every later
//! occurrence's tags into it, so a course positive in any term is positive.
//! Topic subsets pick their representative among the positive rows only, so
//! the written title and description are ones that actually matched.

use std::collections::HashMap;

use tracing::debug;

use coursetag_common::{CourseKey, Topic};

use crate::models::TaggedCourse;

/// One row per course key, sorted by key in natural order.
pub fn unique_courses(rows: &[TaggedCourse]) -> Vec<TaggedCourse> {
    let mut index: HashMap<CourseKey, usize> = HashMap::with_capacity(rows.len());
    let mut unique: Vec<TaggedCourse> = Vec::new();

    for row in rows {
        let key = row.key();
        match index.get(&key).copied() {
            Some(i) => unique[i].merge_tags(row),
            None => {
                index.insert(key, unique.len());
                unique.push(row.clone());
            }
        }
    }

    debug!("Collapsed {} rows to {} unique courses", rows.len(), unique.len());
    unique.sort_by_key(TaggedCourse::key);
    unique
}

/// Courses positive for `topic`, one row each, sorted by key.
///
/// The representative is the first positive row of the course; tags from
/// every row of that course are merged into it as in [`unique_courses`].
pub fn subset(rows: &[TaggedCourse], topic: Topic) -> Vec<TaggedCourse> {
    let (positive, rest): (Vec<&TaggedCourse>, Vec<&TaggedCourse>) =
        rows.iter().partition(|r| r.is_tagged(topic));
    let positive: Vec<TaggedCourse> = positive.into_iter().cloned().collect();
    let mut picked = unique_courses(&positive);

    let index: HashMap<CourseKey, usize> =
        picked.iter().enumerate().map(|(i, r)| (r.key(), i)).collect();
    for row in rest {
        if let Some(&i) = index.get(&row.key()) {
            picked[i].merge_tags(row);
        }
    }
    picked
}
