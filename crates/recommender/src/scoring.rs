//! Tag overlap scoring.
//!
//! A course scores one point for every distinct tag it shares with the
//! student's skills ∪ interests. Both sides are treated as sets, so a tag
//! repeated in a course, or listed as both a skill and an interest, still
//! counts once.

use catalog::{Course, StudentProfile};
use std::collections::HashSet;

/// Union of a student's skills and interests
#[derive(Debug, Clone, Default)]
pub struct InterestSet<'a> {
    labels: HashSet<&'a str>,
}

impl<'a> InterestSet<'a> {
    pub fn from_student(student: &'a StudentProfile) -> Self {
        let labels = student
            .skills
            .iter()
            .chain(student.interests.iter())
            .map(String::as_str)
            .collect();
        Self { labels }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A course paired with its overlap score. Only lives during ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCourse<'a> {
    pub course: &'a Course,
    pub score: usize,
}

impl<'a> ScoredCourse<'a> {
    pub fn new(course: &'a Course, interests: &InterestSet<'_>) -> Self {
        Self {
            course,
            score: score_course(course, interests),
        }
    }
}

/// Count distinct course tags present in `interests`
pub fn score_course(course: &Course, interests: &InterestSet<'_>) -> usize {
    if interests.is_empty() {
        return 0;
    }
    course
        .tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|tag| interests.contains(tag))
        .count()
}
