//! # Course Recommender
//!
//! Turns a student profile and a catalog into a short, ordered list:
//! 1. Locate the mandatory course (fail if there is none)
//! 2. Keep eligible courses (not mandatory, same grade, offered to the group)
//! 3. Score each by distinct tag overlap with skills ∪ interests
//! 4. Drop zero scores
//! 5. Stable sort by score, highest first; ties keep catalog order
//! 6. Take the top `limit` (2 by default)
//! 7. Append the mandatory course
//!
//! Pure and synchronous. The catalog is passed in, never read from global
//! state, and nothing is modified.

use catalog::{Course, StudentProfile};
use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::scoring::{InterestSet, ScoredCourse};

/// Number of ranked courses placed ahead of the mandatory course
pub const DEFAULT_LIMIT: usize = 2;

/// Configurable recommender; `Send + Sync`, so one instance can be shared
/// across request handlers.
pub struct Recommender {
    pipeline: FilterPipeline,
    limit: usize,
}

impl Recommender {
    /// Eligibility pipeline and the default limit of 2
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::eligibility(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Change how many ranked courses precede the mandatory course
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Recommend courses for `student` from `catalog`.
    ///
    /// # Returns
    /// Up to `limit` ranked courses followed by the mandatory course, or
    /// `RecommendError::NoMandatoryCourse`.
    pub fn recommend(&self, student: &StudentProfile, catalog: &[Course]) -> Result<Vec<Course>> {
        let mandatory = catalog
            .iter()
            .find(|course| course.mandatory)
            .ok_or(RecommendError::NoMandatoryCourse {
                catalog_size: catalog.len(),
            })?;

        let mut ranked = self.rank(student, catalog);
        ranked.truncate(self.limit);

        debug!(
            "Selected {} ranked courses for grade {} / group {}",
            ranked.len(),
            student.grade,
            student.group.as_deref().unwrap_or("<none>")
        );

        let mut recommendations: Vec<Course> = ranked
            .into_iter()
            .map(|scored| scored.course.clone())
            .collect();
        recommendations.push(mandatory.clone());

        Ok(recommendations)
    }

    /// Every eligible course with a non-zero score, best first.
    ///
    /// Ties keep catalog order. No truncation and no mandatory course; this
    /// is the ranking `recommend` selects from.
    pub fn rank<'a>(&self, student: &StudentProfile, catalog: &'a [Course]) -> Vec<ScoredCourse<'a>> {
        let eligible = self.pipeline.apply(catalog, student);
        let interests = InterestSet::from_student(student);

        let mut scored: Vec<ScoredCourse<'a>> = eligible
            .into_iter()
            .map(|course| ScoredCourse::new(course, &interests))
            .filter(|scored| scored.score > 0)
            .collect();

        // Vec::sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            "Ranked {} of {} catalog courses ({} distinct interests)",
            scored.len(),
            catalog.len(),
            interests.len()
        );

        scored
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommend with the default rules: top 2 plus the mandatory course
pub fn recommend(student: &StudentProfile, catalog: &[Course]) -> Result<Vec<Course>> {
    Recommender::new().recommend(student, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CourseId, Grade};

    fn course(id: i64, tags: &[&str]) -> Course {
        Course::new(Grade::Number(10), &["A"], false, tags).with_id(CourseId::Number(id))
    }

    fn mandatory() -> Course {
        Course::new(Grade::Number(10), &["A"], true, &["math"]).with_id(CourseId::Number(99))
    }

    fn ids(courses: &[Course]) -> Vec<i64> {
        courses
            .iter()
            .map(|c| match c.id {
                Some(CourseId::Number(n)) => n,
                _ => panic!("test courses carry numeric ids"),
            })
            .collect()
    }

    #[test]
    fn test_sorts_by_score_descending() {
        let catalog = vec![
            course(1, &["math"]),
            course(2, &["math", "art", "music"]),
            course(3, &["math", "art"]),
            mandatory(),
        ];
        let student = StudentProfile::new(Grade::Number(10), "A", &["math", "art"], &["music"]);

        let result = recommend(&student, &catalog).unwrap();
        assert_eq!(ids(&result), vec![2, 3, 99]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            course(1, &["art"]),
            course(2, &["math"]),
            course(3, &["math", "art"]),
            course(4, &["art"]),
            mandatory(),
        ];
        let student = StudentProfile::new(Grade::Number(10), "A", &["math"], &["art"]);

        let recommender = Recommender::new();
        let ranked: Vec<_> = recommender
            .rank(&student, &catalog)
            .iter()
            .map(|s| (s.course.id.clone(), s.score))
            .collect();
        assert_eq!(
            ranked,
            vec![
                (Some(CourseId::Number(3)), 2),
                (Some(CourseId::Number(1)), 1),
                (Some(CourseId::Number(2)), 1),
                (Some(CourseId::Number(4)), 1),
            ]
        );

        let result = recommender.recommend(&student, &catalog).unwrap();
        assert_eq!(ids(&result), vec![3, 1, 99]);
    }

    #[test]
    fn test_mandatory_course_is_never_scored() {
        // The mandatory course matches "math" but must not take a ranked slot
        let catalog = vec![mandatory(), course(1, &["art"])];
        let student = StudentProfile::new(Grade::Number(10), "A", &["math"], &[]);

        let result = recommend(&student, &catalog).unwrap();
        assert_eq!(ids(&result), vec![99]);
    }

    #[test]
    fn test_first_mandatory_course_wins() {
        let second = Course::new(Grade::Number(10), &["A"], true, &[]).with_id(CourseId::Number(100));
        let catalog = vec![course(1, &["art"]), mandatory(), second];
        let student = StudentProfile::new(Grade::Number(10), "A", &["art"], &[]);

        let result = recommend(&student, &catalog).unwrap();
        assert_eq!(ids(&result), vec![1, 99]);
    }

    #[test]
    fn test_custom_limit() {
        let catalog = vec![
            course(1, &["art"]),
            course(2, &["art"]),
            course(3, &["art"]),
            mandatory(),
        ];
        let student = StudentProfile::new(Grade::Number(10), "A", &["art"], &[]);

        let three = Recommender::new().with_limit(3);
        assert_eq!(three.limit(), 3);
        assert_eq!(ids(&three.recommend(&student, &catalog).unwrap()), vec![1, 2, 3, 99]);

        let zero = Recommender::new().with_limit(0);
        assert_eq!(ids(&zero.recommend(&student, &catalog).unwrap()), vec![99]);
    }

    #[test]
    fn test_missing_mandatory_fails_before_ranking() {
        let catalog = vec![course(1, &["art"])];
        let student = StudentProfile::new(Grade::Number(10), "A", &["art"], &[]);

        assert_eq!(
            recommend(&student, &catalog),
            Err(RecommendError::NoMandatoryCourse { catalog_size: 1 })
        );
        assert_eq!(
            recommend(&student, &[]),
            Err(RecommendError::NoMandatoryCourse { catalog_size: 0 })
        );
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let catalog = vec![course(1, &["art", "art"]), mandatory()];
        let before = catalog.clone();
        let student = StudentProfile::new(Grade::Number(10), "A", &["art"], &[]);

        let result = recommend(&student, &catalog).unwrap();
        assert_eq!(catalog, before);
        assert_eq!(result[0], before[0], "recommended courses are plain copies");
    }
}
