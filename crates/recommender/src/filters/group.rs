//! Filter to keep courses offered to the student's group.

use crate::traits::Filter;
use catalog::{Course, StudentProfile};

/// Keeps courses whose group list contains the student's group.
///
/// ## Algorithm
/// Membership test against `course.group`, not equality: a course offered
/// to `["A", "B"]` is eligible for students in group `"B"`. A student
/// without a text group matches nothing.
pub struct GroupFilter;

impl Filter for GroupFilter {
    fn name(&self) -> &str {
        "GroupFilter"
    }

    fn apply<'a>(&self, courses: Vec<&'a Course>, student: &StudentProfile) -> Vec<&'a Course> {
        courses
            .into_iter()
            .filter(|course| course.offered_to_student(student))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Grade;

    #[test]
    fn test_group_membership() {
        let student = StudentProfile::new(Grade::Number(10), "B", &[], &[]);
        let courses = vec![
            Course::new(Grade::Number(10), &["A", "B"], false, &["shared"]),
            Course::new(Grade::Number(10), &["A"], false, &["a-only"]),
            Course::new(Grade::Number(10), &[], false, &["nobody"]),
            Course::new(Grade::Number(10), &["B"], false, &["b-only"]),
        ];

        let filtered = GroupFilter.apply(courses.iter().collect(), &student);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].tags, vec!["shared"]);
        assert_eq!(filtered[1].tags, vec!["b-only"]);
    }

    #[test]
    fn test_group_match_is_exact() {
        let student = StudentProfile::new(Grade::Number(10), "a", &[], &[]);
        let courses = vec![Course::new(Grade::Number(10), &["A"], false, &[])];

        assert!(GroupFilter.apply(courses.iter().collect(), &student).is_empty());
    }

    #[test]
    fn test_student_without_group_matches_nothing() {
        let mut student = StudentProfile::new(Grade::Number(10), "A", &[], &[]);
        student.group = None;
        let courses = vec![Course::new(Grade::Number(10), &["A"], false, &["math"])];

        assert!(GroupFilter.apply(courses.iter().collect(), &student).is_empty());
    }
}
