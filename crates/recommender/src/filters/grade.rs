//! Filter to keep courses offered at the student's grade.

use crate::traits::Filter;
use catalog::{Course, StudentProfile};

/// Keeps courses whose grade equals the student's grade exactly.
///
/// Integer and text grades never match each other.
pub struct GradeFilter;

impl Filter for GradeFilter {
    fn name(&self) -> &str {
        "GradeFilter"
    }

    fn apply<'a>(&self, courses: Vec<&'a Course>, student: &StudentProfile) -> Vec<&'a Course> {
        courses
            .into_iter()
            .filter(|course| course.grade == student.grade)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Grade;

    #[test]
    fn test_grade_filter() {
        let student = StudentProfile::new(Grade::Number(10), "A", &[], &[]);
        let courses = vec![
            Course::new(Grade::Number(10), &["A"], false, &["first"]),
            Course::new(Grade::Number(11), &["A"], false, &["second"]),
            Course::new(Grade::Text("10".to_string()), &["A"], false, &["third"]),
            Course::new(Grade::Number(10), &["A"], false, &["fourth"]),
        ];

        let filtered = GradeFilter.apply(courses.iter().collect(), &student);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].tags, vec!["first"]);
        assert_eq!(filtered[1].tags, vec!["fourth"]);
    }
}
