use crate::error::FormError;
use crate::models::{CourseEntry, Direction, StudentField, StudentInfo};

/// Checks every required field of the form. Returns the first problem in
/// display order: student fields, then the add list, then the drop list.
pub fn validate_required(
    student: &StudentInfo,
    courses_to_add: &[CourseEntry],
    courses_to_drop: &[CourseEntry],
) -> Result<(), FormError> {
    for field in StudentField::ALL {
        if student.field(field).trim().is_empty() {
            return Err(FormError::MissingStudentField(field));
        }
    }

    if !looks_like_email(&student.email) {
        return Err(FormError::InvalidEmail(student.email.clone()));
    }

    validate_courses(Direction::Add, courses_to_add)?;
    validate_courses(Direction::Drop, courses_to_drop)?;
    Ok(())
}

fn validate_courses(direction: Direction, entries: &[CourseEntry]) -> Result<(), FormError> {
    for (index, entry) in entries.iter().enumerate() {
        if let Some(field) = entry.first_blank_field() {
            return Err(FormError::IncompleteCourse {
                direction,
                position: index + 1,
                field,
            });
        }
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseField;

    fn student() -> StudentInfo {
        StudentInfo {
            name: "سارة أحمد".to_string(),
            id: "2041234".to_string(),
            email: "sara@kau.edu.sa".to_string(),
            phone: "0551234567".to_string(),
        }
    }

    fn course(id: u64) -> CourseEntry {
        CourseEntry {
            id,
            code: "CPIT 250".to_string(),
            name: "Systems Analysis".to_string(),
            crn: "40211".to_string(),
            section: "IA".to_string(),
        }
    }

    #[test]
    fn test_complete_form_passes() {
        assert_eq!(validate_required(&student(), &[course(1)], &[course(2)]), Ok(()));
    }

    #[test]
    fn test_empty_course_lists_pass() {
        assert_eq!(validate_required(&student(), &[], &[]), Ok(()));
    }

    #[test]
    fn test_blank_student_field_reported() {
        let mut info = student();
        info.phone = "   ".to_string();
        assert_eq!(
            validate_required(&info, &[], &[]),
            Err(FormError::MissingStudentField(StudentField::Phone))
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b"));
        assert!(!looks_like_email("student.kau.edu.sa"));
        assert!(!looks_like_email("@kau.edu.sa"));
        assert!(!looks_like_email("a@@b"));
        assert!(!looks_like_email("a b@c"));

        let mut info = student();
        info.email = "not-an-email".to_string();
        assert_eq!(
            validate_required(&info, &[], &[]),
            Err(FormError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_incomplete_course_names_position_and_field() {
        let mut second = course(2);
        second.section = String::new();
        assert_eq!(
            validate_required(&student(), &[course(1)], &[course(3), second]),
            Err(FormError::IncompleteCourse {
                direction: Direction::Drop,
                position: 2,
                field: CourseField::Section,
            })
        );
    }
}
