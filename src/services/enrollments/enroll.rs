use tracing::error;

use super::EnrollmentService;
use crate::errors::{ClassworksError, Result};
use crate::models::enrollments::entities::Enrollment;
use crate::models::users::entities::UserRole;
use crate::policy::{self, Action, Actor};

pub async fn enroll_student(
    service: &EnrollmentService,
    actor: &Actor,
    course_id: i64,
    student_id: i64,
) -> Result<Enrollment> {
    let course = service
        .storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Course not found"))?;

    policy::authorize(
        actor,
        &Action::ManageCourse {
            teacher_id: course.teacher_id,
        },
    )?;

    // 选课对象必须存在且为学生角色
    let student = service
        .storage
        .get_user_by_id(student_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Student not found"))?;

    if student.role != UserRole::Student {
        return Err(ClassworksError::validation(
            "Enrollments can only be created for users with student role",
        ));
    }

    // 重复选课是明确的冲突，不做静默幂等
    if service
        .storage
        .get_enrollment_by_course_and_student(course_id, student_id)
        .await?
        .is_some()
    {
        return Err(ClassworksError::conflict(
            "Student is already enrolled in this course",
        ));
    }

    match service.storage.create_enrollment(course_id, student_id).await {
        Ok(enrollment) => Ok(enrollment),
        Err(e) => {
            // 并发竞争下唯一索引兜底，同样按冲突上报
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
                return Err(ClassworksError::conflict(
                    "Student is already enrolled in this course",
                ));
            }
            error!("Failed to enroll student {student_id} in course {course_id}: {e}");
            Err(e)
        }
    }
}
