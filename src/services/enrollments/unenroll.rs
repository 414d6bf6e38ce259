use tracing::error;

use super::EnrollmentService;
use crate::errors::{ClassworksError, Result};
use crate::policy::{self, Action, Actor};

pub async fn unenroll_student(
    service: &EnrollmentService,
    actor: &Actor,
    enrollment_id: i64,
) -> Result<()> {
    let enrollment = service
        .storage
        .get_enrollment_by_id(enrollment_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Enrollment not found"))?;

    // 归属课程经由选课记录解析
    let course = service
        .storage
        .get_course_by_id(enrollment.course_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Course not found"))?;

    policy::authorize(
        actor,
        &Action::ManageCourse {
            teacher_id: course.teacher_id,
        },
    )?;

    let deleted = service
        .storage
        .delete_enrollment(enrollment_id)
        .await
        .inspect_err(|e| error!("Failed to delete enrollment {}: {}", enrollment_id, e))?;

    if !deleted {
        return Err(ClassworksError::not_found("Enrollment not found"));
    }

    Ok(())
}
