use super::EnrollmentService;
use crate::errors::{ClassworksError, Result};
use crate::models::users::entities::User;
use crate::policy::{self, Action, Actor};

pub async fn list_available_students(
    service: &EnrollmentService,
    actor: &Actor,
    course_id: i64,
) -> Result<Vec<User>> {
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

    service.storage.list_available_students(course_id).await
}
