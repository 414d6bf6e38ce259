use super::CourseworkService;
use crate::errors::{ClassworksError, Result};
use crate::models::courseworks::entities::Coursework;
use crate::policy::{self, Action, Actor};

pub async fn list_courseworks(
    service: &CourseworkService,
    actor: &Actor,
    course_id: i64,
) -> Result<Vec<Coursework>> {
    let course = service
        .storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Course not found"))?;

    let enrolled = service
        .storage
        .get_enrollment_by_course_and_student(course_id, actor.id)
        .await?
        .is_some();

    policy::authorize(
        actor,
        &Action::ViewCourse {
            teacher_id: course.teacher_id,
            enrolled,
        },
    )?;

    service.storage.list_courseworks_for_course(course_id).await
}
