use super::ResourceService;
use crate::errors::{ClassworksError, Result};
use crate::models::resources::entities::CourseResource;
use crate::policy::{self, Action, Actor};

pub async fn list_resources(
    service: &ResourceService,
    actor: &Actor,
    course_id: i64,
) -> Result<Vec<CourseResource>> {
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

    service.storage.list_resources_for_course(course_id).await
}
