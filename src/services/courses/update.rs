use tracing::error;

use super::CourseService;
use crate::errors::{ClassworksError, Result};
use crate::models::courses::{entities::Course, requests::UpdateCourseRequest};
use crate::policy::{self, Action, Actor};

pub async fn update_course(
    service: &CourseService,
    actor: &Actor,
    course_id: i64,
    req: UpdateCourseRequest,
) -> Result<Course> {
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

    if let Some(ref title) = req.title
        && title.trim().is_empty()
    {
        return Err(ClassworksError::validation("Course title must not be empty"));
    }

    service
        .storage
        .update_course(course_id, req)
        .await
        .inspect_err(|e| error!("Failed to update course {}: {}", course_id, e))?
        .ok_or_else(|| ClassworksError::not_found("Course not found"))
}
