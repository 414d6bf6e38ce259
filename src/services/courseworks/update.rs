use tracing::error;

use super::CourseworkService;
use crate::errors::{ClassworksError, Result};
use crate::models::courseworks::{entities::Coursework, requests::UpdateCourseworkRequest};
use crate::policy::{self, Action, Actor};

pub async fn update_coursework(
    service: &CourseworkService,
    actor: &Actor,
    coursework_id: i64,
    req: UpdateCourseworkRequest,
) -> Result<Coursework> {
    let coursework = service
        .storage
        .get_coursework_by_id(coursework_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Coursework not found"))?;

    let course = service
        .storage
        .get_course_by_id(coursework.course_id)
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
        return Err(ClassworksError::validation(
            "Coursework title must not be empty",
        ));
    }

    service
        .storage
        .update_coursework(coursework_id, req)
        .await
        .inspect_err(|e| error!("Failed to update coursework {}: {}", coursework_id, e))?
        .ok_or_else(|| ClassworksError::not_found("Coursework not found"))
}
