use tracing::error;

use super::CourseworkService;
use crate::errors::{ClassworksError, Result};
use crate::models::courseworks::{entities::Coursework, requests::CreateCourseworkRequest};
use crate::policy::{self, Action, Actor};

pub async fn create_coursework(
    service: &CourseworkService,
    actor: &Actor,
    req: CreateCourseworkRequest,
) -> Result<Coursework> {
    let course = service
        .storage
        .get_course_by_id(req.course_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Course not found"))?;

    policy::authorize(
        actor,
        &Action::ManageCourse {
            teacher_id: course.teacher_id,
        },
    )?;

    if req.title.trim().is_empty() {
        return Err(ClassworksError::validation(
            "Coursework title must not be empty",
        ));
    }

    service
        .storage
        .create_coursework(req)
        .await
        .inspect_err(|e| error!("Failed to create coursework: {}", e))
}
