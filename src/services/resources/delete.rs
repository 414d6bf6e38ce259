use tracing::error;

use super::ResourceService;
use crate::errors::{ClassworksError, Result};
use crate::policy::{self, Action, Actor};

pub async fn delete_resource(
    service: &ResourceService,
    actor: &Actor,
    resource_id: i64,
) -> Result<()> {
    let resource = service
        .storage
        .get_resource_by_id(resource_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Resource not found"))?;

    let course = service
        .storage
        .get_course_by_id(resource.course_id)
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
        .delete_resource(resource_id)
        .await
        .inspect_err(|e| error!("Failed to delete resource {}: {}", resource_id, e))?;

    if !deleted {
        return Err(ClassworksError::not_found("Resource not found"));
    }

    Ok(())
}
