use tracing::error;

use super::ResourceService;
use crate::errors::{ClassworksError, Result};
use crate::models::resources::{entities::CourseResource, requests::CreateResourceRequest};
use crate::policy::{self, Action, Actor};
use crate::utils::validate::validate_url;

pub async fn add_resource(
    service: &ResourceService,
    actor: &Actor,
    req: CreateResourceRequest,
) -> Result<CourseResource> {
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

    if req.file_size < 0 {
        return Err(ClassworksError::validation(
            "File size must be non-negative",
        ));
    }

    if req.name.trim().is_empty() {
        return Err(ClassworksError::validation("Resource name must not be empty"));
    }

    // file_url 来自外部对象存储，仍要求是可分发的 http(s) 地址
    validate_url(&req.file_url).map_err(ClassworksError::validation)?;

    service
        .storage
        .create_resource(req)
        .await
        .inspect_err(|e| error!("Failed to create course resource: {}", e))
}
