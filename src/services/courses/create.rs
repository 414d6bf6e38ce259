use tracing::{error, info};

use super::CourseService;
use crate::errors::{ClassworksError, Result};
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::models::users::entities::UserRole;
use crate::policy::{self, Action, Actor};

pub async fn create_course(
    service: &CourseService,
    actor: &Actor,
    req: CreateCourseRequest,
) -> Result<Course> {
    // 省略 teacher_id 即归属本人；教师只能以本人为归属，管理员可指定任意教师
    let teacher_id = req.teacher_id.unwrap_or(actor.id);

    policy::authorize(actor, &Action::CreateCourse { teacher_id })?;

    let owner = service
        .storage
        .get_user_by_id(teacher_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Teacher not found"))?;

    if owner.role != UserRole::Teacher {
        return Err(ClassworksError::validation(
            "Courses can only be owned by users with teacher role",
        ));
    }

    if req.title.trim().is_empty() {
        return Err(ClassworksError::validation("Course title must not be empty"));
    }

    let course = service
        .storage
        .create_course(teacher_id, req)
        .await
        .inspect_err(|e| error!("Failed to create course: {}", e))?;

    info!("Created course {} owned by teacher {}", course.id, teacher_id);

    Ok(course)
}
