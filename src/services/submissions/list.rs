use super::{SubmissionService, owning_course};
use crate::errors::Result;
use crate::models::submissions::entities::Submission;
use crate::policy::{self, Action, Actor};

/// 批改视角的提交列表，因此沿用评分的权限行
pub async fn list_submissions(
    service: &SubmissionService,
    actor: &Actor,
    coursework_id: i64,
) -> Result<Vec<Submission>> {
    let course = owning_course(service.storage.as_ref(), coursework_id).await?;

    policy::authorize(
        actor,
        &Action::GradeSubmission {
            teacher_id: course.teacher_id,
        },
    )?;

    service
        .storage
        .list_submissions_for_coursework(coursework_id)
        .await
}
