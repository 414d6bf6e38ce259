use super::{SubmissionService, owning_course};
use crate::errors::{ClassworksError, Result};
use crate::models::submissions::entities::Submission;
use crate::policy::{self, Action, Actor};

pub async fn get_submission(
    service: &SubmissionService,
    actor: &Actor,
    submission_id: i64,
) -> Result<Submission> {
    let submission = service
        .storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Submission not found"))?;

    let course = owning_course(service.storage.as_ref(), submission.coursework_id).await?;

    policy::authorize(
        actor,
        &Action::ViewSubmission {
            teacher_id: course.teacher_id,
            student_id: submission.student_id,
        },
    )?;

    Ok(submission)
}

/// 本人视角：作业存在即可查询自己的提交，无记录表示未提交
pub async fn get_own_submission(
    service: &SubmissionService,
    actor: &Actor,
    coursework_id: i64,
) -> Result<Option<Submission>> {
    owning_course(service.storage.as_ref(), coursework_id).await?;

    service
        .storage
        .get_submission_by_coursework_and_student(coursework_id, actor.id)
        .await
}
