use tracing::error;

use super::{SubmissionService, owning_course};
use crate::errors::{ClassworksError, Result};
use crate::models::submissions::{entities::Submission, requests::GradeSubmissionRequest};
use crate::policy::{self, Action, Actor};

/// 评分的合法区间（闭区间）
const GRADE_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

pub async fn grade_submission(
    service: &SubmissionService,
    actor: &Actor,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> Result<Submission> {
    let submission = service
        .storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Submission not found"))?;

    let course = owning_course(service.storage.as_ref(), submission.coursework_id).await?;

    policy::authorize(
        actor,
        &Action::GradeSubmission {
            teacher_id: course.teacher_id,
        },
    )?;

    if !GRADE_RANGE.contains(&req.grade) {
        return Err(ClassworksError::validation(
            "Grade must be between 0 and 100",
        ));
    }

    service
        .storage
        .set_submission_grade(submission_id, req.grade, req.feedback)
        .await
        .inspect_err(|e| error!("Failed to grade submission {}: {}", submission_id, e))?
        .ok_or_else(|| ClassworksError::not_found("Submission not found"))
}
