use tracing::error;

use super::{SubmissionService, owning_course};
use crate::errors::{ClassworksError, Result};
use crate::policy::{self, Action, Actor};

pub async fn delete_submission(
    service: &SubmissionService,
    actor: &Actor,
    submission_id: i64,
) -> Result<()> {
    let submission = service
        .storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Submission not found"))?;

    let course = owning_course(service.storage.as_ref(), submission.coursework_id).await?;

    policy::authorize(
        actor,
        &Action::DeleteSubmission {
            teacher_id: course.teacher_id,
            student_id: submission.student_id,
        },
    )?;

    let deleted = service
        .storage
        .delete_submission(submission_id)
        .await
        .inspect_err(|e| error!("Failed to delete submission {}: {}", submission_id, e))?;

    if !deleted {
        return Err(ClassworksError::not_found("Submission not found"));
    }

    Ok(())
}
