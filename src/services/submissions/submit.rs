use tracing::{debug, error};

use super::{SubmissionService, owning_course};
use crate::errors::{ClassworksError, Result};
use crate::models::submissions::{entities::Submission, requests::SubmitWorkRequest};
use crate::models::users::entities::UserRole;
use crate::policy::{self, Action, Actor};

pub async fn submit_work(
    service: &SubmissionService,
    actor: &Actor,
    req: SubmitWorkRequest,
) -> Result<Submission> {
    let course = owning_course(service.storage.as_ref(), req.coursework_id).await?;

    // 省略 student_id 即本人提交
    let student_id = req.student_id.unwrap_or(actor.id);

    policy::authorize(
        actor,
        &Action::SubmitWork {
            teacher_id: course.teacher_id,
            student_id,
        },
    )?;

    // 代交时目标用户必须存在且为学生角色
    if student_id != actor.id {
        let target = service
            .storage
            .get_user_by_id(student_id)
            .await?
            .ok_or_else(|| ClassworksError::not_found("Student not found"))?;

        if target.role != UserRole::Student {
            return Err(ClassworksError::validation(
                "Submissions can only be made for users with student role",
            ));
        }
    }

    // 同一 (coursework, student) 覆盖原行并清空评分
    let submission = service
        .storage
        .upsert_submission(req.coursework_id, student_id, req.content, req.file_url)
        .await
        .inspect_err(|e| error!("Failed to store submission: {}", e))?;

    debug!(
        "Stored submission {} for coursework {} student {}",
        submission.id, submission.coursework_id, submission.student_id
    );

    Ok(submission)
}
