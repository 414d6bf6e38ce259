pub mod delete;
pub mod detail;
pub mod grade;
pub mod list;
pub mod submit;

use std::sync::Arc;

use crate::errors::{ClassworksError, Result};
use crate::models::courses::entities::Course;
use crate::models::submissions::{
    entities::Submission,
    requests::{GradeSubmissionRequest, SubmitWorkRequest},
};
use crate::policy::Actor;
use crate::storage::Storage;

/// 取作业的归属课程（二者任一缺失即 NotFound）
pub(crate) async fn owning_course(storage: &dyn Storage, coursework_id: i64) -> Result<Course> {
    let coursework = storage
        .get_coursework_by_id(coursework_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Coursework not found"))?;

    storage
        .get_course_by_id(coursework.course_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Course not found"))
}

/// 提交生命周期服务
///
/// 状态机：Unsubmitted → Submitted → Graded；重新提交回到 Submitted
/// 并清空评分。Unsubmitted 即 (coursework_id, student_id) 无记录。
pub struct SubmissionService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 提交/重新提交作业
    pub async fn submit(&self, actor: &Actor, req: SubmitWorkRequest) -> Result<Submission> {
        submit::submit_work(self, actor, req).await
    }

    /// 评分
    pub async fn grade(
        &self,
        actor: &Actor,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Submission> {
        grade::grade_submission(self, actor, submission_id, req).await
    }

    /// 删除提交
    pub async fn delete(&self, actor: &Actor, submission_id: i64) -> Result<()> {
        delete::delete_submission(self, actor, submission_id).await
    }

    /// 获取单条提交
    pub async fn get(&self, actor: &Actor, submission_id: i64) -> Result<Submission> {
        detail::get_submission(self, actor, submission_id).await
    }

    /// 获取本人对某作业的提交（无记录即未提交）
    pub async fn get_own(&self, actor: &Actor, coursework_id: i64) -> Result<Option<Submission>> {
        detail::get_own_submission(self, actor, coursework_id).await
    }

    /// 列出作业下的全部提交
    pub async fn list_for_coursework(
        &self,
        actor: &Actor,
        coursework_id: i64,
    ) -> Result<Vec<Submission>> {
        list::list_submissions(self, actor, coursework_id).await
    }
}
