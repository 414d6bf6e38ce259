//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{ClassworksError, Result};
use crate::models::submissions::entities::Submission;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 提交/重新提交
    ///
    /// 单条 INSERT ... ON CONFLICT 语句：同一 (coursework_id, student_id)
    /// 命中唯一索引时覆盖内容并清空评分，不存在则新建。并发提交不会产生
    /// 重复行。
    pub async fn upsert_submission_impl(
        &self,
        coursework_id: i64,
        student_id: i64,
        content: String,
        file_url: Option<String>,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            coursework_id: Set(coursework_id),
            student_id: Set(student_id),
            content: Set(content),
            file_url: Set(file_url),
            // 重新提交使旧评分失效
            grade: Set(None),
            feedback: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Submissions::insert(model)
            .on_conflict(
                OnConflict::columns([Column::CourseworkId, Column::StudentId])
                    .update_columns([
                        Column::Content,
                        Column::FileUrl,
                        Column::Grade,
                        Column::Feedback,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("写入提交失败: {e}")))?;

        // upsert 后按唯一键回读，避免依赖各数据库不一致的 last_insert_id 语义
        let stored = self
            .get_submission_by_coursework_and_student_impl(coursework_id, student_id)
            .await?
            .ok_or_else(|| ClassworksError::database_operation("提交写入后查询失败"))?;

        Ok(stored)
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取某学生对某作业的提交
    pub async fn get_submission_by_coursework_and_student_impl(
        &self,
        coursework_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(
                Condition::all()
                    .add(Column::CourseworkId.eq(coursework_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 写入评分与反馈
    pub async fn set_submission_grade_impl(
        &self,
        submission_id: i64,
        grade: i32,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        let existing = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询提交失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(submission_id),
            grade: Set(Some(grade)),
            feedback: Set(feedback),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("写入评分失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }

    /// 删除提交
    pub async fn delete_submission_impl(&self, submission_id: i64) -> Result<bool> {
        let result = Submissions::delete_by_id(submission_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("删除提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出作业下的全部提交
    pub async fn list_submissions_for_coursework_impl(
        &self,
        coursework_id: i64,
    ) -> Result<Vec<Submission>> {
        let results = Submissions::find()
            .filter(Column::CourseworkId.eq(coursework_id))
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_submission()).collect())
    }
}
