//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::courseworks::{ActiveModel, Column, Entity as Courseworks};
use crate::errors::{ClassworksError, Result};
use crate::models::courseworks::{
    entities::Coursework,
    requests::{CreateCourseworkRequest, UpdateCourseworkRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_coursework_impl(
        &self,
        coursework: CreateCourseworkRequest,
    ) -> Result<Coursework> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(coursework.course_id),
            title: Set(coursework.title),
            description: Set(coursework.description),
            due_date: Set(coursework.due_date.map(|d| d.timestamp())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_coursework())
    }

    /// 通过 ID 获取作业
    pub async fn get_coursework_by_id_impl(
        &self,
        coursework_id: i64,
    ) -> Result<Option<Coursework>> {
        let result = Courseworks::find_by_id(coursework_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_coursework()))
    }

    /// 更新作业
    pub async fn update_coursework_impl(
        &self,
        coursework_id: i64,
        update: UpdateCourseworkRequest,
    ) -> Result<Option<Coursework>> {
        let existing = Courseworks::find_by_id(coursework_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询作业失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(coursework_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(Some(due_date.timestamp()));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(Some(result.into_coursework()))
    }

    /// 列出课程下的作业
    pub async fn list_courseworks_for_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<Coursework>> {
        let results = Courseworks::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_coursework()).collect())
    }
}
