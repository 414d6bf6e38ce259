//! 课程资源存储操作

use super::SeaOrmStorage;
use crate::entity::course_resources::{ActiveModel, Column, Entity as CourseResources};
use crate::errors::{ClassworksError, Result};
use crate::models::resources::{entities::CourseResource, requests::CreateResourceRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 登记资源元数据
    pub async fn create_resource_impl(
        &self,
        resource: CreateResourceRequest,
    ) -> Result<CourseResource> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(resource.course_id),
            name: Set(resource.name),
            description: Set(resource.description),
            file_url: Set(resource.file_url),
            file_type: Set(resource.file_type),
            file_size: Set(resource.file_size),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("创建课程资源失败: {e}")))?;

        Ok(result.into_course_resource())
    }

    /// 通过 ID 获取资源
    pub async fn get_resource_by_id_impl(
        &self,
        resource_id: i64,
    ) -> Result<Option<CourseResource>> {
        let result = CourseResources::find_by_id(resource_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询课程资源失败: {e}")))?;

        Ok(result.map(|m| m.into_course_resource()))
    }

    /// 删除资源
    pub async fn delete_resource_impl(&self, resource_id: i64) -> Result<bool> {
        let result = CourseResources::delete_by_id(resource_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("删除课程资源失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出课程下的资源
    pub async fn list_resources_for_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<CourseResource>> {
        let results = CourseResources::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询资源列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_course_resource()).collect())
    }
}
