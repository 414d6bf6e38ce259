//! 选课记录存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{ClassworksError, Result};
use crate::models::enrollments::entities::Enrollment;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建选课记录
    ///
    /// (course_id, student_id) 上有唯一索引，并发重复写入由数据库拒绝。
    pub async fn create_enrollment_impl(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(enrollment_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 获取某学生在某课程的选课记录
    pub async fn get_enrollment_by_course_and_student_impl(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::CourseId.eq(course_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 删除选课记录
    pub async fn delete_enrollment_impl(&self, enrollment_id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(enrollment_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("删除选课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出课程的选课记录
    pub async fn list_enrollments_for_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<Enrollment>> {
        let results = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_enrollment()).collect())
    }
}
