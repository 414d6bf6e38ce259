//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{ClassworksError, Result};
use crate::models::{
    PaginationInfo,
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, user: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            external_id: Set(user.external_id),
            email: Set(user.email),
            full_name: Set(user.full_name),
            role: Set(user.role.to_string()),
            avatar_url: Set(user.avatar_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过身份提供方主体标识获取用户
    pub async fn get_user_by_external_id_impl(&self, external_id: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 更新用户资料（角色不在此处变更）
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let existing = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询用户失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }
        if let Some(avatar_url) = update.avatar_url {
            model.avatar_url = Set(Some(avatar_url));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("更新用户失败: {e}")))?;

        Ok(Some(result.into_user()))
    }

    /// 更新用户角色
    pub async fn update_user_role_impl(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        let existing = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询用户失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            role: Set(role.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("更新用户角色失败: {e}")))?;

        Ok(Some(result.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.pagination.page.unwrap_or(1).max(1) as u64;
        let size = query.pagination.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Users::find();

        // 角色筛选
        if let Some(role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询用户总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询用户页数失败: {e}")))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出可加入某课程的学生（全部学生减去已选课集合）
    pub async fn list_available_students_impl(&self, course_id: i64) -> Result<Vec<User>> {
        // 查询已选课的学生 ID
        let enrolled = Enrollments::find()
            .filter(EnrollmentColumn::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询选课记录失败: {e}")))?;

        let enrolled_ids: Vec<i64> = enrolled.iter().map(|e| e.student_id).collect();

        let mut select = Users::find().filter(Column::Role.eq(UserRole::Student.to_string()));
        if !enrolled_ids.is_empty() {
            select = select.filter(Column::Id.is_not_in(enrolled_ids));
        }

        let students = select
            .order_by_asc(Column::FullName)
            .all(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_user()).collect())
    }
}
