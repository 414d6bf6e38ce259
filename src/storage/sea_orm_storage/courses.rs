//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::errors::{ClassworksError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(
        &self,
        teacher_id: i64,
        course: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            title: Set(course.title),
            description: Set(course.description),
            image_url: Set(course.image_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询课程失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(course_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(image_url) = update.image_url {
            model.image_url = Set(Some(image_url));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(Some(result.into_course()))
    }

    /// 分页列出全部课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.paginate_courses(Courses::find(), query).await
    }

    /// 分页列出教师名下课程
    pub async fn list_teacher_courses_with_pagination_impl(
        &self,
        teacher_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let select = Courses::find().filter(Column::TeacherId.eq(teacher_id));
        self.paginate_courses(select, query).await
    }

    /// 分页列出学生已选课程
    pub async fn list_student_courses_with_pagination_impl(
        &self,
        student_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        // 查询学生的选课记录
        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询选课记录失败: {e}")))?;

        let course_ids: Vec<i64> = enrollments.iter().map(|e| e.course_id).collect();

        if course_ids.is_empty() {
            let page = query.pagination.page.unwrap_or(1).max(1);
            let size = query.pagination.size.unwrap_or(10).clamp(1, 100);
            return Ok(CourseListResponse {
                items: vec![],
                pagination: PaginationInfo {
                    page,
                    page_size: size,
                    total: 0,
                    total_pages: 0,
                },
            });
        }

        let select = Courses::find().filter(Column::Id.is_in(course_ids));
        self.paginate_courses(select, query).await
    }

    /// 课程查询的公共分页逻辑
    async fn paginate_courses(
        &self,
        mut select: Select<Courses>,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.pagination.page.unwrap_or(1).max(1) as u64;
        let size = query.pagination.size.unwrap_or(10).clamp(1, 100) as u64;

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
