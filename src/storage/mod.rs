use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    courseworks::{
        entities::Coursework,
        requests::{CreateCourseworkRequest, UpdateCourseworkRequest},
    },
    enrollments::entities::Enrollment,
    resources::{entities::CourseResource, requests::CreateResourceRequest},
    submissions::entities::Submission,
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

#[cfg(test)]
pub mod memory;
pub mod sea_orm_storage;

/// 持久化协作方契约
///
/// 业务层只依赖该 trait；实现方必须为 (coursework_id, student_id) 和
/// (course_id, student_id) 维护唯一约束，并保证 upsert_submission 的
/// 先查后写在单行粒度上原子。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过身份提供方主体标识获取用户信息
    async fn get_user_by_external_id(&self, external_id: &str) -> Result<Option<User>>;
    // 更新用户资料（不含角色）
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 更新用户角色
    async fn update_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 列出可加入某课程的学生（全部学生减去已选课集合）
    async fn list_available_students(&self, course_id: i64) -> Result<Vec<User>>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 更新课程信息
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 列出全部课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 列出教师名下课程
    async fn list_teacher_courses_with_pagination(
        &self,
        teacher_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 列出学生已选课程
    async fn list_student_courses_with_pagination(
        &self,
        student_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;

    /// 选课管理方法
    // 创建选课记录
    async fn create_enrollment(&self, course_id: i64, student_id: i64) -> Result<Enrollment>;
    // 通过ID获取选课记录
    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>>;
    // 获取某学生在某课程的选课记录
    async fn get_enrollment_by_course_and_student(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>>;
    // 删除选课记录
    async fn delete_enrollment(&self, enrollment_id: i64) -> Result<bool>;
    // 列出课程的选课记录
    async fn list_enrollments_for_course(&self, course_id: i64) -> Result<Vec<Enrollment>>;

    /// 作业管理方法
    // 创建作业
    async fn create_coursework(&self, coursework: CreateCourseworkRequest) -> Result<Coursework>;
    // 通过ID获取作业
    async fn get_coursework_by_id(&self, coursework_id: i64) -> Result<Option<Coursework>>;
    // 更新作业
    async fn update_coursework(
        &self,
        coursework_id: i64,
        update: UpdateCourseworkRequest,
    ) -> Result<Option<Coursework>>;
    // 列出课程下的作业
    async fn list_courseworks_for_course(&self, course_id: i64) -> Result<Vec<Coursework>>;

    /// 提交管理方法
    // 提交/重新提交：同一 (coursework_id, student_id) 覆盖原行并清空评分
    async fn upsert_submission(
        &self,
        coursework_id: i64,
        student_id: i64,
        content: String,
        file_url: Option<String>,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 获取某学生对某作业的提交
    async fn get_submission_by_coursework_and_student(
        &self,
        coursework_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 写入评分与反馈
    async fn set_submission_grade(
        &self,
        submission_id: i64,
        grade: i32,
        feedback: Option<String>,
    ) -> Result<Option<Submission>>;
    // 删除提交
    async fn delete_submission(&self, submission_id: i64) -> Result<bool>;
    // 列出作业下的全部提交
    async fn list_submissions_for_coursework(&self, coursework_id: i64)
    -> Result<Vec<Submission>>;

    /// 课程资源管理方法
    // 登记资源元数据
    async fn create_resource(&self, resource: CreateResourceRequest) -> Result<CourseResource>;
    // 通过ID获取资源
    async fn get_resource_by_id(&self, resource_id: i64) -> Result<Option<CourseResource>>;
    // 删除资源
    async fn delete_resource(&self, resource_id: i64) -> Result<bool>;
    // 列出课程下的资源
    async fn list_resources_for_course(&self, course_id: i64) -> Result<Vec<CourseResource>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
