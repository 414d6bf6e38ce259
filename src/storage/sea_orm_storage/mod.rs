//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod course_resources;
mod courses;
mod courseworks;
mod enrollments;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{ClassworksError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassworksError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassworksError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassworksError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassworksError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassworksError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_external_id(&self, external_id: &str) -> Result<Option<User>> {
        self.get_user_by_external_id_impl(external_id).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        self.update_user_role_impl(id, role).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn list_available_students(&self, course_id: i64) -> Result<Vec<User>> {
        self.list_available_students_impl(course_id).await
    }

    // 课程模块
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(teacher_id, course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn list_teacher_courses_with_pagination(
        &self,
        teacher_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_teacher_courses_with_pagination_impl(teacher_id, query)
            .await
    }

    async fn list_student_courses_with_pagination(
        &self,
        student_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_student_courses_with_pagination_impl(student_id, query)
            .await
    }

    // 选课模块
    async fn create_enrollment(&self, course_id: i64, student_id: i64) -> Result<Enrollment> {
        self.create_enrollment_impl(course_id, student_id).await
    }

    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(enrollment_id).await
    }

    async fn get_enrollment_by_course_and_student(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_course_and_student_impl(course_id, student_id)
            .await
    }

    async fn delete_enrollment(&self, enrollment_id: i64) -> Result<bool> {
        self.delete_enrollment_impl(enrollment_id).await
    }

    async fn list_enrollments_for_course(&self, course_id: i64) -> Result<Vec<Enrollment>> {
        self.list_enrollments_for_course_impl(course_id).await
    }

    // 作业模块
    async fn create_coursework(&self, coursework: CreateCourseworkRequest) -> Result<Coursework> {
        self.create_coursework_impl(coursework).await
    }

    async fn get_coursework_by_id(&self, coursework_id: i64) -> Result<Option<Coursework>> {
        self.get_coursework_by_id_impl(coursework_id).await
    }

    async fn update_coursework(
        &self,
        coursework_id: i64,
        update: UpdateCourseworkRequest,
    ) -> Result<Option<Coursework>> {
        self.update_coursework_impl(coursework_id, update).await
    }

    async fn list_courseworks_for_course(&self, course_id: i64) -> Result<Vec<Coursework>> {
        self.list_courseworks_for_course_impl(course_id).await
    }

    // 提交模块
    async fn upsert_submission(
        &self,
        coursework_id: i64,
        student_id: i64,
        content: String,
        file_url: Option<String>,
    ) -> Result<Submission> {
        self.upsert_submission_impl(coursework_id, student_id, content, file_url)
            .await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn get_submission_by_coursework_and_student(
        &self,
        coursework_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_coursework_and_student_impl(coursework_id, student_id)
            .await
    }

    async fn set_submission_grade(
        &self,
        submission_id: i64,
        grade: i32,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        self.set_submission_grade_impl(submission_id, grade, feedback)
            .await
    }

    async fn delete_submission(&self, submission_id: i64) -> Result<bool> {
        self.delete_submission_impl(submission_id).await
    }

    async fn list_submissions_for_coursework(
        &self,
        coursework_id: i64,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_for_coursework_impl(coursework_id)
            .await
    }

    // 课程资源模块
    async fn create_resource(&self, resource: CreateResourceRequest) -> Result<CourseResource> {
        self.create_resource_impl(resource).await
    }

    async fn get_resource_by_id(&self, resource_id: i64) -> Result<Option<CourseResource>> {
        self.get_resource_by_id_impl(resource_id).await
    }

    async fn delete_resource(&self, resource_id: i64) -> Result<bool> {
        self.delete_resource_impl(resource_id).await
    }

    async fn list_resources_for_course(&self, course_id: i64) -> Result<Vec<CourseResource>> {
        self.list_resources_for_course_impl(course_id).await
    }
}
