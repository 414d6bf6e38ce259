use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 课程创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    // 管理员可替教师建课；教师建课时忽略该字段
    pub teacher_id: Option<i64>,
}

// 课程更新请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

// 课程列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}
