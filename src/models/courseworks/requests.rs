use serde::Deserialize;

// 作业创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseworkRequest {
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 作业更新请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseworkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}
