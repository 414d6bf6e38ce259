use serde::{Deserialize, Serialize};

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coursework {
    pub id: i64,
    // 关联的课程 ID
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    // 截止时间（可选，核心层不在提交时强制）
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
