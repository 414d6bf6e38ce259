use serde::{Deserialize, Serialize};

// 课程资源实体
//
// 只保存元数据；文件字节由外部对象存储保管，file_url 指向其持久地址。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResource {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_type: String,
    // 字节数，非负
    pub file_size: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
