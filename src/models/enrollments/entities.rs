use serde::{Deserialize, Serialize};

// 选课记录
//
// (course_id, student_id) 全局唯一：一个学生对一门课程至多一条记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub course_id: i64,
    pub student_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
