use serde::Deserialize;

// 提交/重新提交请求
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitWorkRequest {
    pub coursework_id: i64,
    // 省略时为本人提交；教师/管理员可代学生提交
    pub student_id: Option<i64>,
    pub content: String,
    pub file_url: Option<String>,
}

// 评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmissionRequest {
    pub grade: i32,
    pub feedback: Option<String>,
}
