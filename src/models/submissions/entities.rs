use serde::{Deserialize, Serialize};

// 提交状态
//
// 状态机：Unsubmitted → Submitted → Graded，重新提交回到 Submitted
// 并清空评分。Unsubmitted 没有对应的记录行，用记录缺失表示。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
    Graded,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "submitted"),
            SubmissionStatus::Graded => write!(f, "graded"),
        }
    }
}

// 提交实体
//
// (coursework_id, student_id) 全局唯一：重新提交覆盖同一行。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub coursework_id: i64,
    pub student_id: i64,
    pub content: String,
    pub file_url: Option<String>,
    // 0..=100，未评分时为 None
    pub grade: Option<i32>,
    pub feedback: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Submission {
    /// 由评分字段导出当前状态
    pub fn status(&self) -> SubmissionStatus {
        if self.grade.is_some() {
            SubmissionStatus::Graded
        } else {
            SubmissionStatus::Submitted
        }
    }
}
