use super::entities::Course;
use crate::models::PaginationInfo;
use serde::Serialize;

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}
