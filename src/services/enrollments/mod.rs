pub mod available;
pub mod enroll;
pub mod list;
pub mod unenroll;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{enrollments::entities::Enrollment, users::entities::User};
use crate::policy::Actor;
use crate::storage::Storage;

/// 选课管理服务
///
/// 维护 (course_id, student_id) 唯一的成员关系不变量。
pub struct EnrollmentService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 把学生加入课程；重复选课返回 Conflict
    pub async fn enroll(
        &self,
        actor: &Actor,
        course_id: i64,
        student_id: i64,
    ) -> Result<Enrollment> {
        enroll::enroll_student(self, actor, course_id, student_id).await
    }

    /// 按选课记录 ID 退课
    pub async fn unenroll(&self, actor: &Actor, enrollment_id: i64) -> Result<()> {
        unenroll::unenroll_student(self, actor, enrollment_id).await
    }

    /// 列出课程的选课记录
    pub async fn list_for_course(&self, actor: &Actor, course_id: i64) -> Result<Vec<Enrollment>> {
        list::list_enrollments(self, actor, course_id).await
    }

    /// 列出尚可加入课程的学生（全部学生减去已选课集合）
    pub async fn list_available_students(
        &self,
        actor: &Actor,
        course_id: i64,
    ) -> Result<Vec<User>> {
        available::list_available_students(self, actor, course_id).await
    }
}
