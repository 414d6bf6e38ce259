use super::CourseService;
use crate::errors::Result;
use crate::models::courses::{requests::CourseListQuery, responses::CourseListResponse};
use crate::models::users::entities::UserRole;
use crate::policy::Actor;

/// 可见范围按角色路由：管理员看全部，教师看名下，学生看已选。
/// 这里不是放行/拒绝判定，任何角色都有自己的课程列表。
pub async fn list_courses(
    service: &CourseService,
    actor: &Actor,
    query: CourseListQuery,
) -> Result<CourseListResponse> {
    match actor.role {
        UserRole::Admin => service.storage.list_courses_with_pagination(query).await,
        UserRole::Teacher => {
            service
                .storage
                .list_teacher_courses_with_pagination(actor.id, query)
                .await
        }
        UserRole::Student => {
            service
                .storage
                .list_student_courses_with_pagination(actor.id, query)
                .await
        }
    }
}
