pub mod create;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::{
    entities::Course,
    requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    responses::CourseListResponse,
};
use crate::policy::Actor;
use crate::storage::Storage;

/// 课程管理服务
pub struct CourseService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 创建课程
    pub async fn create(&self, actor: &Actor, req: CreateCourseRequest) -> Result<Course> {
        create::create_course(self, actor, req).await
    }

    /// 更新课程信息
    pub async fn update(
        &self,
        actor: &Actor,
        course_id: i64,
        req: UpdateCourseRequest,
    ) -> Result<Course> {
        update::update_course(self, actor, course_id, req).await
    }

    /// 获取课程详情
    pub async fn get(&self, actor: &Actor, course_id: i64) -> Result<Course> {
        get::get_course(self, actor, course_id).await
    }

    /// 列出当前主体可见的课程
    pub async fn list(&self, actor: &Actor, query: CourseListQuery) -> Result<CourseListResponse> {
        list::list_courses(self, actor, query).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::errors::ClassworksError;
    use crate::models::users::entities::UserRole;
    use crate::storage::memory::MemoryStorage;

    fn create_req(title: &str, teacher_id: Option<i64>) -> CreateCourseRequest {
        CreateCourseRequest {
            title: title.to_string(),
            description: None,
            image_url: None,
            teacher_id,
        }
    }

    async fn setup() -> (Arc<MemoryStorage>, CourseService, Actor, Actor, Actor) {
        let storage = Arc::new(MemoryStorage::new());
        let admin = storage.seed_user(UserRole::Admin).await;
        let teacher = storage.seed_user(UserRole::Teacher).await;
        let student = storage.seed_user(UserRole::Student).await;
        let service = CourseService::new(storage.clone());
        (
            storage,
            service,
            Actor::from(&admin),
            Actor::from(&teacher),
            Actor::from(&student),
        )
    }

    #[tokio::test]
    async fn test_teacher_creates_own_course() {
        let (_s, service, _admin, teacher, _student) = setup().await;

        let course = service
            .create(&teacher, create_req("Rust 101", None))
            .await
            .unwrap();
        assert_eq!(course.teacher_id, teacher.id);
    }

    #[tokio::test]
    async fn test_teacher_cannot_create_for_other_teacher() {
        let (storage, service, _admin, teacher, _student) = setup().await;
        let other = storage.seed_user(UserRole::Teacher).await;

        let err = service
            .create(&teacher, create_req("Rust 101", Some(other.id)))
            .await
            .unwrap_err();
        assert!(matches!(err, ClassworksError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_admin_creates_for_named_teacher() {
        let (storage, service, admin, _teacher, _student) = setup().await;
        let other = storage.seed_user(UserRole::Teacher).await;

        let course = service
            .create(&admin, create_req("Rust 101", Some(other.id)))
            .await
            .unwrap();
        assert_eq!(course.teacher_id, other.id);
    }

    #[tokio::test]
    async fn test_course_owner_must_be_teacher() {
        let (_s, service, admin, _teacher, student) = setup().await;

        let err = service
            .create(&admin, create_req("Rust 101", Some(student.id)))
            .await
            .unwrap_err();
        assert!(matches!(err, ClassworksError::Validation(_)));
    }

    #[tokio::test]
    async fn test_student_cannot_create_course() {
        let (_s, service, _admin, _teacher, student) = setup().await;

        let err = service
            .create(&student, create_req("Rust 101", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ClassworksError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_get_respects_view_policy() {
        let (storage, service, admin, teacher, student) = setup().await;
        let course = service
            .create(&teacher, create_req("Rust 101", None))
            .await
            .unwrap();

        assert!(service.get(&teacher, course.id).await.is_ok());
        assert!(service.get(&admin, course.id).await.is_ok());

        // 未选课学生不可见
        let err = service.get(&student, course.id).await.unwrap_err();
        assert!(matches!(err, ClassworksError::PermissionDenied(_)));

        // 选课后可见
        storage
            .create_enrollment(course.id, student.id)
            .await
            .unwrap();
        assert!(service.get(&student, course.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_requires_ownership() {
        let (storage, service, _admin, teacher, _student) = setup().await;
        let other = storage.seed_user(UserRole::Teacher).await;
        let course = service
            .create(&teacher, create_req("Rust 101", None))
            .await
            .unwrap();

        let err = service
            .update(
                &Actor::from(&other),
                course.id,
                UpdateCourseRequest {
                    title: Some("Hijacked".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClassworksError::PermissionDenied(_)));

        let updated = service
            .update(
                &teacher,
                course.id,
                UpdateCourseRequest {
                    title: Some("Rust 102".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Rust 102");
    }

    #[tokio::test]
    async fn test_list_scopes_by_role() {
        let (storage, service, admin, teacher, student) = setup().await;
        let other = storage.seed_user(UserRole::Teacher).await;

        let owned = service
            .create(&teacher, create_req("Owned", None))
            .await
            .unwrap();
        let foreign = service
            .create(&Actor::from(&other), create_req("Foreign", None))
            .await
            .unwrap();
        storage
            .create_enrollment(foreign.id, student.id)
            .await
            .unwrap();

        let admin_view = service.list(&admin, CourseListQuery::default()).await.unwrap();
        assert_eq!(admin_view.items.len(), 2);

        let teacher_view = service
            .list(&teacher, CourseListQuery::default())
            .await
            .unwrap();
        assert_eq!(teacher_view.items.len(), 1);
        assert_eq!(teacher_view.items[0].id, owned.id);

        let student_view = service
            .list(&student, CourseListQuery::default())
            .await
            .unwrap();
        assert_eq!(student_view.items.len(), 1);
        assert_eq!(student_view.items[0].id, foreign.id);
    }
}
