pub mod create;
pub mod detail;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::courseworks::{
    entities::Coursework,
    requests::{CreateCourseworkRequest, UpdateCourseworkRequest},
};
use crate::policy::Actor;
use crate::storage::Storage;

/// 作业管理服务
pub struct CourseworkService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl CourseworkService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 创建作业
    pub async fn create(&self, actor: &Actor, req: CreateCourseworkRequest) -> Result<Coursework> {
        create::create_coursework(self, actor, req).await
    }

    /// 更新作业
    pub async fn update(
        &self,
        actor: &Actor,
        coursework_id: i64,
        req: UpdateCourseworkRequest,
    ) -> Result<Coursework> {
        update::update_coursework(self, actor, coursework_id, req).await
    }

    /// 获取作业详情
    pub async fn get(&self, actor: &Actor, coursework_id: i64) -> Result<Coursework> {
        detail::get_coursework(self, actor, coursework_id).await
    }

    /// 列出课程下的作业
    pub async fn list_for_course(&self, actor: &Actor, course_id: i64) -> Result<Vec<Coursework>> {
        list::list_courseworks(self, actor, course_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::errors::ClassworksError;
    use crate::models::users::entities::UserRole;
    use crate::storage::memory::MemoryStorage;

    fn create_req(course_id: i64, title: &str) -> CreateCourseworkRequest {
        CreateCourseworkRequest {
            course_id,
            title: title.to_string(),
            description: None,
            due_date: None,
        }
    }

    async fn setup() -> (Arc<MemoryStorage>, CourseworkService, Actor, Actor, i64) {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user(UserRole::Teacher).await;
        let student = storage.seed_user(UserRole::Student).await;
        let course = storage.seed_course(teacher.id).await;
        let service = CourseworkService::new(storage.clone());
        (
            storage,
            service,
            Actor::from(&teacher),
            Actor::from(&student),
            course.id,
        )
    }

    #[tokio::test]
    async fn test_owner_creates_coursework() {
        let (_s, service, teacher, _student, course_id) = setup().await;

        let coursework = service
            .create(&teacher, create_req(course_id, "Week 1"))
            .await
            .unwrap();
        assert_eq!(coursework.course_id, course_id);
        assert_eq!(coursework.title, "Week 1");
    }

    #[tokio::test]
    async fn test_student_cannot_create_coursework() {
        let (_s, service, _teacher, student, course_id) = setup().await;

        let err = service
            .create(&student, create_req(course_id, "Week 1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClassworksError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_create_for_missing_course_not_found() {
        let (_s, service, teacher, _student, _course_id) = setup().await;

        let err = service
            .create(&teacher, create_req(9999, "Week 1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClassworksError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_requires_ownership() {
        let (storage, service, teacher, _student, course_id) = setup().await;
        let other = storage.seed_user(UserRole::Teacher).await;
        let coursework = service
            .create(&teacher, create_req(course_id, "Week 1"))
            .await
            .unwrap();

        let err = service
            .update(
                &Actor::from(&other),
                coursework.id,
                UpdateCourseworkRequest {
                    title: Some("Week 2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClassworksError::PermissionDenied(_)));

        let updated = service
            .update(
                &teacher,
                coursework.id,
                UpdateCourseworkRequest {
                    title: Some("Week 2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Week 2");
    }

    #[tokio::test]
    async fn test_enrolled_student_sees_courseworks() {
        let (storage, service, teacher, student, course_id) = setup().await;
        service
            .create(&teacher, create_req(course_id, "Week 1"))
            .await
            .unwrap();

        let err = service.list_for_course(&student, course_id).await.unwrap_err();
        assert!(matches!(err, ClassworksError::PermissionDenied(_)));

        storage
            .create_enrollment(course_id, student.id)
            .await
            .unwrap();

        let listed = service.list_for_course(&student, course_id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }
}
