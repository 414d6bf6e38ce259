pub mod create;
pub mod delete;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::resources::{entities::CourseResource, requests::CreateResourceRequest};
use crate::policy::Actor;
use crate::storage::Storage;

/// 课程资源服务
///
/// 文件字节在调用之前已交给外部对象存储；这里只管理其元数据行。
pub struct ResourceService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl ResourceService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 登记课程资源
    pub async fn add(&self, actor: &Actor, req: CreateResourceRequest) -> Result<CourseResource> {
        create::add_resource(self, actor, req).await
    }

    /// 删除课程资源
    pub async fn delete(&self, actor: &Actor, resource_id: i64) -> Result<()> {
        delete::delete_resource(self, actor, resource_id).await
    }

    /// 列出课程资源
    pub async fn list_for_course(
        &self,
        actor: &Actor,
        course_id: i64,
    ) -> Result<Vec<CourseResource>> {
        list::list_resources(self, actor, course_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::errors::ClassworksError;
    use crate::models::users::entities::UserRole;
    use crate::storage::memory::MemoryStorage;

    fn create_req(course_id: i64, file_size: i64) -> CreateResourceRequest {
        CreateResourceRequest {
            course_id,
            name: "Syllabus".to_string(),
            description: None,
            file_url: "https://cdn.example.com/f/syllabus.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            file_size,
        }
    }

    async fn setup() -> (Arc<MemoryStorage>, ResourceService, Actor, Actor, i64) {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user(UserRole::Teacher).await;
        let student = storage.seed_user(UserRole::Student).await;
        let course = storage.seed_course(teacher.id).await;
        let service = ResourceService::new(storage.clone());
        (
            storage,
            service,
            Actor::from(&teacher),
            Actor::from(&student),
            course.id,
        )
    }

    #[tokio::test]
    async fn test_owner_adds_resource() {
        let (_s, service, teacher, _student, course_id) = setup().await;

        let resource = service
            .add(&teacher, create_req(course_id, 1024))
            .await
            .unwrap();
        assert_eq!(resource.course_id, course_id);
        assert_eq!(resource.file_size, 1024);
    }

    #[tokio::test]
    async fn test_negative_file_size_rejected() {
        let (_s, service, teacher, _student, course_id) = setup().await;

        let err = service
            .add(&teacher, create_req(course_id, -1))
            .await
            .unwrap_err();
        assert!(matches!(err, ClassworksError::Validation(_)));
    }

    #[tokio::test]
    async fn test_non_owner_cannot_add_resource() {
        let (storage, service, _teacher, student, course_id) = setup().await;
        let other = storage.seed_user(UserRole::Teacher).await;

        for actor in [Actor::from(&other), student] {
            let err = service
                .add(&actor, create_req(course_id, 1024))
                .await
                .unwrap_err();
            assert!(matches!(err, ClassworksError::PermissionDenied(_)));
        }

        let listed = storage.list_resources_for_course(course_id).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_delete_resource() {
        let (_s, service, teacher, _student, course_id) = setup().await;
        let resource = service
            .add(&teacher, create_req(course_id, 1024))
            .await
            .unwrap();

        service.delete(&teacher, resource.id).await.unwrap();

        let err = service.delete(&teacher, resource.id).await.unwrap_err();
        assert!(matches!(err, ClassworksError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_enrolled_student_lists_resources() {
        let (storage, service, teacher, student, course_id) = setup().await;
        service
            .add(&teacher, create_req(course_id, 1024))
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
