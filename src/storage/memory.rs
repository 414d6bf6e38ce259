//! 测试用内存存储
//!
//! 以确定性方式实现 [`Storage`]，供服务层单元测试注入，无需真实数据库。
//! 与 SeaORM 实现保持同样的约束语义：唯一键冲突返回带
//! "UNIQUE constraint failed" 字样的数据库错误，upsert 覆盖原行。

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::Storage;
use crate::errors::{ClassworksError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    courseworks::{
        entities::Coursework,
        requests::{CreateCourseworkRequest, UpdateCourseworkRequest},
    },
    enrollments::entities::Enrollment,
    resources::{entities::CourseResource, requests::CreateResourceRequest},
    submissions::entities::Submission,
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

#[derive(Default)]
struct Tables {
    users: HashMap<i64, User>,
    courses: HashMap<i64, Course>,
    enrollments: HashMap<i64, Enrollment>,
    courseworks: HashMap<i64, Coursework>,
    submissions: HashMap<i64, Submission>,
    resources: HashMap<i64, CourseResource>,
    next_id: i64,
}

pub struct MemoryStorage {
    tables: Mutex<Tables>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables {
                next_id: 1,
                ..Default::default()
            }),
        }
    }

    fn alloc_id(tables: &mut Tables) -> i64 {
        let id = tables.next_id;
        tables.next_id += 1;
        id
    }

    // ---- 测试夹具 ----

    pub async fn seed_user(&self, role: UserRole) -> User {
        let n = { self.tables.lock().unwrap().next_id };
        self.create_user(CreateUserRequest {
            external_id: format!("ext-{n}"),
            email: format!("user{n}@example.com"),
            full_name: format!("User {n}"),
            role,
            avatar_url: None,
        })
        .await
        .unwrap()
    }

    pub async fn seed_course(&self, teacher_id: i64) -> Course {
        self.create_course(
            teacher_id,
            CreateCourseRequest {
                title: "Course".to_string(),
                description: None,
                image_url: None,
                teacher_id: Some(teacher_id),
            },
        )
        .await
        .unwrap()
    }

    pub async fn seed_coursework(&self, course_id: i64) -> Coursework {
        self.create_coursework(CreateCourseworkRequest {
            course_id,
            title: "Coursework".to_string(),
            description: None,
            due_date: None,
        })
        .await
        .unwrap()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        let mut tables = self.tables.lock().unwrap();

        if tables
            .users
            .values()
            .any(|u| u.external_id == user.external_id)
        {
            return Err(ClassworksError::database_operation(
                "UNIQUE constraint failed: users.external_id",
            ));
        }
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(ClassworksError::database_operation(
                "UNIQUE constraint failed: users.email",
            ));
        }

        let id = Self::alloc_id(&mut tables);
        let now = Utc::now();
        let stored = User {
            id,
            external_id: user.external_id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            avatar_url: user.avatar_url,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.tables.lock().unwrap().users.get(&id).cloned())
    }

    async fn get_user_by_external_id(&self, external_id: &str) -> Result<Option<User>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.external_id == external_id)
            .cloned())
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(full_name) = update.full_name {
            user.full_name = full_name;
        }
        if let Some(avatar_url) = update.avatar_url {
            user.avatar_url = Some(avatar_url);
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn update_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        user.role = role;
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        let tables = self.tables.lock().unwrap();
        let page = query.pagination.page.unwrap_or(1).max(1);
        let size = query.pagination.size.unwrap_or(10).clamp(1, 100);

        let mut items: Vec<User> = tables
            .users
            .values()
            .filter(|u| query.role.is_none_or(|r| u.role == r))
            .filter(|u| {
                query.search.as_deref().is_none_or(|s| {
                    u.full_name.contains(s.trim()) || u.email.contains(s.trim())
                })
            })
            .cloned()
            .collect();
        items.sort_by_key(|u| u.id);

        let total = items.len() as i64;
        let total_pages = (total + size - 1) / size;
        let items = items
            .into_iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .collect();

        Ok(UserListResponse {
            items,
            pagination: PaginationInfo {
                page,
                page_size: size,
                total,
                total_pages,
            },
        })
    }

    async fn list_available_students(&self, course_id: i64) -> Result<Vec<User>> {
        let tables = self.tables.lock().unwrap();
        let enrolled: Vec<i64> = tables
            .enrollments
            .values()
            .filter(|e| e.course_id == course_id)
            .map(|e| e.student_id)
            .collect();

        let mut items: Vec<User> = tables
            .users
            .values()
            .filter(|u| u.role == UserRole::Student && !enrolled.contains(&u.id))
            .cloned()
            .collect();
        items.sort_by_key(|u| u.id);
        Ok(items)
    }

    // 课程模块
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course> {
        let mut tables = self.tables.lock().unwrap();
        let id = Self::alloc_id(&mut tables);
        let now = Utc::now();
        let stored = Course {
            id,
            teacher_id,
            title: course.title,
            description: course.description,
            image_url: course.image_url,
            created_at: now,
            updated_at: now,
        };
        tables.courses.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        Ok(self.tables.lock().unwrap().courses.get(&course_id).cloned())
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(course) = tables.courses.get_mut(&course_id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            course.title = title;
        }
        if let Some(description) = update.description {
            course.description = Some(description);
        }
        if let Some(image_url) = update.image_url {
            course.image_url = Some(image_url);
        }
        course.updated_at = Utc::now();

        Ok(Some(course.clone()))
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let items: Vec<Course> = {
            let tables = self.tables.lock().unwrap();
            tables.courses.values().cloned().collect()
        };
        Ok(paginate_courses(items, query))
    }

    async fn list_teacher_courses_with_pagination(
        &self,
        teacher_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let items: Vec<Course> = {
            let tables = self.tables.lock().unwrap();
            tables
                .courses
                .values()
                .filter(|c| c.teacher_id == teacher_id)
                .cloned()
                .collect()
        };
        Ok(paginate_courses(items, query))
    }

    async fn list_student_courses_with_pagination(
        &self,
        student_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let items: Vec<Course> = {
            let tables = self.tables.lock().unwrap();
            let course_ids: Vec<i64> = tables
                .enrollments
                .values()
                .filter(|e| e.student_id == student_id)
                .map(|e| e.course_id)
                .collect();
            tables
                .courses
                .values()
                .filter(|c| course_ids.contains(&c.id))
                .cloned()
                .collect()
        };
        Ok(paginate_courses(items, query))
    }

    // 选课模块
    async fn create_enrollment(&self, course_id: i64, student_id: i64) -> Result<Enrollment> {
        let mut tables = self.tables.lock().unwrap();

        if tables
            .enrollments
            .values()
            .any(|e| e.course_id == course_id && e.student_id == student_id)
        {
            return Err(ClassworksError::database_operation(
                "UNIQUE constraint failed: enrollments.course_id, enrollments.student_id",
            ));
        }

        let id = Self::alloc_id(&mut tables);
        let now = Utc::now();
        let stored = Enrollment {
            id,
            course_id,
            student_id,
            created_at: now,
            updated_at: now,
        };
        tables.enrollments.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .enrollments
            .get(&enrollment_id)
            .cloned())
    }

    async fn get_enrollment_by_course_and_student(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .enrollments
            .values()
            .find(|e| e.course_id == course_id && e.student_id == student_id)
            .cloned())
    }

    async fn delete_enrollment(&self, enrollment_id: i64) -> Result<bool> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .enrollments
            .remove(&enrollment_id)
            .is_some())
    }

    async fn list_enrollments_for_course(&self, course_id: i64) -> Result<Vec<Enrollment>> {
        let tables = self.tables.lock().unwrap();
        let mut items: Vec<Enrollment> = tables
            .enrollments
            .values()
            .filter(|e| e.course_id == course_id)
            .cloned()
            .collect();
        items.sort_by_key(|e| e.id);
        Ok(items)
    }

    // 作业模块
    async fn create_coursework(&self, coursework: CreateCourseworkRequest) -> Result<Coursework> {
        let mut tables = self.tables.lock().unwrap();
        let id = Self::alloc_id(&mut tables);
        let now = Utc::now();
        let stored = Coursework {
            id,
            course_id: coursework.course_id,
            title: coursework.title,
            description: coursework.description,
            due_date: coursework.due_date,
            created_at: now,
            updated_at: now,
        };
        tables.courseworks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_coursework_by_id(&self, coursework_id: i64) -> Result<Option<Coursework>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .courseworks
            .get(&coursework_id)
            .cloned())
    }

    async fn update_coursework(
        &self,
        coursework_id: i64,
        update: UpdateCourseworkRequest,
    ) -> Result<Option<Coursework>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(coursework) = tables.courseworks.get_mut(&coursework_id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            coursework.title = title;
        }
        if let Some(description) = update.description {
            coursework.description = Some(description);
        }
        if let Some(due_date) = update.due_date {
            coursework.due_date = Some(due_date);
        }
        coursework.updated_at = Utc::now();

        Ok(Some(coursework.clone()))
    }

    async fn list_courseworks_for_course(&self, course_id: i64) -> Result<Vec<Coursework>> {
        let tables = self.tables.lock().unwrap();
        let mut items: Vec<Coursework> = tables
            .courseworks
            .values()
            .filter(|w| w.course_id == course_id)
            .cloned()
            .collect();
        items.sort_by_key(|w| w.id);
        Ok(items)
    }

    // 提交模块
    async fn upsert_submission(
        &self,
        coursework_id: i64,
        student_id: i64,
        content: String,
        file_url: Option<String>,
    ) -> Result<Submission> {
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();

        let existing_id = tables
            .submissions
            .values()
            .find(|s| s.coursework_id == coursework_id && s.student_id == student_id)
            .map(|s| s.id);

        match existing_id {
            Some(id) => {
                // 覆盖原行并清空评分
                let submission = tables.submissions.get_mut(&id).unwrap();
                submission.content = content;
                submission.file_url = file_url;
                submission.grade = None;
                submission.feedback = None;
                submission.updated_at = now;
                Ok(submission.clone())
            }
            None => {
                let id = Self::alloc_id(&mut tables);
                let stored = Submission {
                    id,
                    coursework_id,
                    student_id,
                    content,
                    file_url,
                    grade: None,
                    feedback: None,
                    created_at: now,
                    updated_at: now,
                };
                tables.submissions.insert(id, stored.clone());
                Ok(stored)
            }
        }
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .submissions
            .get(&submission_id)
            .cloned())
    }

    async fn get_submission_by_coursework_and_student(
        &self,
        coursework_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .submissions
            .values()
            .find(|s| s.coursework_id == coursework_id && s.student_id == student_id)
            .cloned())
    }

    async fn set_submission_grade(
        &self,
        submission_id: i64,
        grade: i32,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(submission) = tables.submissions.get_mut(&submission_id) else {
            return Ok(None);
        };
        submission.grade = Some(grade);
        submission.feedback = feedback;
        submission.updated_at = Utc::now();
        Ok(Some(submission.clone()))
    }

    async fn delete_submission(&self, submission_id: i64) -> Result<bool> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .submissions
            .remove(&submission_id)
            .is_some())
    }

    async fn list_submissions_for_coursework(
        &self,
        coursework_id: i64,
    ) -> Result<Vec<Submission>> {
        let tables = self.tables.lock().unwrap();
        let mut items: Vec<Submission> = tables
            .submissions
            .values()
            .filter(|s| s.coursework_id == coursework_id)
            .cloned()
            .collect();
        items.sort_by_key(|s| s.id);
        Ok(items)
    }

    // 课程资源模块
    async fn create_resource(&self, resource: CreateResourceRequest) -> Result<CourseResource> {
        let mut tables = self.tables.lock().unwrap();
        let id = Self::alloc_id(&mut tables);
        let now = Utc::now();
        let stored = CourseResource {
            id,
            course_id: resource.course_id,
            name: resource.name,
            description: resource.description,
            file_url: resource.file_url,
            file_type: resource.file_type,
            file_size: resource.file_size,
            created_at: now,
            updated_at: now,
        };
        tables.resources.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_resource_by_id(&self, resource_id: i64) -> Result<Option<CourseResource>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .resources
            .get(&resource_id)
            .cloned())
    }

    async fn delete_resource(&self, resource_id: i64) -> Result<bool> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .resources
            .remove(&resource_id)
            .is_some())
    }

    async fn list_resources_for_course(&self, course_id: i64) -> Result<Vec<CourseResource>> {
        let tables = self.tables.lock().unwrap();
        let mut items: Vec<CourseResource> = tables
            .resources
            .values()
            .filter(|r| r.course_id == course_id)
            .cloned()
            .collect();
        items.sort_by_key(|r| r.id);
        Ok(items)
    }
}

fn paginate_courses(mut items: Vec<Course>, query: CourseListQuery) -> CourseListResponse {
    let page = query.pagination.page.unwrap_or(1).max(1);
    let size = query.pagination.size.unwrap_or(10).clamp(1, 100);

    if let Some(ref search) = query.search
        && !search.trim().is_empty()
    {
        items.retain(|c| c.title.contains(search.trim()));
    }
    items.sort_by_key(|c| c.id);

    let total = items.len() as i64;
    let total_pages = (total + size - 1) / size;
    let items = items
        .into_iter()
        .skip(((page - 1) * size) as usize)
        .take(size as usize)
        .collect();

    CourseListResponse {
        items,
        pagination: PaginationInfo {
            page,
            page_size: size,
            total,
            total_pages,
        },
    }
}
