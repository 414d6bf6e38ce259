use super::CourseService;
use crate::errors::{ClassworksError, Result};
use crate::models::courses::entities::Course;
use crate::policy::{self, Action, Actor};

pub async fn get_course(service: &CourseService, actor: &Actor, course_id: i64) -> Result<Course> {
    let course = service
        .storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Course not found"))?;

    let enrolled = service
        .storage
        .get_enrollment_by_course_and_student(course_id, actor.id)
        .await?
        .is_some();

    policy::authorize(
        actor,
        &Action::ViewCourse {
            teacher_id: course.teacher_id,
            enrolled,
        },
    )?;

    Ok(course)
}
