use super::CourseworkService;
use crate::errors::{ClassworksError, Result};
use crate::models::courseworks::entities::Coursework;
use crate::policy::{self, Action, Actor};

pub async fn get_coursework(
    service: &CourseworkService,
    actor: &Actor,
    coursework_id: i64,
) -> Result<Coursework> {
    let coursework = service
        .storage
        .get_coursework_by_id(coursework_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Coursework not found"))?;

    let course = service
        .storage
        .get_course_by_id(coursework.course_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("Course not found"))?;

    let enrolled = service
        .storage
        .get_enrollment_by_course_and_student(course.id, actor.id)
        .await?
        .is_some();

    policy::authorize(
        actor,
        &Action::ViewCourse {
            teacher_id: course.teacher_id,
            enrolled,
        },
    )?;

    Ok(coursework)
}
