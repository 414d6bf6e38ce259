pub use super::course_resources::Entity as CourseResources;
pub use super::courses::Entity as Courses;
pub use super::courseworks::Entity as Courseworks;
pub use super::enrollments::Entity as Enrollments;
pub use super::submissions::Entity as Submissions;
pub use super::users::Entity as Users;
