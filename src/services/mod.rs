pub mod courses;
pub mod courseworks;
pub mod enrollments;
pub mod identity;
pub mod resources;
pub mod submissions;
pub mod users;

pub use courses::CourseService;
pub use courseworks::CourseworkService;
pub use enrollments::EnrollmentService;
pub use identity::IdentityService;
pub use resources::ResourceService;
pub use submissions::SubmissionService;
pub use users::UserService;
