pub mod class_teachers;
pub mod enrollment;

pub use class_teachers::ClassTeacherService;
pub use enrollment::{EnrollmentService, SubmittedApplication};
