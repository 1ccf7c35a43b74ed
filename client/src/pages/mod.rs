//! Route-level pages.

pub mod course;
pub mod instructor_dashboard;
pub mod login;
pub mod student_dashboard;
