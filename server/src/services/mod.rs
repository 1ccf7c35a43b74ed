//! Domain services. Route handlers stay thin; the logic that touches the
//! database lives here, one module per domain.

pub mod auth;
pub mod course;
pub mod quiz;
pub mod session;
