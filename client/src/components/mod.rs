//! Reusable view components shared across pages.

pub mod course_card;
pub mod curriculum_panel;
