//! Cross-page helpers: durable tab storage and route guarding.

pub mod guard;
pub mod storage;
