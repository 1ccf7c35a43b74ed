//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `login_form`, `quiz_draft`) so the
//! pages stay thin bindings over plain, natively testable structs. Fields
//! are held in `RwSignal`s provided via context at the app root.

pub mod login_form;
pub mod quiz_draft;
pub mod session;
