//! Network layer: wire types and the REST auth/catalog gateway.

pub mod api;
pub mod types;
