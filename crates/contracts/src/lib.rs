//! JSON contracts shared between the front-end and the server API.

pub mod dashboards;
pub mod domain;
pub mod serde_utils;
