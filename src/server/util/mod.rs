//! Small helpers shared by the server layers.

pub mod json;
pub mod validate;
