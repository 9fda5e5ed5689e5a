//! HTTP handlers for widget CRUD.

pub mod widget;
pub use widget::*;
