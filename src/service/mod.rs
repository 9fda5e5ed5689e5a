//! Widget unit of work and request validation.

mod gateway;
mod validation;
pub use gateway::WidgetGateway;
pub use validation::{validate_dto, ValidationReport};
