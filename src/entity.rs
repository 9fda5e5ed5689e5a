//! Persisted widget record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `widget` table. The id is assigned by the caller and never generated by storage.
#[derive(Clone, Debug, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Widget {
    pub id: Uuid,
    pub name: String,
    pub shape: Option<String>,
}

impl Widget {
    pub fn new(id: Uuid, name: impl Into<String>, shape: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            shape,
        }
    }
}
