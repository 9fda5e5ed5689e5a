use crate::entity::Widget;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Value written to `shape` by every v2 update, whatever `numberOfGears` was sent.
pub const UPDATED_SHAPE: &str = "42";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDto {
    #[validate(required(message = "'Id' must not be empty."))]
    pub id: Option<Uuid>,
    #[validate(
        required(message = "'Name' must not be empty."),
        length(max = 50, message = "The length of 'Name' must be 50 characters or fewer.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "'Number Of Gears' must not be empty."),
        range(min = 0, max = 42, message = "'Number Of Gears' must be between 0 and 42.")
    )]
    pub number_of_gears: Option<i32>,
}

impl WidgetDto {
    pub fn new(id: Uuid, name: impl Into<String>, number_of_gears: i32) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            number_of_gears: Some(number_of_gears),
        }
    }
}

/// Accepted gear counts, inclusive.
pub const GEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=42;

/// The gear count is not persisted; it is read back only when the stored shape is a number
/// inside [`GEAR_RANGE`].
pub fn from_entity(item: &Widget) -> WidgetDto {
    WidgetDto {
        id: Some(item.id),
        name: Some(item.name.clone()),
        number_of_gears: item
            .shape
            .as_deref()
            .and_then(|s| s.trim().parse().ok())
            .filter(|n| GEAR_RANGE.contains(n)),
    }
}

/// `numberOfGears` is dropped: the row is created without a shape.
pub fn to_entity(dto: WidgetDto) -> Widget {
    Widget {
        id: dto.id.unwrap_or_default(),
        name: dto.name.unwrap_or_default(),
        shape: None,
    }
}

// Overwrites shape with a fixed literal rather than the submitted gear count.
// Kept as observed behaviour; see DESIGN.md open questions.
pub fn apply_update(item: &mut Widget, dto: &WidgetDto) {
    if let Some(name) = &dto.name {
        item.name = name.clone();
    }
    item.shape = Some(UPDATED_SHAPE.to_string());
}
