use crate::entity::Widget;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

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
        required(message = "'Shape' must not be empty."),
        length(max = 50, message = "The length of 'Shape' must be 50 characters or fewer.")
    )]
    pub shape: Option<String>,
}

impl WidgetDto {
    pub fn new(id: Uuid, name: impl Into<String>, shape: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            shape: Some(shape.into()),
        }
    }
}

pub fn from_entity(item: &Widget) -> WidgetDto {
    WidgetDto {
        id: Some(item.id),
        name: Some(item.name.clone()),
        shape: item.shape.clone(),
    }
}

/// Build the row to insert. Callers validate first; an absent id maps to the nil UUID.
pub fn to_entity(dto: WidgetDto) -> Widget {
    Widget {
        id: dto.id.unwrap_or_default(),
        name: dto.name.unwrap_or_default(),
        shape: dto.shape,
    }
}

/// Only the name is taken from an update request.
pub fn apply_update(item: &mut Widget, dto: &WidgetDto) {
    if let Some(name) = &dto.name {
        item.name = name.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ValidationReport;

    fn report(dto: &WidgetDto) -> ValidationReport {
        ValidationReport::from(&dto.validate().unwrap_err())
    }

    #[test]
    fn maps_all_fields_both_ways() {
        let id = Uuid::new_v4();
        let dto = WidgetDto::new(id, "Cog", "Square");
        let entity = to_entity(dto.clone());
        assert_eq!(entity, Widget::new(id, "Cog", Some("Square".into())));
        assert_eq!(from_entity(&entity), dto);
    }

    #[test]
    fn update_keeps_shape() {
        let id = Uuid::new_v4();
        let mut w = Widget::new(id, "Cog", Some("Square".into()));
        apply_update(&mut w, &WidgetDto::new(id, "Big Cog", "Round"));
        assert_eq!(w.name, "Big Cog");
        assert_eq!(w.shape.as_deref(), Some("Square"));
    }

    #[test]
    fn valid_dto_passes() {
        let dto = WidgetDto::new(Uuid::new_v4(), "x".repeat(50), "y".repeat(50));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn every_missing_field_is_reported() {
        let dto = WidgetDto {
            id: None,
            name: None,
            shape: None,
        };
        let report = report(&dto);
        assert_eq!(report.fields().collect::<Vec<_>>(), vec!["id", "name", "shape"]);
    }

    #[test]
    fn length_is_counted_in_characters() {
        let dto = WidgetDto::new(Uuid::new_v4(), "é".repeat(50), "ü".repeat(51));
        let report = report(&dto);
        assert_eq!(report.fields().collect::<Vec<_>>(), vec!["shape"]);
        assert_eq!(
            report.messages("shape"),
            ["The length of 'Shape' must be 50 characters or fewer."]
        );
    }
}
