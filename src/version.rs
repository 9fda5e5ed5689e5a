//! API versions and the per-version capability set the generic handlers are instantiated with.

use crate::dto;
use crate::entity::Widget;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Group label used for routing and documentation. Declared per handler set, never inferred.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    pub fn group_name(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }

    /// Mount point of the widget collection for this version.
    pub fn route_prefix(self) -> &'static str {
        match self {
            ApiVersion::V1 => "/api/v1/widget",
            ApiVersion::V2 => "/api/v2/widget",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_name())
    }
}

/// What one API version contributes: its transfer object, its rules (via `Validate`) and its mapping.
pub trait WidgetVersion: Send + Sync + 'static {
    const VERSION: ApiVersion;

    type Dto: Serialize + DeserializeOwned + Validate + Send + 'static;

    /// Identifier carried by a validated transfer object.
    fn dto_id(dto: &Self::Dto) -> Option<Uuid>;

    fn from_entity(item: &Widget) -> Self::Dto;

    fn to_entity(dto: Self::Dto) -> Widget;

    fn apply_update(item: &mut Widget, dto: &Self::Dto);
}

pub struct V1;

impl WidgetVersion for V1 {
    const VERSION: ApiVersion = ApiVersion::V1;
    type Dto = dto::v1::WidgetDto;

    fn dto_id(dto: &Self::Dto) -> Option<Uuid> {
        dto.id
    }

    fn from_entity(item: &Widget) -> Self::Dto {
        dto::v1::from_entity(item)
    }

    fn to_entity(dto: Self::Dto) -> Widget {
        dto::v1::to_entity(dto)
    }

    fn apply_update(item: &mut Widget, dto: &Self::Dto) {
        dto::v1::apply_update(item, dto)
    }
}

pub struct V2;

impl WidgetVersion for V2 {
    const VERSION: ApiVersion = ApiVersion::V2;
    type Dto = dto::v2::WidgetDto;

    fn dto_id(dto: &Self::Dto) -> Option<Uuid> {
        dto.id
    }

    fn from_entity(item: &Widget) -> Self::Dto {
        dto::v2::from_entity(item)
    }

    fn to_entity(dto: Self::Dto) -> Widget {
        dto::v2::to_entity(dto)
    }

    fn apply_update(item: &mut Widget, dto: &Self::Dto) {
        dto::v2::apply_update(item, dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_group_is_v1() {
        assert_eq!(ApiVersion::default().group_name(), "v1");
    }

    #[test]
    fn each_handler_set_declares_its_group() {
        assert_eq!(V1::VERSION.to_string(), "v1");
        assert_eq!(V2::VERSION.route_prefix(), "/api/v2/widget");
    }
}
