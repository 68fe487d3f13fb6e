//! City DTOs.

use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::db::repository::Resource;
use crate::entities::cities;
use crate::entities::prelude::Cities;
use crate::mapping::{Identified, MapOnto};

/// DTO for creating a city.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCityDto {
    pub name: String,
    pub country_id: Option<i32>,
}

/// DTO for replacing a city.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCityDto {
    pub id: i32,
    pub name: String,
    pub country_id: Option<i32>,
}

/// City as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCityDto {
    pub id: i32,
    pub name: String,
    pub country_id: Option<i32>,
}

impl From<CreateCityDto> for cities::ActiveModel {
    fn from(dto: CreateCityDto) -> Self {
        Self {
            name: Set(dto.name),
            country_id: Set(dto.country_id),
            ..Default::default()
        }
    }
}

impl MapOnto<cities::ActiveModel> for UpdateCityDto {
    fn map_onto(self, target: &mut cities::ActiveModel) {
        target.name = Set(self.name);
        target.country_id = Set(self.country_id);
    }
}

impl Identified for UpdateCityDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<cities::Model> for GetCityDto {
    fn from(model: cities::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country_id: model.country_id,
        }
    }
}

impl Resource for Cities {
    const NAME: &'static str = "City";

    type Entity = Cities;
    type Model = cities::Model;
    type ActiveModel = cities::ActiveModel;
    type Create = CreateCityDto;
    type Update = UpdateCityDto;
    type Get = GetCityDto;

    fn id_column() -> cities::Column {
        cities::Column::Id
    }
}
