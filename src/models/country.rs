//! Country DTOs.

use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::db::repository::Resource;
use crate::entities::countries;
use crate::entities::prelude::Countries;
use crate::mapping::{Identified, MapOnto};

/// DTO for creating a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCountryDto {
    pub name: String,
}

/// DTO for replacing a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCountryDto {
    pub id: i32,
    pub name: String,
}

/// Country as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCountryDto {
    pub id: i32,
    pub name: String,
}

impl From<CreateCountryDto> for countries::ActiveModel {
    fn from(dto: CreateCountryDto) -> Self {
        Self {
            name: Set(dto.name),
            ..Default::default()
        }
    }
}

impl MapOnto<countries::ActiveModel> for UpdateCountryDto {
    fn map_onto(self, target: &mut countries::ActiveModel) {
        target.name = Set(self.name);
    }
}

impl Identified for UpdateCountryDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<countries::Model> for GetCountryDto {
    fn from(model: countries::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl Resource for Countries {
    const NAME: &'static str = "Country";

    type Entity = Countries;
    type Model = countries::Model;
    type ActiveModel = countries::ActiveModel;
    type Create = CreateCountryDto;
    type Update = UpdateCountryDto;
    type Get = GetCountryDto;

    fn id_column() -> countries::Column {
        countries::Column::Id
    }
}
