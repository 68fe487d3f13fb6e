//! Address DTOs.

use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::db::repository::Resource;
use crate::entities::addresses;
use crate::entities::prelude::Addresses;
use crate::mapping::{Identified, MapOnto};

/// DTO for creating an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAddressDto {
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub zip_code: Option<String>,
    pub city_id: Option<i32>,
    pub country_id: Option<i32>,
}

/// DTO for replacing an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateAddressDto {
    pub id: i32,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub zip_code: Option<String>,
    pub city_id: Option<i32>,
    pub country_id: Option<i32>,
}

/// Address as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAddressDto {
    pub id: i32,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub zip_code: Option<String>,
    pub city_id: Option<i32>,
    pub country_id: Option<i32>,
}

impl From<CreateAddressDto> for addresses::ActiveModel {
    fn from(dto: CreateAddressDto) -> Self {
        Self {
            street1: Set(dto.street1),
            street2: Set(dto.street2),
            zip_code: Set(dto.zip_code),
            city_id: Set(dto.city_id),
            country_id: Set(dto.country_id),
            ..Default::default()
        }
    }
}

impl MapOnto<addresses::ActiveModel> for UpdateAddressDto {
    fn map_onto(self, target: &mut addresses::ActiveModel) {
        target.street1 = Set(self.street1);
        target.street2 = Set(self.street2);
        target.zip_code = Set(self.zip_code);
        target.city_id = Set(self.city_id);
        target.country_id = Set(self.country_id);
    }
}

impl Identified for UpdateAddressDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<addresses::Model> for GetAddressDto {
    fn from(model: addresses::Model) -> Self {
        Self {
            id: model.id,
            street1: model.street1,
            street2: model.street2,
            zip_code: model.zip_code,
            city_id: model.city_id,
            country_id: model.country_id,
        }
    }
}

impl Resource for Addresses {
    const NAME: &'static str = "Address";

    type Entity = Addresses;
    type Model = addresses::Model;
    type ActiveModel = addresses::ActiveModel;
    type Create = CreateAddressDto;
    type Update = UpdateAddressDto;
    type Get = GetAddressDto;

    fn id_column() -> addresses::Column {
        addresses::Column::Id
    }
}
