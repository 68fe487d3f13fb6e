//! Employee DTOs.

use sea_orm::ActiveValue::Set;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::db::repository::Resource;
use crate::entities::prelude::Employees;
use crate::entities::{employees, sea_orm_active_enums::Gender};
use crate::mapping::{Identified, MapOnto};

/// DTO for creating an employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEmployeeDto {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<DateTimeWithTimeZone>,
    pub gender: Gender,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address_id: Option<i32>,
    pub country_id: Option<i32>,
    pub superior_id: Option<i32>,
    pub joined_date: Option<DateTimeWithTimeZone>,
    pub exited_date: Option<DateTimeWithTimeZone>,
}

/// DTO for replacing an employee. Fields left out are cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateEmployeeDto {
    pub id: i32,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<DateTimeWithTimeZone>,
    pub gender: Gender,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address_id: Option<i32>,
    pub country_id: Option<i32>,
    pub superior_id: Option<i32>,
    pub joined_date: Option<DateTimeWithTimeZone>,
    pub exited_date: Option<DateTimeWithTimeZone>,
}

/// Employee as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEmployeeDto {
    pub id: i32,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<DateTimeWithTimeZone>,
    pub gender: Gender,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address_id: Option<i32>,
    pub country_id: Option<i32>,
    pub superior_id: Option<i32>,
    pub joined_date: Option<DateTimeWithTimeZone>,
    pub exited_date: Option<DateTimeWithTimeZone>,
}

impl From<CreateEmployeeDto> for employees::ActiveModel {
    fn from(dto: CreateEmployeeDto) -> Self {
        Self {
            first_name: Set(dto.first_name),
            middle_name: Set(dto.middle_name),
            last_name: Set(dto.last_name),
            birth_date: Set(dto.birth_date),
            gender: Set(dto.gender),
            email: Set(dto.email),
            phone_number: Set(dto.phone_number),
            address_id: Set(dto.address_id),
            country_id: Set(dto.country_id),
            superior_id: Set(dto.superior_id),
            joined_date: Set(dto.joined_date),
            exited_date: Set(dto.exited_date),
            ..Default::default()
        }
    }
}

impl MapOnto<employees::ActiveModel> for UpdateEmployeeDto {
    fn map_onto(self, target: &mut employees::ActiveModel) {
        target.first_name = Set(self.first_name);
        target.middle_name = Set(self.middle_name);
        target.last_name = Set(self.last_name);
        target.birth_date = Set(self.birth_date);
        target.gender = Set(self.gender);
        target.email = Set(self.email);
        target.phone_number = Set(self.phone_number);
        target.address_id = Set(self.address_id);
        target.country_id = Set(self.country_id);
        target.superior_id = Set(self.superior_id);
        target.joined_date = Set(self.joined_date);
        target.exited_date = Set(self.exited_date);
    }
}

impl Identified for UpdateEmployeeDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<employees::Model> for GetEmployeeDto {
    fn from(model: employees::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            birth_date: model.birth_date,
            gender: model.gender,
            email: model.email,
            phone_number: model.phone_number,
            address_id: model.address_id,
            country_id: model.country_id,
            superior_id: model.superior_id,
            joined_date: model.joined_date,
            exited_date: model.exited_date,
        }
    }
}

impl Resource for Employees {
    const NAME: &'static str = "Employee";

    type Entity = Employees;
    type Model = employees::Model;
    type ActiveModel = employees::ActiveModel;
    type Create = CreateEmployeeDto;
    type Update = UpdateEmployeeDto;
    type Get = GetEmployeeDto;

    fn id_column() -> employees::Column {
        employees::Column::Id
    }
}
