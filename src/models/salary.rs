//! Salary DTOs.
//!
//! `from` and `to` bound the period a salary applies to; a missing `to`
//! leaves the period open. On the wire these are `from`/`to`, in the table
//! `valid_from`/`valid_to`. Amounts travel as JSON numbers carrying every
//! digit of the stored decimal.

use sea_orm::ActiveValue::Set;
use sea_orm::prelude::{DateTimeWithTimeZone, Decimal};
use serde::{Deserialize, Serialize};

use crate::db::repository::Resource;
use crate::entities::prelude::Salaries;
use crate::entities::salaries;
use crate::mapping::{Identified, MapOnto};

/// DTO for creating a salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalaryDto {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub from: DateTimeWithTimeZone,
    pub to: Option<DateTimeWithTimeZone>,
    pub employee_id: Option<i32>,
}

/// DTO for replacing a salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSalaryDto {
    pub id: i32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub from: DateTimeWithTimeZone,
    pub to: Option<DateTimeWithTimeZone>,
    pub employee_id: Option<i32>,
}

/// Salary as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSalaryDto {
    pub id: i32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub from: DateTimeWithTimeZone,
    pub to: Option<DateTimeWithTimeZone>,
    pub employee_id: Option<i32>,
}

impl From<CreateSalaryDto> for salaries::ActiveModel {
    fn from(dto: CreateSalaryDto) -> Self {
        Self {
            amount: Set(dto.amount),
            valid_from: Set(dto.from),
            valid_to: Set(dto.to),
            employee_id: Set(dto.employee_id),
            ..Default::default()
        }
    }
}

impl MapOnto<salaries::ActiveModel> for UpdateSalaryDto {
    fn map_onto(self, target: &mut salaries::ActiveModel) {
        target.amount = Set(self.amount);
        target.valid_from = Set(self.from);
        target.valid_to = Set(self.to);
        target.employee_id = Set(self.employee_id);
    }
}

impl Identified for UpdateSalaryDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<salaries::Model> for GetSalaryDto {
    fn from(model: salaries::Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
            from: model.valid_from,
            to: model.valid_to,
            employee_id: model.employee_id,
        }
    }
}

impl Resource for Salaries {
    const NAME: &'static str = "Salary";

    type Entity = Salaries;
    type Model = salaries::Model;
    type ActiveModel = salaries::ActiveModel;
    type Create = CreateSalaryDto;
    type Update = UpdateSalaryDto;
    type Get = GetSalaryDto;

    fn id_column() -> salaries::Column {
        salaries::Column::Id
    }
}
