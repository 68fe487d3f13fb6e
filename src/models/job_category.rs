//! Job category DTOs.

use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::db::repository::Resource;
use crate::entities::job_categories;
use crate::entities::prelude::JobCategories;
use crate::mapping::{Identified, MapOnto};

/// DTO for creating a job category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateJobCategoryDto {
    pub name: String,
    pub employee_id: Option<i32>,
}

/// DTO for replacing a job category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateJobCategoryDto {
    pub id: i32,
    pub name: String,
    pub employee_id: Option<i32>,
}

/// Job category as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetJobCategoryDto {
    pub id: i32,
    pub name: String,
    pub employee_id: Option<i32>,
}

impl From<CreateJobCategoryDto> for job_categories::ActiveModel {
    fn from(dto: CreateJobCategoryDto) -> Self {
        Self {
            name: Set(dto.name),
            employee_id: Set(dto.employee_id),
            ..Default::default()
        }
    }
}

impl MapOnto<job_categories::ActiveModel> for UpdateJobCategoryDto {
    fn map_onto(self, target: &mut job_categories::ActiveModel) {
        target.name = Set(self.name);
        target.employee_id = Set(self.employee_id);
    }
}

impl Identified for UpdateJobCategoryDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<job_categories::Model> for GetJobCategoryDto {
    fn from(model: job_categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            employee_id: model.employee_id,
        }
    }
}

impl Resource for JobCategories {
    const NAME: &'static str = "JobCategory";

    type Entity = JobCategories;
    type Model = job_categories::Model;
    type ActiveModel = job_categories::ActiveModel;
    type Create = CreateJobCategoryDto;
    type Update = UpdateJobCategoryDto;
    type Get = GetJobCategoryDto;

    fn id_column() -> job_categories::Column {
        job_categories::Column::Id
    }
}
