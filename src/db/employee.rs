//! Employee graph queries: subordinates, salaries and job categories.
//!
//! None of these collections are stored on the employee row. Each is a
//! query on the referencing foreign key, answered only when the employee
//! itself exists.

use sea_orm::*;

use super::repository::{Repository, settle};
use crate::entities::prelude::*;
use crate::entities::{employees, job_categories, salaries};
use crate::error::Result;
use crate::mapping::map_all;
use crate::models::{GetEmployeeDto, GetJobCategoryDto, GetSalaryDto};
use crate::response::ServiceResponse;

impl Repository<Employees> {
    /// Employees whose superior is `id`.
    pub async fn subordinates(&self, id: i32) -> ServiceResponse<Vec<GetEmployeeDto>> {
        settle::<Employees, _>("subordinates", self.try_subordinates(id).await)
    }

    /// Salary rows of employee `id`, oldest period first.
    pub async fn salaries(&self, id: i32) -> ServiceResponse<Vec<GetSalaryDto>> {
        settle::<Employees, _>("salaries", self.try_salaries(id).await)
    }

    /// Job categories of employee `id`.
    pub async fn job_categories(&self, id: i32) -> ServiceResponse<Vec<GetJobCategoryDto>> {
        settle::<Employees, _>("job_categories", self.try_job_categories(id).await)
    }

    async fn try_subordinates(&self, id: i32) -> Result<Option<Vec<GetEmployeeDto>>> {
        if self.find(id).await?.is_none() {
            return Ok(None);
        }

        let rows = Employees::find()
            .filter(employees::Column::SuperiorId.eq(id))
            .order_by_asc(employees::Column::Id)
            .all(self.connection())
            .await?;
        Ok(Some(map_all(rows)))
    }

    async fn try_salaries(&self, id: i32) -> Result<Option<Vec<GetSalaryDto>>> {
        let Some(employee) = self.find(id).await? else {
            return Ok(None);
        };

        let rows = employee
            .find_related(Salaries)
            .order_by_asc(salaries::Column::ValidFrom)
            .all(self.connection())
            .await?;
        Ok(Some(map_all(rows)))
    }

    async fn try_job_categories(&self, id: i32) -> Result<Option<Vec<GetJobCategoryDto>>> {
        let Some(employee) = self.find(id).await? else {
            return Ok(None);
        };

        let rows = employee
            .find_related(JobCategories)
            .order_by_asc(job_categories::Column::Id)
            .all(self.connection())
            .await?;
        Ok(Some(map_all(rows)))
    }
}
