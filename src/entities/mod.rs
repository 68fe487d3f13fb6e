//! SeaORM entities for the employee record tables.

pub mod prelude;

pub mod addresses;
pub mod cities;
pub mod countries;
pub mod employees;
pub mod job_categories;
pub mod salaries;
pub mod sea_orm_active_enums;
