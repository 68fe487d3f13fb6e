//! Boundary shapes (DTOs) for every resource and their mapping to stored records.
//!
//! Each resource has a Create shape (no id), an Update shape (id plus every
//! mutable field, applied as a full replace) and a Get shape (id plus every
//! stored field). The `Resource` impls next to them bind the shapes to a
//! table for the generic repository.

pub mod address;
pub mod city;
pub mod country;
pub mod employee;
pub mod job_category;
pub mod salary;

pub use address::{CreateAddressDto, GetAddressDto, UpdateAddressDto};
pub use city::{CreateCityDto, GetCityDto, UpdateCityDto};
pub use country::{CreateCountryDto, GetCountryDto, UpdateCountryDto};
pub use employee::{CreateEmployeeDto, GetEmployeeDto, UpdateEmployeeDto};
pub use job_category::{CreateJobCategoryDto, GetJobCategoryDto, UpdateJobCategoryDto};
pub use salary::{CreateSalaryDto, GetSalaryDto, UpdateSalaryDto};
