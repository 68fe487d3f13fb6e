pub use super::addresses::Entity as Addresses;
pub use super::cities::Entity as Cities;
pub use super::countries::Entity as Countries;
pub use super::employees::Entity as Employees;
pub use super::job_categories::Entity as JobCategories;
pub use super::salaries::Entity as Salaries;
