//! Employee entity.
//!
//! `superior_id` points back into this table. Subordinates are not stored;
//! they are the rows whose `superior_id` equals a given id. Nothing stops a
//! superior chain from forming a cycle.

use super::sea_orm_active_enums::Gender;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<DateTimeWithTimeZone>,
    pub gender: Gender,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[sea_orm(unique)]
    pub address_id: Option<i32>,
    #[sea_orm(unique)]
    pub country_id: Option<i32>,
    pub superior_id: Option<i32>,
    pub joined_date: Option<DateTimeWithTimeZone>,
    pub exited_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::addresses::Entity",
        from = "Column::AddressId",
        to = "super::addresses::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Address,
    #[sea_orm(
        belongs_to = "super::countries::Entity",
        from = "Column::CountryId",
        to = "super::countries::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Country,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::SuperiorId",
        to = "Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Superior,
    #[sea_orm(has_many = "super::salaries::Entity")]
    Salaries,
    #[sea_orm(has_many = "super::job_categories::Entity")]
    JobCategories,
}

impl Related<super::addresses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::salaries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salaries.def()
    }
}

impl Related<super::job_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
