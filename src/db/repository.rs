//! Generic repository with the five CRUD operations shared by every resource.
//!
//! A [`Resource`] binds a table to its boundary shapes; [`Repository`]
//! implements the operations once over any such binding. Every operation
//! settles into a [`ServiceResponse`]: storage failures are caught, logged and
//! reported through `success == false`, never returned as `Err`.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, ModelTrait, QueryFilter,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::mapping::{Identified, MapOnto, map_all};
use crate::response::ServiceResponse;

/// Type bindings for one resource: its table, record types and DTOs.
pub trait Resource: Send + Sync + 'static {
    /// Route segment and log label, e.g. `"Employee"`.
    const NAME: &'static str;

    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync + 'static;
    type Create: Into<Self::ActiveModel> + DeserializeOwned + Send + 'static;
    type Update: MapOnto<Self::ActiveModel> + Identified + DeserializeOwned + Send + 'static;
    type Get: From<Self::Model> + Serialize + Send + Sync + 'static;

    /// Integer primary key column.
    fn id_column() -> <Self::Entity as EntityTrait>::Column;
}

/// Repository for one resource, scoped to a single request.
pub struct Repository<R: Resource> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Repository<R> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Every row, in the order the store returns them.
    pub async fn get_all(&self) -> ServiceResponse<Vec<R::Get>> {
        settle::<R, _>("get_all", self.list().await.map(Some))
    }

    /// The row with `id`; an absent row is not a failure.
    pub async fn get_by_id(&self, id: i32) -> ServiceResponse<R::Get> {
        let result = self.find(id).await.map(|found| found.map(R::Get::from));
        settle::<R, _>("get_by_id", result)
    }

    /// Insert a row and return the whole collection.
    pub async fn create(&self, dto: R::Create) -> ServiceResponse<Vec<R::Get>> {
        settle::<R, _>("create", self.try_create(dto).await.map(Some))
    }

    /// Replace every mutable field of the row named by `dto`.
    ///
    /// Returns an empty envelope without touching the store when the row
    /// does not exist.
    pub async fn update(&self, dto: R::Update) -> ServiceResponse<R::Get> {
        settle::<R, _>("update", self.try_update(dto).await)
    }

    /// Remove the row with `id` and return what remains.
    ///
    /// Unlike [`get_by_id`](Self::get_by_id), a missing row is a failure here.
    /// Rows still referenced through a foreign key are refused by the store.
    pub async fn delete(&self, id: i32) -> ServiceResponse<Vec<R::Get>> {
        settle::<R, _>("delete", self.try_delete(id).await.map(Some))
    }

    pub(crate) async fn list(&self) -> Result<Vec<R::Get>> {
        let rows = R::Entity::find().all(&self.db).await?;
        Ok(map_all(rows))
    }

    pub(crate) async fn find(&self, id: i32) -> Result<Option<R::Model>> {
        let row = R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(&self.db)
            .await?;
        Ok(row)
    }

    async fn try_create(&self, dto: R::Create) -> Result<Vec<R::Get>> {
        let active: R::ActiveModel = dto.into();
        active.insert(&self.db).await?;
        self.list().await
    }

    async fn try_update(&self, dto: R::Update) -> Result<Option<R::Get>> {
        let Some(existing) = self.find(dto.id()).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        dto.map_onto(&mut active);
        let updated = active.update(&self.db).await?;
        Ok(Some(R::Get::from(updated)))
    }

    async fn try_delete(&self, id: i32) -> Result<Vec<R::Get>> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} {id}", R::NAME)))?;

        existing.into_active_model().delete(&self.db).await?;
        self.list().await
    }
}

/// Fold an operation outcome into an envelope, logging failures.
pub(crate) fn settle<R: Resource, T>(operation: &str, result: Result<Option<T>>) -> ServiceResponse<T> {
    match &result {
        Ok(Some(_)) => debug!(resource = R::NAME, operation, "ok"),
        Ok(None) => debug!(resource = R::NAME, operation, "no matching row"),
        Err(e) => warn!(resource = R::NAME, operation, error = %e, "Repository operation failed"),
    }
    ServiceResponse::from_result(result)
}
