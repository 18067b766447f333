//! Owner-scoped resource service.
//!
//! The only path from controllers to the resource store. Every method takes the
//! principal's ID and forwards it to the repository, so no operation can reach rows
//! owned by another user.

use sea_orm::{DatabaseConnection, IntoActiveModel};
use std::marker::PhantomData;

use crate::server::{
    data::resource::{ResourceEntity, ResourceRepository},
    error::AppError,
    model::resource::{CreateResourceParam, Resource, UpdateResourceParam},
};

pub struct ResourceService<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> ResourceService<'a, E>
where
    E: ResourceEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Default + Send,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Lists every resource owned by `user_id`.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Resource>, AppError> {
        let resources = ResourceRepository::<E>::new(self.db)
            .find_all(user_id)
            .await?;

        tracing::debug!(
            "Listed {} {} rows for user {}",
            resources.len(),
            E::KIND,
            user_id
        );

        Ok(resources)
    }

    /// Gets a resource owned by `user_id`.
    ///
    /// Returns None both when the ID does not exist and when it belongs to another user.
    pub async fn get(&self, id: i32, user_id: i32) -> Result<Option<Resource>, AppError> {
        let resource = ResourceRepository::<E>::new(self.db)
            .find_one(id, user_id)
            .await?;

        Ok(resource)
    }

    /// Creates a resource from validated parameters.
    pub async fn create(&self, param: CreateResourceParam) -> Result<Resource, AppError> {
        let resource = ResourceRepository::<E>::new(self.db).create(param).await?;

        tracing::debug!(
            "Created {} {} for user {}",
            E::KIND,
            resource.id,
            resource.user_id
        );

        Ok(resource)
    }

    /// Updates a resource owned by `param.user_id`.
    ///
    /// A missing or foreign row is not an error; the returned count is 0.
    pub async fn update(&self, param: UpdateResourceParam) -> Result<u64, AppError> {
        let (id, user_id) = (param.id, param.user_id);

        let rows = ResourceRepository::<E>::new(self.db).update(param).await?;

        tracing::debug!(
            "Updated {} {} for user {} ({} rows)",
            E::KIND,
            id,
            user_id,
            rows
        );

        Ok(rows)
    }

    /// Deletes a resource owned by `user_id`.
    ///
    /// A missing or foreign row is not an error; the returned count is 0.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<u64, AppError> {
        let rows = ResourceRepository::<E>::new(self.db)
            .delete(id, user_id)
            .await?;

        tracing::debug!(
            "Deleted {} {} for user {} ({} rows)",
            E::KIND,
            id,
            user_id,
            rows
        );

        Ok(rows)
    }
}
