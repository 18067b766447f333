//! Owner-scoped resource repository.
//!
//! Provides the `ResourceRepository` used for both dispatchers and servers. The two
//! tables share a column layout, so the repository is generic over any SeaORM entity
//! implementing `ResourceEntity`. Every query filters on `user_id`; there is no method
//! that reads or writes a row without an owner.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use std::marker::PhantomData;

use crate::server::model::resource::{
    CreateResourceParam, Resource, ResourceKind, UpdateResourceParam,
};

/// Columns shared by every resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceColumn {
    Id,
    Name,
    Url,
    Token,
    UserId,
    CreatedAt,
    UpdatedAt,
}

/// A SeaORM entity whose table has the resource column layout.
pub trait ResourceEntity: EntityTrait + 'static {
    /// Kind of resource stored in the table.
    const KIND: ResourceKind;

    /// Maps a shared column to this entity's column type.
    fn column(column: ResourceColumn) -> Self::Column;

    /// Converts a row into the resource domain model.
    fn into_resource(model: Self::Model) -> Resource;
}

macro_rules! impl_resource_entity {
    ($($module:ident)::+, $kind:expr) => {
        impl ResourceEntity for $($module)::+::Entity {
            const KIND: ResourceKind = $kind;

            fn column(column: ResourceColumn) -> Self::Column {
                use $($module)::+::Column;

                match column {
                    ResourceColumn::Id => Column::Id,
                    ResourceColumn::Name => Column::Name,
                    ResourceColumn::Url => Column::Url,
                    ResourceColumn::Token => Column::Token,
                    ResourceColumn::UserId => Column::UserId,
                    ResourceColumn::CreatedAt => Column::CreatedAt,
                    ResourceColumn::UpdatedAt => Column::UpdatedAt,
                }
            }

            fn into_resource(model: Self::Model) -> Resource {
                Resource {
                    id: model.id,
                    name: model.name,
                    url: model.url,
                    token: model.token,
                    user_id: model.user_id,
                    created_at: model.created_at,
                    updated_at: model.updated_at,
                }
            }
        }
    };
}

impl_resource_entity!(entity::dispatcher, ResourceKind::Dispatcher);
impl_resource_entity!(entity::server, ResourceKind::Server);

/// Repository providing owner-scoped database operations for one resource kind.
pub struct ResourceRepository<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> ResourceRepository<'a, E>
where
    E: ResourceEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Default + Send,
{
    /// Creates a new ResourceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ResourceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Inserts a new resource owned by `param.user_id`.
    ///
    /// Both timestamps are set to the current time.
    ///
    /// # Arguments
    /// - `param` - Validated create parameters
    ///
    /// # Returns
    /// - `Ok(Resource)` - The created resource with its generated ID
    /// - `Err(DbErr)` - Database error during insert (e.g. owner does not exist)
    pub async fn create(&self, param: CreateResourceParam) -> Result<Resource, DbErr> {
        let now = Utc::now();

        let mut model = <E::ActiveModel as Default>::default();
        model.set(E::column(ResourceColumn::Name), param.name.into_inner().into());
        model.set(E::column(ResourceColumn::Url), param.url.into_inner().into());
        model.set(E::column(ResourceColumn::Token), param.token.into_inner().into());
        model.set(E::column(ResourceColumn::UserId), param.user_id.into());
        model.set(E::column(ResourceColumn::CreatedAt), now.into());
        model.set(E::column(ResourceColumn::UpdatedAt), now.into());

        let entity = E::insert(model).exec_with_returning(self.db).await?;

        Ok(E::into_resource(entity))
    }

    /// Gets every resource owned by a user, in insertion order.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Resource>)` - The user's resources; empty if they own none
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self, user_id: i32) -> Result<Vec<Resource>, DbErr> {
        let entities = E::find()
            .filter(E::column(ResourceColumn::UserId).eq(user_id))
            .order_by_asc(E::column(ResourceColumn::Id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(E::into_resource).collect())
    }

    /// Finds a resource by ID among the rows owned by a user.
    ///
    /// A resource that exists but belongs to another user is reported exactly like a
    /// missing one.
    ///
    /// # Arguments
    /// - `id` - ID of the resource
    /// - `user_id` - ID of the owning user
    ///
    /// # Returns
    /// - `Ok(Some(Resource))` - The resource exists and is owned by `user_id`
    /// - `Ok(None)` - No such resource for this owner
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_one(&self, id: i32, user_id: i32) -> Result<Option<Resource>, DbErr> {
        let entity = E::find()
            .filter(E::column(ResourceColumn::Id).eq(id))
            .filter(E::column(ResourceColumn::UserId).eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(E::into_resource))
    }

    /// Applies the supplied field changes to a resource owned by `param.user_id`.
    ///
    /// `updated_at` is refreshed on the matching row. Owner, ID and `created_at` are
    /// never written.
    ///
    /// # Arguments
    /// - `param` - Validated update parameters
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated; 0 when no row matches both ID and owner
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateResourceParam) -> Result<u64, DbErr> {
        let mut query = E::update_many()
            .col_expr(E::column(ResourceColumn::UpdatedAt), Expr::value(Utc::now()))
            .filter(E::column(ResourceColumn::Id).eq(param.id))
            .filter(E::column(ResourceColumn::UserId).eq(param.user_id));

        if let Some(name) = param.name {
            query = query.col_expr(E::column(ResourceColumn::Name), Expr::value(name.into_inner()));
        }
        if let Some(url) = param.url {
            query = query.col_expr(E::column(ResourceColumn::Url), Expr::value(url.into_inner()));
        }
        if let Some(token) = param.token {
            query = query.col_expr(
                E::column(ResourceColumn::Token),
                Expr::value(token.into_inner()),
            );
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes a resource owned by a user.
    ///
    /// # Arguments
    /// - `id` - ID of the resource
    /// - `user_id` - ID of the owning user
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted; 0 when no row matches both ID and owner
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = E::delete_many()
            .filter(E::column(ResourceColumn::Id).eq(id))
            .filter(E::column(ResourceColumn::UserId).eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
