use sea_orm::entity::prelude::*;

/// A principal known to the authentication service.
///
/// Rows are written by the external login flow; the API only reads them to
/// verify that the user stored in a session still exists.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dispatcher::Entity")]
    Dispatcher,
    #[sea_orm(has_many = "super::server::Entity")]
    Server,
}

impl Related<super::dispatcher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dispatcher.def()
    }
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
