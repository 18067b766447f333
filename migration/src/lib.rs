pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_dispatchers_table;
mod m20260301_000003_create_servers_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_dispatchers_table::Migration),
            Box::new(m20260301_000003_create_servers_table::Migration),
        ]
    }
}
