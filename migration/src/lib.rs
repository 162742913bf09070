pub use sea_orm_migration::prelude::*;

mod m20240123_000001_create_poll_records;
mod m20240123_000002_create_purchase_tables;
mod m20240123_000003_create_view_records;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240123_000001_create_poll_records::Migration),
            Box::new(m20240123_000002_create_purchase_tables::Migration),
            Box::new(m20240123_000003_create_view_records::Migration),
        ]
    }
}
