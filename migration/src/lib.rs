pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_series_lists;
mod m20250302_000001_add_series_unique;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_series_lists::Migration),
            Box::new(m20250302_000001_add_series_unique::Migration),
        ]
    }
}
