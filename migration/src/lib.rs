pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_player_collection;
mod m20250101_000002_create_club_collection;
mod m20250101_000003_create_transferlisting_collection;
mod m20250101_000004_create_transferoffer_collection;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_player_collection::Migration),
            Box::new(m20250101_000002_create_club_collection::Migration),
            Box::new(m20250101_000003_create_transferlisting_collection::Migration),
            Box::new(m20250101_000004_create_transferoffer_collection::Migration),
        ]
    }
}
