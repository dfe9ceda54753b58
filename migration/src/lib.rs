pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_extensions;
mod m20260801_000002_create_registrars;
mod m20260801_000003_create_prices;
mod m20260801_000004_create_promos;
mod m20260801_000005_seed_registry;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260801_000001_create_extensions::Migration),
      Box::new(m20260801_000002_create_registrars::Migration),
      Box::new(m20260801_000003_create_prices::Migration),
      Box::new(m20260801_000004_create_promos::Migration),
      Box::new(m20260801_000005_seed_registry::Migration),
    ]
  }
}
