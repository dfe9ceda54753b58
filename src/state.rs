use migration::Migrator;

use crate::prelude::*;

pub struct AppState {
  pub db: DatabaseConnection,
}

impl AppState {
  pub async fn new(db_url: &str) -> anyhow::Result<Self> {
    let db = Database::connect(db_url).await?;
    Migrator::up(&db, None).await?;

    Ok(Self { db })
  }
}
