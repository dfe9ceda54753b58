use crate::{entity::registrar, prelude::*};

pub struct Registrar<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Registrar<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Resolves a display-name fragment to registrar ids. Matching is a
  /// case-insensitive substring match, the same resolution the listing
  /// and its count share.
  pub async fn ids_matching(&self, fragment: &str) -> Result<Vec<i64>> {
    let ids: Vec<i64> = registrar::Entity::find()
      .filter(registrar::Column::Name.contains(fragment))
      .select_only()
      .column(registrar::Column::Id)
      .into_tuple()
      .all(self.db)
      .await?;

    Ok(ids)
  }

  /// Most recently added registrars, newest first.
  pub async fn latest(&self, limit: u64) -> Result<Vec<registrar::Model>> {
    let registrars = registrar::Entity::find()
      .order_by_desc(registrar::Column::CreatedAt)
      .order_by_desc(registrar::Column::Id)
      .limit(limit)
      .all(self.db)
      .await?;

    Ok(registrars)
  }
}
