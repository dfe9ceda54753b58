use crate::{entity::extension, prelude::*};

pub struct Extension<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Extension<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Canonical extension names carry the leading dot; user input may
  /// omit it ("com" and ".com" address the same row).
  pub fn canonical(name: &str) -> String {
    let name = name.trim();
    if name.starts_with('.') { name.to_owned() } else { format!(".{name}") }
  }

  /// Exact-name lookup. A missing extension is a normal `None`, not an
  /// error.
  pub async fn by_name(&self, name: &str) -> Result<Option<extension::Model>> {
    let extension = extension::Entity::find()
      .filter(extension::Column::Name.eq(Self::canonical(name)))
      .one(self.db)
      .await?;

    Ok(extension)
  }

  /// Most recently added extensions, newest first.
  pub async fn latest(&self, limit: u64) -> Result<Vec<extension::Model>> {
    let extensions = extension::Entity::find()
      .order_by_desc(extension::Column::CreatedAt)
      .order_by_desc(extension::Column::Id)
      .limit(limit)
      .all(self.db)
      .await?;

    Ok(extensions)
  }
}
