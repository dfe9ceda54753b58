//! Shared test utilities for database setup

#[cfg(test)]
pub mod test_db {
  use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema,
  };

  use crate::entity::*;

  /// Creates an in-memory SQLite database with all required tables
  pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let schema = Schema::new(DbBackend::Sqlite);

    // Create extension table
    let stmt = schema.create_table_from_entity(extension::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    // Create registrar table
    let stmt = schema.create_table_from_entity(registrar::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    // Create price table
    let stmt = schema.create_table_from_entity(price::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    // Create promo table
    let stmt = schema.create_table_from_entity(promo::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }
}

#[cfg(test)]
pub mod fixtures {
  use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

  use crate::{entity::*, prelude::DateTime};

  pub fn ts(secs: i64) -> DateTime {
    chrono::DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
  }

  pub async fn extension(
    db: &DatabaseConnection,
    name: &str,
  ) -> extension::Model {
    extension_at(db, name, ts(0)).await
  }

  pub async fn extension_at(
    db: &DatabaseConnection,
    name: &str,
    created_at: DateTime,
  ) -> extension::Model {
    extension::ActiveModel {
      name: Set(name.into()),
      status: Set(1),
      created_at: Set(created_at),
      updated_at: Set(created_at),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
  }

  pub async fn registrar(
    db: &DatabaseConnection,
    name: &str,
  ) -> registrar::Model {
    registrar_at(db, name, ts(0)).await
  }

  pub async fn registrar_at(
    db: &DatabaseConnection,
    name: &str,
    created_at: DateTime,
  ) -> registrar::Model {
    registrar::ActiveModel {
      name: Set(name.into()),
      status: Set(1),
      icann_fee: Set(0.18),
      created_at: Set(created_at),
      updated_at: Set(created_at),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
  }

  /// Renewal and transfer amounts are offset from the registration
  /// amount, keeping the three columns distinguishable.
  pub async fn price(
    db: &DatabaseConnection,
    registrar_id: i64,
    extension_id: i64,
    registration_price: f64,
    created_at: DateTime,
  ) -> price::Model {
    price::ActiveModel {
      registrar_id: Set(registrar_id),
      extension_id: Set(extension_id),
      registration_price: Set(registration_price),
      renewal_price: Set(registration_price + 4.0),
      transfer_price: Set(registration_price + 1.0),
      created_at: Set(created_at),
      updated_at: Set(created_at),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
  }

  pub async fn promo(
    db: &DatabaseConnection,
    registrar_id: i64,
    extension_id: i64,
    kind: PromoKind,
    price: f64,
  ) -> promo::Model {
    promo::ActiveModel {
      registrar_id: Set(registrar_id),
      extension_id: Set(extension_id),
      price: Set(price),
      kind: Set(kind),
      is_limited_time: Set(true),
      is_new_user_only: Set(false),
      code: Set(None),
      created_at: Set(ts(0)),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
  }
}
