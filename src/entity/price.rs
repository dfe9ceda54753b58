use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{extension, registrar};

/// One timestamped quotation for a (registrar, extension) pair. Rows are
/// never updated in place; a newer row supersedes the older ones, and the
/// pair's current price is the most recently created row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prices")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i64,
  pub registrar_id: i64,
  pub extension_id: i64,
  pub registration_price: f64,
  pub renewal_price: f64,
  pub transfer_price: f64,
  pub created_at: DateTime,
  pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "registrar::Entity",
    from = "Column::RegistrarId",
    to = "registrar::Column::Id"
  )]
  Registrar,
  #[sea_orm(
    belongs_to = "extension::Entity",
    from = "Column::ExtensionId",
    to = "extension::Column::Id"
  )]
  Extension,
}

impl Related<registrar::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Registrar.def()
  }
}

impl Related<extension::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Extension.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
