use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{extension, registrar};

/// Which of the three price amounts a promotion discounts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum PromoKind {
  #[sea_orm(num_value = 0)]
  #[default]
  Registration,
  #[sea_orm(num_value = 1)]
  Renewal,
  #[sea_orm(num_value = 2)]
  Transfer,
}

/// A discount attached to a (registrar, extension) pair, not to a
/// particular price row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "promos")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i64,
  pub registrar_id: i64,
  pub extension_id: i64,
  pub price: f64,
  pub kind: PromoKind,
  pub is_limited_time: bool,
  pub is_new_user_only: bool,
  pub code: Option<String>,
  pub created_at: DateTime,
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
