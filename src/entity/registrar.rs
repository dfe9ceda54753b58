use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{price, promo};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registrars")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i64,
  #[sea_orm(unique)]
  pub name: String,
  pub status: i32,
  pub icann_fee: f64,
  pub created_at: DateTime,
  pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "price::Entity")]
  Prices,
  #[sea_orm(has_many = "promo::Entity")]
  Promos,
}

impl Related<price::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Prices.def()
  }
}

impl Related<promo::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Promos.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
