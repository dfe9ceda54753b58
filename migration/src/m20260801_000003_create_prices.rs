use sea_orm_migration::prelude::*;

use super::{
  m20260801_000001_create_extensions::Extensions,
  m20260801_000002_create_registrars::Registrars,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Prices::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Prices::Id)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Prices::RegistrarId).big_integer().not_null())
          .col(ColumnDef::new(Prices::ExtensionId).big_integer().not_null())
          .col(
            ColumnDef::new(Prices::RegistrationPrice).double().not_null(),
          )
          .col(ColumnDef::new(Prices::RenewalPrice).double().not_null())
          .col(ColumnDef::new(Prices::TransferPrice).double().not_null())
          .col(ColumnDef::new(Prices::CreatedAt).date_time().not_null())
          .col(ColumnDef::new(Prices::UpdatedAt).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_prices_registrar")
              .from(Prices::Table, Prices::RegistrarId)
              .to(Registrars::Table, Registrars::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_prices_extension")
              .from(Prices::Table, Prices::ExtensionId)
              .to(Extensions::Table, Extensions::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_prices_pair")
          .table(Prices::Table)
          .col(Prices::RegistrarId)
          .col(Prices::ExtensionId)
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_prices_created_at")
          .table(Prices::Table)
          .col(Prices::CreatedAt)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Prices::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Prices {
  Table,
  Id,
  RegistrarId,
  ExtensionId,
  RegistrationPrice,
  RenewalPrice,
  TransferPrice,
  CreatedAt,
  UpdatedAt,
}
