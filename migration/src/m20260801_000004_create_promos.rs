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
          .table(Promos::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Promos::Id)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Promos::RegistrarId).big_integer().not_null())
          .col(ColumnDef::new(Promos::ExtensionId).big_integer().not_null())
          .col(ColumnDef::new(Promos::Price).double().not_null())
          .col(ColumnDef::new(Promos::Kind).integer().not_null())
          .col(ColumnDef::new(Promos::IsLimitedTime).boolean().not_null())
          .col(ColumnDef::new(Promos::IsNewUserOnly).boolean().not_null())
          .col(ColumnDef::new(Promos::Code).text().null())
          .col(ColumnDef::new(Promos::CreatedAt).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_promos_registrar")
              .from(Promos::Table, Promos::RegistrarId)
              .to(Registrars::Table, Registrars::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_promos_extension")
              .from(Promos::Table, Promos::ExtensionId)
              .to(Extensions::Table, Extensions::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_promos_pair")
          .table(Promos::Table)
          .col(Promos::RegistrarId)
          .col(Promos::ExtensionId)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Promos::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Promos {
  Table,
  Id,
  RegistrarId,
  ExtensionId,
  Price,
  Kind,
  IsLimitedTime,
  IsNewUserOnly,
  Code,
  CreatedAt,
}
