use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Registrars::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Registrars::Id)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(Registrars::Name)
              .text()
              .not_null()
              .unique_key(),
          )
          .col(ColumnDef::new(Registrars::Status).integer().not_null())
          .col(ColumnDef::new(Registrars::IcannFee).double().not_null())
          .col(ColumnDef::new(Registrars::CreatedAt).date_time().not_null())
          .col(ColumnDef::new(Registrars::UpdatedAt).date_time().not_null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Registrars::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Registrars {
  Table,
  Id,
  Name,
  Status,
  IcannFee,
  CreatedAt,
  UpdatedAt,
}
