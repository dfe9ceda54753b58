use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Extensions::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Extensions::Id)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(Extensions::Name)
              .text()
              .not_null()
              .unique_key(),
          )
          .col(ColumnDef::new(Extensions::Status).integer().not_null())
          .col(ColumnDef::new(Extensions::CreatedAt).date_time().not_null())
          .col(ColumnDef::new(Extensions::UpdatedAt).date_time().not_null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Extensions::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Extensions {
  Table,
  Id,
  Name,
  Status,
  CreatedAt,
  UpdatedAt,
}
