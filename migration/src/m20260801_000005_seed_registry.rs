use sea_orm_migration::prelude::*;

use super::{
  m20260801_000001_create_extensions::Extensions,
  m20260801_000002_create_registrars::Registrars,
  m20260801_000003_create_prices::Prices,
};

const SEEDED_AT: &str = "2026-08-01 00:00:00";
const ICANN_FEE: f64 = 0.18;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    let extensions =
      [".com", ".net", ".org", ".io", ".co", ".ai"];

    let mut insert = Query::insert()
      .into_table(Extensions::Table)
      .columns([
        Extensions::Id,
        Extensions::Name,
        Extensions::Status,
        Extensions::CreatedAt,
        Extensions::UpdatedAt,
      ])
      .to_owned();
    for (id, name) in (1i64..).zip(extensions) {
      insert.values_panic([
        id.into(),
        name.into(),
        1.into(),
        SEEDED_AT.into(),
        SEEDED_AT.into(),
      ]);
    }
    manager.exec_stmt(insert).await?;

    let registrars =
      ["Namecheap", "GoDaddy", "Google Domains", "Cloudflare", "Name.com"];

    let mut insert = Query::insert()
      .into_table(Registrars::Table)
      .columns([
        Registrars::Id,
        Registrars::Name,
        Registrars::Status,
        Registrars::IcannFee,
        Registrars::CreatedAt,
        Registrars::UpdatedAt,
      ])
      .to_owned();
    for (id, name) in (1i64..).zip(registrars) {
      insert.values_panic([
        id.into(),
        name.into(),
        1.into(),
        ICANN_FEE.into(),
        SEEDED_AT.into(),
        SEEDED_AT.into(),
      ]);
    }
    manager.exec_stmt(insert).await?;

    // (registrar_id, extension_id, registration, renewal, transfer)
    let prices: [(i64, i64, f64, f64, f64); 15] = [
      (1, 1, 8.88, 13.98, 9.58),
      (2, 1, 11.99, 18.99, 7.99),
      (3, 1, 12.00, 12.00, 12.00),
      (4, 1, 9.77, 9.77, 9.77),
      (5, 1, 10.99, 12.99, 10.99),
      (1, 2, 9.98, 14.98, 10.58),
      (2, 2, 12.99, 19.99, 8.99),
      (3, 2, 12.00, 12.00, 12.00),
      (4, 2, 10.77, 10.77, 10.77),
      (5, 2, 11.99, 13.99, 11.99),
      (1, 3, 7.48, 14.98, 10.58),
      (2, 3, 9.99, 20.99, 8.99),
      (3, 3, 12.00, 12.00, 12.00),
      (4, 3, 8.77, 8.77, 8.77),
      (5, 3, 9.99, 14.99, 10.99),
    ];

    let mut insert = Query::insert()
      .into_table(Prices::Table)
      .columns([
        Prices::RegistrarId,
        Prices::ExtensionId,
        Prices::RegistrationPrice,
        Prices::RenewalPrice,
        Prices::TransferPrice,
        Prices::CreatedAt,
        Prices::UpdatedAt,
      ])
      .to_owned();
    for (registrar_id, extension_id, reg, renew, transfer) in prices {
      insert.values_panic([
        registrar_id.into(),
        extension_id.into(),
        reg.into(),
        renew.into(),
        transfer.into(),
        SEEDED_AT.into(),
        SEEDED_AT.into(),
      ]);
    }
    manager.exec_stmt(insert).await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .exec_stmt(Query::delete().from_table(Prices::Table).to_owned())
      .await?;
    manager
      .exec_stmt(Query::delete().from_table(Registrars::Table).to_owned())
      .await?;
    manager
      .exec_stmt(Query::delete().from_table(Extensions::Table).to_owned())
      .await
  }
}
