use axum::{
  Json,
  extract::{Query, State},
  response::{IntoResponse, Response},
};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::{
  entity::{extension, price, promo, registrar},
  prelude::*,
  state::AppState,
  sv,
  sv::price::{CurrentPrice, ListFilter, Page, PricedRow, SortKey, SortOrder},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesQuery {
  pub registrar: Option<String>,
  pub extension: Option<String>,
  pub page: Option<String>,
  pub limit: Option<String>,
  pub sort_by: Option<String>,
  pub sort_order: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheapestQuery {
  pub extension_name: Option<String>,
  pub page: Option<String>,
  pub limit: Option<String>,
  pub sort_by: Option<String>,
  pub sort_order: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtensionsQuery {
  pub name: Option<String>,
}

/// Pagination values are clamped, never rejected; anything unparsable
/// falls back to the defaults.
fn parse_page(page: Option<&str>, limit: Option<&str>) -> Page {
  let page = page.and_then(|raw| raw.parse().ok()).unwrap_or(1);
  let limit =
    limit.and_then(|raw| raw.parse().ok()).unwrap_or(Page::MAX_LIMIT);
  Page::new(page, limit)
}

fn parse_sort(
  sort_by: Option<&str>,
  sort_order: Option<&str>,
  default_key: SortKey,
) -> (SortKey, SortOrder) {
  let key = sort_by.and_then(SortKey::parse).unwrap_or(default_key);
  let order = sort_order.and_then(SortOrder::parse).unwrap_or(SortOrder::Asc);
  (key, order)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
  pub page: u64,
  pub limit: u64,
  pub total_count: u64,
  pub total_pages: u64,
  pub has_next: bool,
  pub has_prev: bool,
}

impl Pagination {
  fn new(page: Page, total: u64) -> Self {
    let total_pages = total.div_ceil(page.limit());
    Self {
      page: page.page(),
      limit: page.limit(),
      total_count: total,
      total_pages,
      has_next: page.page() < total_pages,
      has_prev: page.page() > 1,
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoRecord {
  pub id: i64,
  pub code: Option<String>,
  pub price: f64,
  #[serde(rename = "type")]
  pub kind: i32,
  pub is_limited: bool,
  pub is_only_for_new_user: bool,
  pub created_at: DateTime,
}

impl From<promo::Model> for PromoRecord {
  fn from(promo: promo::Model) -> Self {
    Self {
      id: promo.id,
      code: promo.code,
      price: promo.price,
      kind: promo.kind.to_value(),
      is_limited: promo.is_limited_time,
      is_only_for_new_user: promo.is_new_user_only,
      created_at: promo.created_at,
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
  pub id: i64,
  pub registrar: String,
  pub extension: String,
  pub registration_price: f64,
  pub renewal_price: f64,
  pub transfer_price: f64,
  pub currency: &'static str,
  pub promos: Vec<PromoRecord>,
}

impl From<PricedRow> for PriceRecord {
  fn from(row: PricedRow) -> Self {
    Self {
      id: row.price.id,
      registrar: row.price.registrar,
      extension: row.price.extension,
      registration_price: row.price.registration_price,
      renewal_price: row.price.renewal_price,
      transfer_price: row.price.transfer_price,
      currency: "USD",
      promos: row.promos.into_iter().map(PromoRecord::from).collect(),
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheapestRecord {
  pub id: i64,
  pub registrar: String,
  pub extension: String,
  pub registration_price: f64,
  pub renewal_price: f64,
  pub transfer_price: f64,
  pub currency: &'static str,
  pub created_at: DateTime,
}

impl From<CurrentPrice> for CheapestRecord {
  fn from(row: CurrentPrice) -> Self {
    Self {
      id: row.id,
      registrar: row.registrar,
      extension: row.extension,
      registration_price: row.registration_price,
      renewal_price: row.renewal_price,
      transfer_price: row.transfer_price,
      currency: "USD",
      created_at: row.created_at,
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionRecord {
  pub id: i64,
  pub name: String,
  pub created_at: DateTime,
  pub updated_at: DateTime,
}

impl From<extension::Model> for ExtensionRecord {
  fn from(extension: extension::Model) -> Self {
    Self {
      id: extension.id,
      name: extension.name,
      created_at: extension.created_at,
      updated_at: extension.updated_at,
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarRecord {
  pub id: i64,
  pub name: String,
  pub status: i32,
  pub icann_fee: f64,
  pub created_at: DateTime,
  pub updated_at: DateTime,
}

impl From<registrar::Model> for RegistrarRecord {
  fn from(registrar: registrar::Model) -> Self {
    Self {
      id: registrar.id,
      name: registrar.name,
      status: registrar.status,
      icann_fee: registrar.icann_fee,
      created_at: registrar.created_at,
      updated_at: registrar.updated_at,
    }
  }
}

/// One row of an extension's full price history, registrar name joined in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
  pub id: i64,
  pub registrar_id: i64,
  pub extension_id: i64,
  pub registration_price: f64,
  pub renewal_price: f64,
  pub transfer_price: f64,
  pub currency: &'static str,
  pub registrar: String,
  pub created_at: DateTime,
}

impl From<(price::Model, Option<registrar::Model>)> for HistoryRecord {
  fn from(
    (price, registrar): (price::Model, Option<registrar::Model>),
  ) -> Self {
    Self {
      id: price.id,
      registrar_id: price.registrar_id,
      extension_id: price.extension_id,
      registration_price: price.registration_price,
      renewal_price: price.renewal_price,
      transfer_price: price.transfer_price,
      currency: "USD",
      registrar: registrar.map(|r| r.name).unwrap_or_else(|| "Unknown".into()),
      created_at: price.created_at,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct FilterEcho {
  pub registrar: Option<String>,
  pub extension: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PricesResponse {
  pub prices: Vec<PriceRecord>,
  pub pagination: Pagination,
  pub filters: FilterEcho,
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheapestResponse {
  pub prices: Vec<CheapestRecord>,
  pub pagination: Pagination,
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LatestExtensionsResponse {
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub extensions: Vec<ExtensionRecord>,
  #[serde(rename = "totalResults")]
  pub total_results: usize,
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ExtensionDetailResponse {
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub extension: Option<ExtensionRecord>,
  pub prices: Vec<HistoryRecord>,
  #[serde(rename = "totalResults")]
  pub total_results: usize,
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LatestRegistrarsResponse {
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub registrars: Vec<RegistrarRecord>,
  #[serde(rename = "totalResults")]
  pub total_results: usize,
  pub message: String,
}

/// `GET /prices`: current price per (registrar, extension) pair with
/// promotions, filtered, sorted and paginated.
pub async fn prices(
  State(app): State<Arc<AppState>>,
  Query(query): Query<PricesQuery>,
) -> Result<Json<PricesResponse>> {
  let page = parse_page(query.page.as_deref(), query.limit.as_deref());
  let (key, order) = parse_sort(
    query.sort_by.as_deref(),
    query.sort_order.as_deref(),
    SortKey::Registrar,
  );

  let filter = ListFilter {
    registrar: query.registrar.clone(),
    extension: query.extension.clone(),
  };
  let listing = sv::Price::new(&app.db).list(&filter, page, key, order).await?;

  let pagination = Pagination::new(page, listing.total);
  let message = format!(
    "Found {} price records (page {} of {})",
    listing.rows.len(),
    pagination.page,
    pagination.total_pages,
  );

  Ok(Json(PricesResponse {
    prices: listing.rows.into_iter().map(PriceRecord::from).collect(),
    pagination,
    filters: FilterEcho {
      registrar: query.registrar,
      extension: query.extension,
    },
    message,
  }))
}

/// `GET /cheapest-extensions`: the single cheapest registrar per
/// extension.
pub async fn cheapest_extensions(
  State(app): State<Arc<AppState>>,
  Query(query): Query<CheapestQuery>,
) -> Result<Json<CheapestResponse>> {
  let page = parse_page(query.page.as_deref(), query.limit.as_deref());
  let (key, order) = parse_sort(
    query.sort_by.as_deref(),
    query.sort_order.as_deref(),
    SortKey::Extension,
  );

  let listing = sv::Price::new(&app.db)
    .cheapest(query.extension_name.as_deref(), page, key, order)
    .await?;

  let pagination = Pagination::new(page, listing.total);
  let message = format!(
    "Found {} cheapest extension records (page {} of {})",
    listing.rows.len(),
    pagination.page,
    pagination.total_pages,
  );

  Ok(Json(CheapestResponse {
    prices: listing.rows.into_iter().map(CheapestRecord::from).collect(),
    pagination,
    message,
  }))
}

/// `GET /extensions`: latest extensions without a name, otherwise one
/// extension with its full price history. A missing extension is a
/// normal empty payload, not an error.
pub async fn extensions(
  State(app): State<Arc<AppState>>,
  Query(query): Query<ExtensionsQuery>,
) -> Result<Response> {
  let name = query.name.as_deref().map(str::trim).filter(|s| !s.is_empty());

  let Some(name) = name else {
    let latest = sv::Extension::new(&app.db).latest(20).await?;
    let response = LatestExtensionsResponse {
      kind: "extensions",
      total_results: latest.len(),
      extensions: latest.into_iter().map(ExtensionRecord::from).collect(),
      message: "Latest extensions".into(),
    };
    return Ok(Json(response).into_response());
  };

  let Some(found) = sv::Extension::new(&app.db).by_name(name).await? else {
    let response = ExtensionDetailResponse {
      kind: "extension",
      extension: None,
      prices: Vec::new(),
      total_results: 0,
      message: "Extension not found".into(),
    };
    return Ok(Json(response).into_response());
  };

  let history = sv::Price::new(&app.db).history(found.id).await?;
  let prices: Vec<HistoryRecord> =
    history.into_iter().map(HistoryRecord::from).collect();

  let response = ExtensionDetailResponse {
    kind: "extension",
    extension: Some(ExtensionRecord::from(found)),
    total_results: prices.len(),
    prices,
    message: "Extension found".into(),
  };
  Ok(Json(response).into_response())
}

/// `GET /registrars`: most recently added registrars.
pub async fn registrars(
  State(app): State<Arc<AppState>>,
) -> Result<Json<LatestRegistrarsResponse>> {
  let latest = sv::Registrar::new(&app.db).latest(20).await?;

  Ok(Json(LatestRegistrarsResponse {
    kind: "registrars",
    total_results: latest.len(),
    registrars: latest.into_iter().map(RegistrarRecord::from).collect(),
    message: "Latest registrars".into(),
  }))
}

pub async fn health() -> Json<json::Value> {
  Json(json::json!({ "status": "ok" }))
}
