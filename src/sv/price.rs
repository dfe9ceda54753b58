use sea_orm::{FromQueryResult, Statement, Value};

use crate::{
  entity::{price, promo, registrar},
  prelude::*,
  sv,
};

pub struct Price<'a> {
  db: &'a DatabaseConnection,
}

/// Filter criteria for the current-price listing. Empty and missing
/// values mean "unfiltered"; a non-empty value that matches nothing
/// makes the whole result empty.
#[derive(Debug, Default, Clone)]
pub struct ListFilter {
  pub registrar: Option<String>,
  pub extension: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  page: u64,
  limit: u64,
}

impl Page {
  pub const MAX_LIMIT: u64 = 20;

  /// Out-of-range values are clamped, never rejected: page floors at 1,
  /// limit caps at [`Self::MAX_LIMIT`].
  pub fn new(page: u64, limit: u64) -> Self {
    Self { page: page.max(1), limit: limit.clamp(1, Self::MAX_LIMIT) }
  }

  pub fn page(&self) -> u64 {
    self.page
  }

  pub fn limit(&self) -> u64 {
    self.limit
  }

  fn offset(&self) -> u64 {
    (self.page - 1) * self.limit
  }
}

impl Default for Page {
  fn default() -> Self {
    Self::new(1, Self::MAX_LIMIT)
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  #[default]
  Registrar,
  Extension,
  Price,
}

impl SortKey {
  /// `tld` is accepted as an alias of `extension` for compatibility with
  /// the cheapest-extensions surface.
  pub fn parse(raw: &str) -> Option<Self> {
    match raw {
      "registrar" => Some(Self::Registrar),
      "extension" | "tld" => Some(Self::Extension),
      "price" => Some(Self::Price),
      _ => None,
    }
  }

  fn column(self) -> &'static str {
    match self {
      Self::Registrar => "r.name",
      Self::Extension => "t.name",
      Self::Price => "p.registration_price",
    }
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
  #[default]
  Asc,
  Desc,
}

impl SortOrder {
  pub fn parse(raw: &str) -> Option<Self> {
    match raw {
      "asc" => Some(Self::Asc),
      "desc" => Some(Self::Desc),
      _ => None,
    }
  }

  fn keyword(self) -> &'static str {
    match self {
      Self::Asc => "ASC",
      Self::Desc => "DESC",
    }
  }
}

/// The current price row of one (registrar, extension) pair, with the
/// display names already joined in.
#[derive(Debug, Clone, FromQueryResult)]
pub struct CurrentPrice {
  pub id: i64,
  pub registrar_id: i64,
  pub extension_id: i64,
  pub registrar: String,
  pub extension: String,
  pub registration_price: f64,
  pub renewal_price: f64,
  pub transfer_price: f64,
  pub created_at: DateTime,
}

#[derive(Debug, Clone)]
pub struct PricedRow {
  pub price: CurrentPrice,
  pub promos: Vec<promo::Model>,
}

#[derive(Debug, Default)]
pub struct Listing {
  pub rows: Vec<PricedRow>,
  pub total: u64,
}

#[derive(Debug, Default)]
pub struct CheapestListing {
  pub rows: Vec<CurrentPrice>,
  pub total: u64,
}

#[derive(FromQueryResult)]
struct CountRow {
  total: i64,
}

fn placeholders(n: usize) -> String {
  vec!["?"; n].join(", ")
}

impl<'a> Price<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Current-price listing: one row per (registrar, extension) pair, the
  /// most recently created row winning (ties broken by highest id). The
  /// reduction runs as a single ranking query, never per-row lookups.
  pub async fn list(
    &self,
    filter: &ListFilter,
    page: Page,
    key: SortKey,
    order: SortOrder,
  ) -> Result<Listing> {
    let registrar_ids = match filter.registrar.as_deref().map(str::trim) {
      Some(fragment) if !fragment.is_empty() => {
        let ids = sv::Registrar::new(self.db).ids_matching(fragment).await?;
        if ids.is_empty() {
          return Ok(Listing::default());
        }
        Some(ids)
      }
      _ => None,
    };

    let extension_id = match filter.extension.as_deref().map(str::trim) {
      Some(name) if !name.is_empty() => {
        match sv::Extension::new(self.db).by_name(name).await? {
          Some(extension) => Some(extension.id),
          None => return Ok(Listing::default()),
        }
      }
      _ => None,
    };

    let mut clauses = Vec::new();
    let mut values: Vec<Value> = Vec::new();
    if let Some(ids) = &registrar_ids {
      clauses.push(format!("registrar_id IN ({})", placeholders(ids.len())));
      values.extend(ids.iter().map(|id| Value::from(*id)));
    }
    if let Some(id) = extension_id {
      clauses.push("extension_id = ?".to_owned());
      values.push(Value::from(id));
    }
    let filter_sql = if clauses.is_empty() {
      String::new()
    } else {
      format!("WHERE {}", clauses.join(" AND "))
    };

    let total = self.count_pairs(&filter_sql, values.clone()).await?;

    let sql = format!(
      "SELECT p.id, p.registrar_id, p.extension_id, \
              p.registration_price, p.renewal_price, p.transfer_price, \
              p.created_at, r.name AS registrar, t.name AS extension \
       FROM ( \
         SELECT *, ROW_NUMBER() OVER ( \
           PARTITION BY registrar_id, extension_id \
           ORDER BY created_at DESC, id DESC \
         ) AS rn \
         FROM prices {filter_sql} \
       ) p \
       JOIN registrars r ON p.registrar_id = r.id \
       JOIN extensions t ON p.extension_id = t.id \
       WHERE p.rn = 1 \
       ORDER BY {sort} {order}, p.id ASC \
       LIMIT ? OFFSET ?",
      sort = key.column(),
      order = order.keyword(),
    );

    values.push(Value::from(page.limit() as i64));
    values.push(Value::from(page.offset() as i64));

    let rows = CurrentPrice::find_by_statement(Statement::from_sql_and_values(
      self.db.get_database_backend(),
      sql,
      values,
    ))
    .all(self.db)
    .await?;

    let rows = self.attach_promos(rows).await?;
    Ok(Listing { rows, total })
  }

  /// Cheapest row per extension: a different reduction than [`list`],
  /// grouped by extension alone and ranked by registration price (ties
  /// broken by lowest id), independent of recency.
  ///
  /// [`list`]: Self::list
  pub async fn cheapest(
    &self,
    extension_contains: Option<&str>,
    page: Page,
    key: SortKey,
    order: SortOrder,
  ) -> Result<CheapestListing> {
    let fragment = extension_contains.map(str::trim).filter(|s| !s.is_empty());

    let (name_sql, values) = match fragment {
      Some(fragment) => {
        ("AND t.name LIKE ?", vec![Value::from(format!("%{fragment}%"))])
      }
      None => ("", Vec::new()),
    };

    let count_sql = format!(
      "SELECT COUNT(DISTINCT pr.extension_id) AS total \
       FROM prices pr \
       JOIN extensions t ON pr.extension_id = t.id \
       WHERE 1 = 1 {name_sql}"
    );
    let total = self.count(count_sql, values.clone()).await?;

    let sql = format!(
      "SELECT p.id, p.registrar_id, p.extension_id, \
              p.registration_price, p.renewal_price, p.transfer_price, \
              p.created_at, r.name AS registrar, t.name AS extension \
       FROM ( \
         SELECT *, ROW_NUMBER() OVER ( \
           PARTITION BY extension_id \
           ORDER BY registration_price ASC, id ASC \
         ) AS rn \
         FROM prices \
       ) p \
       JOIN registrars r ON p.registrar_id = r.id \
       JOIN extensions t ON p.extension_id = t.id \
       WHERE p.rn = 1 {name_sql} \
       ORDER BY {sort} {order}, p.id ASC \
       LIMIT ? OFFSET ?",
      sort = key.column(),
      order = order.keyword(),
    );

    let mut values = values;
    values.push(Value::from(page.limit() as i64));
    values.push(Value::from(page.offset() as i64));

    let rows = CurrentPrice::find_by_statement(Statement::from_sql_and_values(
      self.db.get_database_backend(),
      sql,
      values,
    ))
    .all(self.db)
    .await?;

    Ok(CheapestListing { rows, total })
  }

  /// Full price history of one extension (no de-duplication), joined with
  /// the registrar rows, newest first.
  pub async fn history(
    &self,
    extension_id: i64,
  ) -> Result<Vec<(price::Model, Option<registrar::Model>)>> {
    let rows = price::Entity::find()
      .filter(price::Column::ExtensionId.eq(extension_id))
      .find_also_related(registrar::Entity)
      .order_by_desc(price::Column::CreatedAt)
      .order_by_desc(price::Column::Id)
      .all(self.db)
      .await?;

    Ok(rows)
  }

  /// Distinct (registrar, extension) pairs passing the filter, computed
  /// over the same bound filter as the page query.
  async fn count_pairs(
    &self,
    filter_sql: &str,
    values: Vec<Value>,
  ) -> Result<u64> {
    let sql = format!(
      "SELECT COUNT(*) AS total FROM ( \
         SELECT registrar_id, extension_id FROM prices {filter_sql} \
         GROUP BY registrar_id, extension_id \
       )"
    );
    self.count(sql, values).await
  }

  async fn count(&self, sql: String, values: Vec<Value>) -> Result<u64> {
    let row = CountRow::find_by_statement(Statement::from_sql_and_values(
      self.db.get_database_backend(),
      sql,
      values,
    ))
    .one(self.db)
    .await?;

    let row = row
      .ok_or_else(|| Error::Internal("count query returned no rows".into()))?;
    Ok(row.total as u64)
  }

  /// One promotions query for the whole page, grouped back onto each
  /// row's (registrar, extension) pair. Promotions are matched by pair,
  /// never by price-row id.
  async fn attach_promos(
    &self,
    rows: Vec<CurrentPrice>,
  ) -> Result<Vec<PricedRow>> {
    if rows.is_empty() {
      return Ok(Vec::new());
    }

    let registrar_ids: Vec<i64> = rows.iter().map(|r| r.registrar_id).collect();
    let extension_ids: Vec<i64> = rows.iter().map(|r| r.extension_id).collect();

    let promos = promo::Entity::find()
      .filter(promo::Column::RegistrarId.is_in(registrar_ids))
      .filter(promo::Column::ExtensionId.is_in(extension_ids))
      .order_by_asc(promo::Column::Kind)
      .order_by_desc(promo::Column::CreatedAt)
      .order_by_asc(promo::Column::Id)
      .all(self.db)
      .await?;

    let mut by_pair: HashMap<(i64, i64), Vec<promo::Model>> = HashMap::new();
    for promo in promos {
      by_pair
        .entry((promo.registrar_id, promo.extension_id))
        .or_default()
        .push(promo);
    }

    Ok(
      rows
        .into_iter()
        .map(|price| PricedRow {
          promos: by_pair
            .remove(&(price.registrar_id, price.extension_id))
            .unwrap_or_default(),
          price,
        })
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    entity::PromoKind,
    sv::test_utils::{fixtures, test_db},
  };

  fn all() -> (ListFilter, Page, SortKey, SortOrder) {
    (ListFilter::default(), Page::default(), SortKey::Registrar, SortOrder::Asc)
  }

  #[test]
  fn page_clamps_out_of_range_values() {
    let page = Page::new(0, 100);
    assert_eq!(page.page(), 1);
    assert_eq!(page.limit(), 20);

    let page = Page::new(3, 0);
    assert_eq!(page.page(), 3);
    assert_eq!(page.limit(), 1);
  }

  #[test]
  fn sort_params_parse_with_tld_alias() {
    assert_eq!(SortKey::parse("registrar"), Some(SortKey::Registrar));
    assert_eq!(SortKey::parse("tld"), Some(SortKey::Extension));
    assert_eq!(SortKey::parse("extension"), Some(SortKey::Extension));
    assert_eq!(SortKey::parse("promo"), None);
    assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
    assert_eq!(SortOrder::parse("DESC"), None);
  }

  #[tokio::test]
  async fn latest_row_wins_for_a_pair() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let reg = fixtures::registrar(&db, "Namecheap").await;
    fixtures::price(&db, reg.id, com.id, 10.49, fixtures::ts(1_000)).await;
    let newer =
      fixtures::price(&db, reg.id, com.id, 8.88, fixtures::ts(2_000)).await;

    let (filter, page, key, order) = all();
    let listing =
      Price::new(&db).list(&filter, page, key, order).await.unwrap();

    assert_eq!(listing.total, 1);
    assert_eq!(listing.rows.len(), 1);
    assert_eq!(listing.rows[0].price.id, newer.id);
    assert_eq!(listing.rows[0].price.registration_price, 8.88);
  }

  #[tokio::test]
  async fn created_at_ties_break_by_highest_id() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let reg = fixtures::registrar(&db, "Namecheap").await;
    let ts = fixtures::ts(1_000);
    fixtures::price(&db, reg.id, com.id, 10.49, ts).await;
    let last = fixtures::price(&db, reg.id, com.id, 9.49, ts).await;

    let (filter, page, key, order) = all();
    let listing =
      Price::new(&db).list(&filter, page, key, order).await.unwrap();

    assert_eq!(listing.rows.len(), 1);
    assert_eq!(listing.rows[0].price.id, last.id);
  }

  #[tokio::test]
  async fn total_counts_distinct_pairs_not_history_rows() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let net = fixtures::extension(&db, ".net").await;
    let cheap = fixtures::registrar(&db, "Namecheap").await;
    let daddy = fixtures::registrar(&db, "GoDaddy").await;

    for n in 0..3 {
      fixtures::price(&db, cheap.id, com.id, 8.88, fixtures::ts(n)).await;
    }
    fixtures::price(&db, cheap.id, net.id, 9.98, fixtures::ts(0)).await;
    fixtures::price(&db, daddy.id, com.id, 11.99, fixtures::ts(0)).await;
    fixtures::price(&db, daddy.id, net.id, 12.99, fixtures::ts(0)).await;

    let (filter, page, key, order) = all();
    let listing =
      Price::new(&db).list(&filter, page, key, order).await.unwrap();

    assert_eq!(listing.total, 4);
    assert_eq!(listing.rows.len(), 4);
  }

  #[tokio::test]
  async fn registrar_filter_narrows_by_substring() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let cheap = fixtures::registrar(&db, "Namecheap").await;
    let daddy = fixtures::registrar(&db, "GoDaddy").await;
    fixtures::price(&db, cheap.id, com.id, 8.88, fixtures::ts(0)).await;
    fixtures::price(&db, daddy.id, com.id, 11.99, fixtures::ts(0)).await;

    let filter =
      ListFilter { registrar: Some("cheap".into()), extension: None };
    let listing = Price::new(&db)
      .list(&filter, Page::default(), SortKey::Registrar, SortOrder::Asc)
      .await
      .unwrap();

    assert_eq!(listing.total, 1);
    assert_eq!(listing.rows[0].price.registrar, "Namecheap");
  }

  #[tokio::test]
  async fn unmatched_filters_yield_empty_not_unfiltered() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let cheap = fixtures::registrar(&db, "Namecheap").await;
    fixtures::price(&db, cheap.id, com.id, 8.88, fixtures::ts(0)).await;

    let sv = Price::new(&db);

    let filter =
      ListFilter { registrar: Some("porkbun".into()), extension: None };
    let listing = sv
      .list(&filter, Page::default(), SortKey::Registrar, SortOrder::Asc)
      .await
      .unwrap();
    assert_eq!(listing.total, 0);
    assert!(listing.rows.is_empty());

    let filter = ListFilter { registrar: None, extension: Some("dev".into()) };
    let listing = sv
      .list(&filter, Page::default(), SortKey::Registrar, SortOrder::Asc)
      .await
      .unwrap();
    assert_eq!(listing.total, 0);
    assert!(listing.rows.is_empty());
  }

  #[tokio::test]
  async fn extension_filter_accepts_undotted_names() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let net = fixtures::extension(&db, ".net").await;
    let cheap = fixtures::registrar(&db, "Namecheap").await;
    fixtures::price(&db, cheap.id, com.id, 8.88, fixtures::ts(0)).await;
    fixtures::price(&db, cheap.id, net.id, 9.98, fixtures::ts(0)).await;

    let filter = ListFilter { registrar: None, extension: Some("com".into()) };
    let listing = Price::new(&db)
      .list(&filter, Page::default(), SortKey::Registrar, SortOrder::Asc)
      .await
      .unwrap();

    assert_eq!(listing.total, 1);
    assert_eq!(listing.rows[0].price.extension, ".com");
  }

  #[tokio::test]
  async fn pages_partition_the_sorted_listing() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    for n in 0..5 {
      let reg = fixtures::registrar(&db, &format!("Registrar {n}")).await;
      fixtures::price(&db, reg.id, com.id, 8.0 + n as f64, fixtures::ts(0))
        .await;
    }

    let sv = Price::new(&db);
    let filter = ListFilter::default();

    let full = sv
      .list(&filter, Page::default(), SortKey::Price, SortOrder::Asc)
      .await
      .unwrap();
    assert_eq!(full.total, 5);

    let mut paged = Vec::new();
    for page in 1..=3 {
      let listing = sv
        .list(&filter, Page::new(page, 2), SortKey::Price, SortOrder::Asc)
        .await
        .unwrap();
      assert_eq!(listing.total, 5);
      paged.extend(listing.rows);
    }

    let full_ids: Vec<i64> = full.rows.iter().map(|r| r.price.id).collect();
    let paged_ids: Vec<i64> = paged.iter().map(|r| r.price.id).collect();
    assert_eq!(paged_ids, full_ids);
  }

  #[tokio::test]
  async fn price_sort_is_a_total_order() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    for (n, amount) in [11.99, 8.88, 9.77, 12.00, 10.99].into_iter().enumerate()
    {
      let reg = fixtures::registrar(&db, &format!("Registrar {n}")).await;
      fixtures::price(&db, reg.id, com.id, amount, fixtures::ts(0)).await;
    }

    let sv = Price::new(&db);
    let filter = ListFilter::default();

    let asc = sv
      .list(&filter, Page::default(), SortKey::Price, SortOrder::Asc)
      .await
      .unwrap();
    assert!(asc.rows.windows(2).all(|w| {
      w[0].price.registration_price <= w[1].price.registration_price
    }));
    assert_eq!(asc.rows[0].price.registration_price, 8.88);

    let desc = sv
      .list(&filter, Page::default(), SortKey::Price, SortOrder::Desc)
      .await
      .unwrap();
    assert!(desc.rows.windows(2).all(|w| {
      w[0].price.registration_price >= w[1].price.registration_price
    }));
  }

  #[tokio::test]
  async fn promos_attach_to_their_pair_only() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let cheap = fixtures::registrar(&db, "Namecheap").await;
    let daddy = fixtures::registrar(&db, "GoDaddy").await;
    fixtures::price(&db, cheap.id, com.id, 8.88, fixtures::ts(0)).await;
    fixtures::price(&db, daddy.id, com.id, 11.99, fixtures::ts(0)).await;

    let promo =
      fixtures::promo(&db, cheap.id, com.id, PromoKind::Registration, 5.98)
        .await;

    let (filter, page, _, order) = all();
    let listing =
      Price::new(&db).list(&filter, page, SortKey::Registrar, order).await.unwrap();

    let daddy_row =
      listing.rows.iter().find(|r| r.price.registrar == "GoDaddy").unwrap();
    assert!(daddy_row.promos.is_empty());

    let cheap_row =
      listing.rows.iter().find(|r| r.price.registrar == "Namecheap").unwrap();
    assert_eq!(cheap_row.promos.len(), 1);
    assert_eq!(cheap_row.promos[0].id, promo.id);
    assert_eq!(cheap_row.promos[0].kind, PromoKind::Registration);
    assert_eq!(cheap_row.promos[0].price, 5.98);
  }

  #[tokio::test]
  async fn promos_follow_the_pair_across_history_rows() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let cheap = fixtures::registrar(&db, "Namecheap").await;
    fixtures::price(&db, cheap.id, com.id, 10.49, fixtures::ts(1_000)).await;
    fixtures::price(&db, cheap.id, com.id, 8.88, fixtures::ts(2_000)).await;
    fixtures::promo(&db, cheap.id, com.id, PromoKind::Renewal, 9.98).await;

    let (filter, page, key, order) = all();
    let listing =
      Price::new(&db).list(&filter, page, key, order).await.unwrap();

    // The promotion is bound to the pair, so it rides on whichever row is
    // current.
    assert_eq!(listing.rows.len(), 1);
    assert_eq!(listing.rows[0].price.registration_price, 8.88);
    assert_eq!(listing.rows[0].promos.len(), 1);
  }

  #[tokio::test]
  async fn cheapest_picks_minimum_registration_price() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    for (name, amount) in
      [("Namecheap", 8.88), ("GoDaddy", 11.99), ("Cloudflare", 9.77)]
    {
      let reg = fixtures::registrar(&db, name).await;
      fixtures::price(&db, reg.id, com.id, amount, fixtures::ts(0)).await;
    }

    let listing = Price::new(&db)
      .cheapest(None, Page::default(), SortKey::Extension, SortOrder::Asc)
      .await
      .unwrap();

    assert_eq!(listing.total, 1);
    assert_eq!(listing.rows.len(), 1);
    assert_eq!(listing.rows[0].registrar, "Namecheap");
    assert_eq!(listing.rows[0].registration_price, 8.88);
  }

  #[tokio::test]
  async fn cheapest_reduces_per_extension_not_per_pair() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let net = fixtures::extension(&db, ".net").await;
    let cheap = fixtures::registrar(&db, "Namecheap").await;
    let daddy = fixtures::registrar(&db, "GoDaddy").await;
    fixtures::price(&db, cheap.id, com.id, 8.88, fixtures::ts(0)).await;
    fixtures::price(&db, daddy.id, com.id, 11.99, fixtures::ts(0)).await;
    fixtures::price(&db, cheap.id, net.id, 9.98, fixtures::ts(0)).await;
    fixtures::price(&db, daddy.id, net.id, 7.99, fixtures::ts(0)).await;

    let listing = Price::new(&db)
      .cheapest(None, Page::default(), SortKey::Extension, SortOrder::Asc)
      .await
      .unwrap();

    assert_eq!(listing.total, 2);
    let by_extension: Vec<(&str, &str)> = listing
      .rows
      .iter()
      .map(|r| (r.extension.as_str(), r.registrar.as_str()))
      .collect();
    assert_eq!(
      by_extension,
      vec![(".com", "Namecheap"), (".net", "GoDaddy")]
    );
  }

  #[tokio::test]
  async fn cheapest_filters_by_name_fragment() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let net = fixtures::extension(&db, ".net").await;
    let cheap = fixtures::registrar(&db, "Namecheap").await;
    fixtures::price(&db, cheap.id, com.id, 8.88, fixtures::ts(0)).await;
    fixtures::price(&db, cheap.id, net.id, 9.98, fixtures::ts(0)).await;

    let listing = Price::new(&db)
      .cheapest(Some("net"), Page::default(), SortKey::Extension, SortOrder::Asc)
      .await
      .unwrap();

    assert_eq!(listing.total, 1);
    assert_eq!(listing.rows[0].extension, ".net");
  }

  #[tokio::test]
  async fn history_keeps_every_row_newest_first() {
    let db = test_db::setup().await;
    let com = fixtures::extension(&db, ".com").await;
    let cheap = fixtures::registrar(&db, "Namecheap").await;
    fixtures::price(&db, cheap.id, com.id, 10.49, fixtures::ts(1_000)).await;
    fixtures::price(&db, cheap.id, com.id, 8.88, fixtures::ts(2_000)).await;

    let history = Price::new(&db).history(com.id).await.unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].0.registration_price, 8.88);
    assert_eq!(history[1].0.registration_price, 10.49);
    assert_eq!(
      history[0].1.as_ref().map(|r| r.name.as_str()),
      Some("Namecheap")
    );
  }
}
