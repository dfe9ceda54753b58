pub use std::{collections::HashMap, sync::Arc};

pub use chrono::{NaiveDateTime as DateTime, Utc};
pub use migration::MigratorTrait;
pub use sea_orm::{
  ColumnTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
  QueryFilter, QueryOrder, QuerySelect,
};
pub use tracing::{debug, error, info, trace, warn};

pub use crate::error::{Error, Result};
