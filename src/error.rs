use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A missing extension or registrar is a normal empty result, and bad
/// pagination values are clamped, so the only failures that surface as
/// errors are store failures.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Db(#[from] sea_orm::DbErr),
  #[error("{0}")]
  Internal(String),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let message = match &self {
      Error::Db(err) => {
        error!("store failure: {err}");
        "Error fetching pricing data"
      }
      Error::Internal(msg) => {
        error!("internal error: {msg}");
        "Internal server error"
      }
    };

    let body = json::json!({
      "message": message,
      "error": self.to_string(),
    });

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
  }
}
