use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to build http client")]
  Client(#[source] reqwest::Error),
  #[error("invalid value `{value}` for {key}")]
  Config { key: &'static str, value: String },
  #[error("response from {url} is not valid json")]
  Decode {
    #[source]
    source: reqwest::Error,
    url: String,
  },
  #[error("request to {url} failed with status {status}")]
  Http {
    status: reqwest::StatusCode,
    url: String,
  },
  #[error("unsupported api version `{0}`")]
  InvalidApiVersion(String),
  #[error("unknown story category `{0}`")]
  InvalidCategory(String),
  #[error("item {0} does not exist")]
  InvalidItemId(u64),
  #[error("user `{0}` does not exist")]
  InvalidUserId(String),
  #[error("unexpected payload shape")]
  Json(#[from] serde_json::Error),
  #[error("payload is missing required field `{0}`")]
  MissingField(&'static str),
  #[error("payload is not a json object")]
  NotAnObject,
  #[error("field `{field}` holds an invalid timestamp: {value}")]
  Timestamp { field: &'static str, value: Value },
  #[error("request to {url} failed")]
  Transport {
    #[source]
    source: reqwest::Error,
    url: String,
  },
}

impl Error {
  /// Whether this error means the requested identifier has no record
  /// upstream, as opposed to the request itself failing.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::InvalidItemId(_) | Self::InvalidUserId(_))
  }
}
