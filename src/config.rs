//! Client settings, with defaults that can be overridden from the
//! environment.
//!
//! - `HN_API_VERSION` - upstream API version (default: `v0`)
//! - `HN_CONCURRENCY` - maximum in-flight requests per bulk fetch
//!   (default: 16, min: 1)
//! - `HN_TIMEOUT_SECS` - per-request timeout in seconds (default: none)
//! - `HN_USER_AGENT` - `User-Agent` header sent with every request

use {super::*, std::env};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
  pub api_version: String,
  pub concurrency: usize,
  pub timeout: Option<Duration>,
  pub user_agent: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_version: "v0".to_string(),
      concurrency: Self::DEFAULT_CONCURRENCY,
      timeout: None,
      user_agent: Self::DEFAULT_USER_AGENT.to_string(),
    }
  }
}

impl Config {
  pub const DEFAULT_CONCURRENCY: usize = 16;

  const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub(crate) fn from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
  ) -> Result<Self> {
    let mut config = Self::default();

    if let Some(version) = lookup("HN_API_VERSION") {
      config.api_version = version;
    }

    if let Some(value) = lookup("HN_CONCURRENCY") {
      config.concurrency = value
        .parse::<usize>()
        .ok()
        .filter(|concurrency| *concurrency > 0)
        .ok_or(Error::Config {
          key: "HN_CONCURRENCY",
          value,
        })?;
    }

    if let Some(value) = lookup("HN_TIMEOUT_SECS") {
      let seconds = value.parse::<u64>().map_err(|_| Error::Config {
        key: "HN_TIMEOUT_SECS",
        value,
      })?;

      config.timeout = Some(Duration::from_secs(seconds));
    }

    if let Some(user_agent) = lookup("HN_USER_AGENT") {
      config.user_agent = user_agent;
    }

    Ok(config)
  }
}
