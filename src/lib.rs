//! Client for the read-only Hacker News API.
//!
//! Identifiers are resolved into typed [`Item`] and [`User`] records. Bulk
//! lookups fan out as concurrent requests through a bounded, order-preserving
//! [`Fetcher`], and [`HackerNews::expand_item`] / [`HackerNews::expand_user`]
//! replace identifier fields with the objects they point to, one hop at a
//! time.

use {
  async_trait::async_trait,
  chrono::{DateTime, Utc},
  futures::stream::{self, StreamExt},
  payload::Payload,
  serde::Deserialize,
  serde_json::{Map, Value},
  std::{fmt, str::FromStr, sync::Arc, time::Duration},
  tracing::{debug, instrument, warn},
  updates::UpdatesResponse,
};

pub use {
  api_version::ApiVersion,
  category::Category,
  client::HackerNews,
  config::Config,
  error::Error,
  fetcher::Fetcher,
  item::Item,
  item_type::ItemType,
  relation::Relation,
  submissions::Submissions,
  transport::{HttpTransport, Transport},
  updates::Updates,
  user::User,
};

mod api_version;
mod category;
mod client;
mod config;
mod error;
mod expand;
mod fetcher;
mod item;
mod item_type;
#[cfg(test)]
mod mock_transport;
mod payload;
mod relation;
mod submissions;
mod transport;
mod updates;
mod user;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
