use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct UpdatesResponse {
  pub(crate) items: Vec<u64>,
  pub(crate) profiles: Vec<String>,
}

/// Items and profiles that changed recently, in feed order. Identifiers
/// that resolved to nothing are left out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Updates {
  pub items: Vec<Item>,
  pub profiles: Vec<User>,
}
