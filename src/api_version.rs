use super::*;

/// A supported version of the upstream API and the origin it is served from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ApiVersion {
  #[default]
  V0,
}

impl ApiVersion {
  const SUPPORTED: &[(&str, ApiVersion)] = &[("v0", ApiVersion::V0)];

  pub fn base_url(self) -> &'static str {
    match self {
      Self::V0 => "https://hacker-news.firebaseio.com/v0",
    }
  }

  pub(crate) fn item_url(self, id: u64) -> String {
    format!("{}/item/{id}.json", self.base_url())
  }

  pub(crate) fn max_item_url(self) -> String {
    format!("{}/maxitem.json", self.base_url())
  }

  pub(crate) fn stories_url(self, category: Category) -> String {
    format!("{}/{}.json", self.base_url(), category.endpoint())
  }

  pub(crate) fn updates_url(self) -> String {
    format!("{}/updates.json", self.base_url())
  }

  pub(crate) fn user_url(self, id: &str) -> String {
    format!("{}/user/{id}.json", self.base_url())
  }
}

impl FromStr for ApiVersion {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::SUPPORTED
      .iter()
      .find(|(name, _)| *name == s)
      .map(|(_, version)| *version)
      .ok_or_else(|| Error::InvalidApiVersion(s.to_string()))
  }
}
