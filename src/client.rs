use super::*;

/// Entry point to the API.
///
/// Single-record lookups fail loudly with [`Error::InvalidItemId`] or
/// [`Error::InvalidUserId`] when the record does not exist. Bulk lookups
/// never fail per element: records that could not be fetched or converted
/// are left out of the result.
pub struct HackerNews<T = HttpTransport> {
  api: ApiVersion,
  fetcher: Fetcher<T>,
}

impl<T> Clone for HackerNews<T> {
  fn clone(&self) -> Self {
    Self {
      api: self.api,
      fetcher: self.fetcher.clone(),
    }
  }
}

impl HackerNews {
  pub fn from_config(config: &Config) -> Result<Self> {
    Ok(Self::with_transport(
      config.api_version.parse()?,
      HttpTransport::new(config)?,
      config.concurrency,
    ))
  }

  pub fn new(version: &str) -> Result<Self> {
    Self::from_config(&Config {
      api_version: version.to_string(),
      ..Config::default()
    })
  }
}

impl<T: Transport> HackerNews<T> {
  pub fn api_version(&self) -> ApiVersion {
    self.api
  }

  pub async fn ask_stories(&self, limit: Option<usize>) -> Result<Vec<Item>> {
    self.stories(Category::Ask, limit).await
  }

  pub(crate) async fn fetch_item(&self, id: u64) -> Result<Item> {
    match self.fetcher.fetch_one(&self.api.item_url(id)).await? {
      Value::Null => Err(Error::InvalidItemId(id)),
      value => Item::from_json(value),
    }
  }

  pub(crate) async fn fetch_user(&self, id: &str) -> Result<User> {
    match self.fetcher.fetch_one(&self.api.user_url(id)).await? {
      Value::Null => Err(Error::InvalidUserId(id.to_string())),
      value => User::from_json(value),
    }
  }

  pub fn fetcher(&self) -> &Fetcher<T> {
    &self.fetcher
  }

  /// Every item ever posted, oldest first. This issues one request per
  /// identifier up to the current maximum.
  pub async fn get_all(&self) -> Result<Vec<Item>> {
    let max_item = self.max_item_id().await?;
    Ok(self.items_in_range(1, max_item).await)
  }

  #[instrument(skip(self))]
  pub async fn get_item(&self, id: u64, expand: bool) -> Result<Item> {
    let mut item = self.fetch_item(id).await?;

    if expand {
      self.expand_item(&mut item).await?;
    }

    Ok(item)
  }

  /// Items for the given identifiers in input order, optionally keeping only
  /// one type.
  #[instrument(skip(self, ids), fields(count = ids.len()))]
  pub async fn get_items_by_ids(
    &self,
    ids: &[u64],
    item_type: Option<ItemType>,
  ) -> Vec<Item> {
    let urls = ids.iter().map(|id| self.api.item_url(*id));

    Self::materialize(self.fetcher.fetch_many(urls).await, Item::from_json)
      .into_iter()
      .filter(|item| item_type.is_none() || item.item_type == item_type)
      .collect()
  }

  /// The `count` most recent items, counting back from the maximum
  /// identifier, oldest first.
  #[instrument(skip(self))]
  pub async fn get_last(&self, count: u64) -> Result<Vec<Item>> {
    if count == 0 {
      return Ok(Vec::new());
    }

    let max_item = self.max_item_id().await?;

    let first = max_item.saturating_sub(count - 1).max(1);

    Ok(self.items_in_range(first, max_item).await)
  }

  /// The item holding the maximum identifier.
  pub async fn get_max_item(&self, expand: bool) -> Result<Item> {
    let id = self.max_item_id().await?;
    self.get_item(id, expand).await
  }

  #[instrument(skip(self))]
  pub async fn get_user(&self, id: &str, expand: bool) -> Result<User> {
    let mut user = self.fetch_user(id).await?;

    if expand {
      self.expand_user(&mut user).await?;
    }

    Ok(user)
  }

  #[instrument(skip(self, ids), fields(count = ids.len()))]
  pub async fn get_users_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<User> {
    let urls = ids.iter().map(|id| self.api.user_url(id.as_ref()));
    Self::materialize(self.fetcher.fetch_many(urls).await, User::from_json)
  }

  async fn items_in_range(&self, first: u64, last: u64) -> Vec<Item> {
    debug!(first, last, "fetching item range");

    let urls = (first..=last).map(|id| self.api.item_url(id));

    Self::materialize(self.fetcher.fetch_many(urls).await, Item::from_json)
  }

  pub async fn job_stories(&self, limit: Option<usize>) -> Result<Vec<Item>> {
    self.stories(Category::Job, limit).await
  }

  fn materialize<R>(
    values: Vec<Option<Value>>,
    convert: impl Fn(Value) -> Result<R>,
  ) -> Vec<R> {
    values
      .into_iter()
      .flatten()
      .filter_map(|value| match convert(value) {
        Ok(record) => Some(record),
        Err(error) => {
          warn!(%error, "skipping unconvertible payload");
          None
        }
      })
      .collect()
  }

  /// The highest identifier assigned so far.
  #[instrument(skip(self))]
  pub async fn max_item_id(&self) -> Result<u64> {
    let value = self.fetcher.fetch_one(&self.api.max_item_url()).await?;
    Ok(serde_json::from_value(value)?)
  }

  pub async fn new_stories(&self, limit: Option<usize>) -> Result<Vec<Item>> {
    self.stories(Category::New, limit).await
  }

  pub async fn show_stories(&self, limit: Option<usize>) -> Result<Vec<Item>> {
    self.stories(Category::Show, limit).await
  }

  #[instrument(skip(self))]
  pub async fn stories(
    &self,
    category: Category,
    limit: Option<usize>,
  ) -> Result<Vec<Item>> {
    let ids = self.story_ids(category, limit).await?;
    Ok(self.get_items_by_ids(&ids, None).await)
  }

  /// Like [`HackerNews::stories`], returning each payload as the JSON string
  /// the API sent.
  #[instrument(skip(self))]
  pub async fn stories_raw(
    &self,
    category: Category,
    limit: Option<usize>,
  ) -> Result<Vec<String>> {
    let ids = self.story_ids(category, limit).await?;

    let urls = ids.iter().map(|id| self.api.item_url(*id));

    Ok(
      self
        .fetcher
        .fetch_many(urls)
        .await
        .into_iter()
        .flatten()
        .map(|value| value.to_string())
        .collect(),
    )
  }

  pub async fn story_ids(
    &self,
    category: Category,
    limit: Option<usize>,
  ) -> Result<Vec<u64>> {
    let value = self.fetcher.fetch_one(&self.api.stories_url(category)).await?;

    let mut ids = serde_json::from_value::<Vec<u64>>(value)?;

    if let Some(limit) = limit {
      ids.truncate(limit);
    }

    Ok(ids)
  }

  pub async fn top_stories(&self, limit: Option<usize>) -> Result<Vec<Item>> {
    self.stories(Category::Top, limit).await
  }

  /// Recently changed items and profiles, both hydrated.
  #[instrument(skip(self))]
  pub async fn updates(&self) -> Result<Updates> {
    let value = self.fetcher.fetch_one(&self.api.updates_url()).await?;

    let UpdatesResponse { items, profiles } = serde_json::from_value(value)?;

    let (items, profiles) = futures::join!(
      self.get_items_by_ids(&items, None),
      self.get_users_by_ids(&profiles),
    );

    Ok(Updates { items, profiles })
  }

  pub fn with_transport(
    api: ApiVersion,
    transport: T,
    concurrency: usize,
  ) -> Self {
    Self {
      api,
      fetcher: Fetcher::new(transport, concurrency),
    }
  }
}
