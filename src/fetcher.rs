use super::*;

/// Concurrent, order-preserving GETs over a shared [`Transport`].
///
/// At most `concurrency` requests are in flight at once. Results come back
/// addressed by input position, regardless of completion order.
pub struct Fetcher<T> {
  concurrency: usize,
  transport: Arc<T>,
}

impl<T> Clone for Fetcher<T> {
  fn clone(&self) -> Self {
    Self {
      concurrency: self.concurrency,
      transport: Arc::clone(&self.transport),
    }
  }
}

impl<T: Transport> Fetcher<T> {
  pub fn concurrency(&self) -> usize {
    self.concurrency
  }

  /// Fetches every URL, yielding `None` for slots whose request failed or
  /// whose body was JSON `null`. A failing slot never affects its siblings.
  pub async fn fetch_many<I>(&self, urls: I) -> Vec<Option<Value>>
  where
    I: IntoIterator<Item = String>,
  {
    stream::iter(urls.into_iter().map(|url| async move {
      match self.transport.get_json(&url).await {
        Ok(Value::Null) => {
          debug!(%url, "no record behind url");
          None
        }
        Ok(value) => Some(value),
        Err(error) => {
          warn!(%url, %error, "bulk fetch slot failed");
          None
        }
      }
    }))
    .buffered(self.concurrency)
    .collect()
    .await
  }

  /// Fetches a single URL, surfacing any failure to the caller.
  pub async fn fetch_one(&self, url: &str) -> Result<Value> {
    self.transport.get_json(url).await
  }

  pub fn new(transport: T, concurrency: usize) -> Self {
    Self {
      concurrency: concurrency.max(1),
      transport: Arc::new(transport),
    }
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }
}
