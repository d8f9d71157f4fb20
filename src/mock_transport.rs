use {
  super::*,
  std::{
    collections::HashMap,
    sync::{
      Mutex,
      atomic::{AtomicUsize, Ordering},
    },
  },
};

/// In-memory [`Transport`] keyed by URL. Unknown URLs answer `404`.
#[derive(Default)]
pub(crate) struct MockTransport {
  delays: HashMap<String, Duration>,
  failures: HashMap<String, reqwest::StatusCode>,
  in_flight: AtomicUsize,
  peak_in_flight: AtomicUsize,
  requests: Mutex<Vec<String>>,
  responses: HashMap<String, Value>,
}

impl MockTransport {
  pub(crate) fn delay(mut self, url: String, delay: Duration) -> Self {
    self.delays.insert(url, delay);
    self
  }

  pub(crate) fn fail(mut self, url: String, status: u16) -> Self {
    self.failures.insert(
      url,
      reqwest::StatusCode::from_u16(status).expect("valid status code"),
    );
    self
  }

  pub(crate) fn item(self, payload: Value) -> Self {
    let id = payload["id"].as_u64().expect("item payload has an id");
    self.respond(ApiVersion::V0.item_url(id), payload)
  }

  pub(crate) fn peak_in_flight(&self) -> usize {
    self.peak_in_flight.load(Ordering::SeqCst)
  }

  pub(crate) fn request_count(&self, url: &str) -> usize {
    self
      .requests
      .lock()
      .unwrap()
      .iter()
      .filter(|request| *request == url)
      .count()
  }

  pub(crate) fn respond(mut self, url: String, payload: Value) -> Self {
    self.responses.insert(url, payload);
    self
  }

  pub(crate) fn total_requests(&self) -> usize {
    self.requests.lock().unwrap().len()
  }

  pub(crate) fn user(self, payload: Value) -> Self {
    let id = payload["id"]
      .as_str()
      .expect("user payload has an id")
      .to_string();

    self.respond(ApiVersion::V0.user_url(&id), payload)
  }
}

#[async_trait]
impl Transport for MockTransport {
  async fn get_json(&self, url: &str) -> Result<Value> {
    self.requests.lock().unwrap().push(url.to_string());

    let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

    tokio::time::sleep(
      self
        .delays
        .get(url)
        .copied()
        .unwrap_or(Duration::from_millis(1)),
    )
    .await;

    self.in_flight.fetch_sub(1, Ordering::SeqCst);

    if let Some(status) = self.failures.get(url) {
      return Err(Error::Http {
        status: *status,
        url: url.to_string(),
      });
    }

    self
      .responses
      .get(url)
      .cloned()
      .ok_or_else(|| Error::Http {
        status: reqwest::StatusCode::NOT_FOUND,
        url: url.to_string(),
      })
  }
}
