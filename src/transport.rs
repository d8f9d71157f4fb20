use super::*;

/// Performs a single GET and decodes the body as JSON.
///
/// A JSON `null` body is a successful response and comes back as
/// [`Value::Null`]; the API uses it for identifiers with no record.
#[async_trait]
pub trait Transport: Send + Sync {
  async fn get_json(&self, url: &str) -> Result<Value>;
}

/// [`Transport`] over a shared `reqwest` connection pool. Built only from a
/// [`Config`] so every request carries the configured user agent.
#[derive(Clone, Debug)]
pub struct HttpTransport {
  client: reqwest::Client,
}

impl HttpTransport {
  pub fn new(config: &Config) -> Result<Self> {
    let mut builder =
      reqwest::Client::builder().user_agent(config.user_agent.as_str());

    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }

    Ok(Self {
      client: builder.build().map_err(Error::Client)?,
    })
  }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn get_json(&self, url: &str) -> Result<Value> {
    debug!(url, "sending request");

    let response =
      self
        .client
        .get(url)
        .send()
        .await
        .map_err(|source| Error::Transport {
          source,
          url: url.to_string(),
        })?;

    let status = response.status();

    if !status.is_success() {
      return Err(Error::Http {
        status,
        url: url.to_string(),
      });
    }

    response
      .json::<Value>()
      .await
      .map_err(|source| Error::Decode {
        source,
        url: url.to_string(),
      })
  }
}
