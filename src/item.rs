use super::*;

/// A story, comment, job, poll or poll option.
///
/// Every field except `id` is optional upstream and stays `None` when the
/// payload leaves it out, so a score of zero is distinguishable from no
/// score at all. Relation fields hold identifiers until an expansion pass
/// resolves them.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
  pub by: Option<Relation<String, Box<User>>>,
  pub dead: Option<bool>,
  pub deleted: Option<bool>,
  pub descendants: Option<u64>,
  pub id: u64,
  pub item_type: Option<ItemType>,
  pub kids: Option<Relation<Vec<u64>, Vec<Item>>>,
  pub parent: Option<Relation<u64, Box<Item>>>,
  pub parts: Option<Relation<Vec<u64>, Vec<Item>>>,
  pub poll: Option<Relation<u64, Box<Item>>>,
  raw: Value,
  pub score: Option<u64>,
  pub text: Option<String>,
  pub time: DateTime<Utc>,
  pub title: Option<String>,
  pub url: Option<String>,
}

impl Item {
  pub fn from_json(value: Value) -> Result<Self> {
    let payload = Payload::new(&value)?;

    Ok(Self {
      by: payload.string("by").map(Relation::Unresolved),
      dead: payload.bool("dead"),
      deleted: payload.bool("deleted"),
      descendants: payload.u64("descendants"),
      id: payload.u64("id").ok_or(Error::MissingField("id"))?,
      item_type: payload
        .string("type")
        .as_deref()
        .and_then(ItemType::from_tag),
      kids: payload.ids("kids").map(Relation::Unresolved),
      parent: payload.u64("parent").map(Relation::Unresolved),
      parts: payload.ids("parts").map(Relation::Unresolved),
      poll: payload.u64("poll").map(Relation::Unresolved),
      score: payload.u64("score"),
      text: payload.string("text"),
      time: payload.timestamp("time")?,
      title: payload.string("title"),
      url: payload.string("url"),
      raw: value,
    })
  }

  /// The author handle, whether or not the author has been expanded.
  pub fn author(&self) -> Option<&str> {
    self.by.as_ref().map(|by| match by {
      Relation::Resolved(user) => user.id.as_str(),
      Relation::Unresolved(id) => id.as_str(),
    })
  }

  pub fn is_dead(&self) -> bool {
    self.dead.unwrap_or(false)
  }

  pub fn is_deleted(&self) -> bool {
    self.deleted.unwrap_or(false)
  }

  pub fn plain_text(&self) -> Option<String> {
    self
      .text
      .as_deref()
      .and_then(|html| {
        html2text::from_read(html.as_bytes(), usize::MAX)
          .ok()
          .map(|text| text.trim_end().to_owned())
      })
      .filter(|text| !text.is_empty())
  }

  /// The payload exactly as the API returned it.
  pub fn raw(&self) -> &Value {
    &self.raw
  }

  pub fn raw_json(&self) -> String {
    self.raw.to_string()
  }
}

impl fmt::Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: {}", self.id, self.title.as_deref().unwrap_or(""))
  }
}
