use super::*;

/// An account on Hacker News.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
  pub about: Option<String>,
  pub created: DateTime<Utc>,
  pub delay: Option<u64>,
  pub id: String,
  pub karma: Option<i64>,
  raw: Value,
  /// The resolved `submitted` list split by type, filled in by
  /// [`HackerNews::expand_user`].
  pub submissions: Option<Submissions>,
  pub submitted: Option<Relation<Vec<u64>, Vec<Item>>>,
}

impl User {
  pub fn from_json(value: Value) -> Result<Self> {
    let payload = Payload::new(&value)?;

    Ok(Self {
      about: payload.string("about"),
      created: payload.timestamp("created")?,
      delay: payload.u64("delay"),
      id: payload.string("id").ok_or(Error::MissingField("id"))?,
      karma: payload.i64("karma"),
      submissions: None,
      submitted: payload.ids("submitted").map(Relation::Unresolved),
      raw: value,
    })
  }

  pub fn raw(&self) -> &Value {
    &self.raw
  }

  pub fn raw_json(&self) -> String {
    self.raw.to_string()
  }
}

impl fmt::Display for User {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.karma {
      Some(karma) => write!(f, "{}: {karma}", self.id),
      None => write!(f, "{}", self.id),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  #[test]
  fn converts_a_full_user() {
    let user = User::from_json(json!({
      "about": "Bug fixer.",
      "created": 1_160_418_092,
      "delay": 0,
      "id": "pg",
      "karma": 157_236,
      "submitted": [35_683_968, 35_079_204]
    }))
    .unwrap();

    assert_eq!(user.id, "pg");
    assert_eq!(user.created.timestamp(), 1_160_418_092);
    assert_eq!(user.delay, Some(0));
    assert_eq!(user.karma, Some(157_236));
    assert_eq!(user.about.as_deref(), Some("Bug fixer."));
    assert_eq!(
      user.submitted,
      Some(Relation::Unresolved(vec![35_683_968, 35_079_204]))
    );
    assert_eq!(user.submissions, None);
    assert_eq!(user.to_string(), "pg: 157236");
  }

  #[test]
  fn missing_fields_are_absent() {
    let user = User::from_json(json!({ "id": "newbie" })).unwrap();

    assert_eq!(user.about, None);
    assert_eq!(user.created, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(user.delay, None);
    assert_eq!(user.karma, None);
    assert_eq!(user.submitted, None);
    assert_eq!(user.to_string(), "newbie");
  }

  #[test]
  fn requires_a_handle() {
    assert!(matches!(
      User::from_json(json!({ "karma": 1 })),
      Err(Error::MissingField("id"))
    ));
  }

  #[test]
  fn malformed_creation_time_is_an_error() {
    assert!(matches!(
      User::from_json(json!({ "id": "pg", "created": "2006" })),
      Err(Error::Timestamp {
        field: "created",
        ..
      })
    ));
  }

  #[test]
  fn raw_json_preserves_the_payload() {
    let payload = json!({ "id": "pg", "karma": 1 });
    let user = User::from_json(payload.clone()).unwrap();

    assert_eq!(user.raw(), &payload);
    assert_eq!(user.raw_json(), r#"{"id":"pg","karma":1}"#);
  }
}
