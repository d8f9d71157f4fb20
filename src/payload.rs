use super::*;

/// Read-only view over a wire payload. Every lookup is get-or-absent, so a
/// missing or mistyped optional field never fails conversion.
pub(crate) struct Payload<'a> {
  fields: &'a Map<String, Value>,
}

impl<'a> Payload<'a> {
  pub(crate) fn bool(&self, key: &str) -> Option<bool> {
    self.get(key).and_then(Value::as_bool)
  }

  fn get(&self, key: &str) -> Option<&'a Value> {
    self.fields.get(key).filter(|value| !value.is_null())
  }

  pub(crate) fn i64(&self, key: &str) -> Option<i64> {
    self.get(key).and_then(Value::as_i64)
  }

  pub(crate) fn ids(&self, key: &str) -> Option<Vec<u64>> {
    self
      .get(key)
      .and_then(Value::as_array)
      .map(|ids| ids.iter().filter_map(Value::as_u64).collect())
  }

  pub(crate) fn new(value: &'a Value) -> Result<Self> {
    value
      .as_object()
      .map(|fields| Self { fields })
      .ok_or(Error::NotAnObject)
  }

  pub(crate) fn string(&self, key: &str) -> Option<String> {
    self.get(key).and_then(Value::as_str).map(str::to_string)
  }

  /// Converts a Unix-epoch seconds field, treating an absent field as the
  /// epoch itself.
  pub(crate) fn timestamp(
    &self,
    key: &'static str,
  ) -> Result<DateTime<Utc>> {
    let Some(value) = self.get(key) else {
      return Ok(DateTime::UNIX_EPOCH);
    };

    value
      .as_i64()
      .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
      .ok_or_else(|| Error::Timestamp {
        field: key,
        value: value.clone(),
      })
  }

  pub(crate) fn u64(&self, key: &str) -> Option<u64> {
    self.get(key).and_then(Value::as_u64)
  }
}
