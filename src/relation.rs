/// A reference to another record that starts out as an identifier and is
/// upgraded to the fetched record by an expansion pass. The upgrade is one
/// way: a resolved relation is never turned back into an identifier.
#[derive(Clone, Debug, PartialEq)]
pub enum Relation<I, T> {
  Resolved(T),
  Unresolved(I),
}

impl<I, T> Relation<I, T> {
  pub fn is_resolved(&self) -> bool {
    matches!(self, Self::Resolved(_))
  }

  pub fn resolved(&self) -> Option<&T> {
    match self {
      Self::Resolved(value) => Some(value),
      Self::Unresolved(_) => None,
    }
  }

  pub fn unresolved(&self) -> Option<&I> {
    match self {
      Self::Resolved(_) => None,
      Self::Unresolved(id) => Some(id),
    }
  }
}
