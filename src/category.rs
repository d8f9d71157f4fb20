use super::*;

/// A story feed published by the API, most relevant or most recent first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
  Ask,
  Job,
  New,
  Show,
  Top,
}

impl Category {
  pub fn all() -> &'static [Category] {
    &[
      Category::Top,
      Category::New,
      Category::Ask,
      Category::Show,
      Category::Job,
    ]
  }

  pub fn endpoint(self) -> &'static str {
    match self {
      Self::Ask => "askstories",
      Self::Job => "jobstories",
      Self::New => "newstories",
      Self::Show => "showstories",
      Self::Top => "topstories",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Ask => "ask",
      Self::Job => "job",
      Self::New => "new",
      Self::Show => "show",
      Self::Top => "top",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Category {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::all()
      .iter()
      .find(|category| category.label() == s || category.endpoint() == s)
      .copied()
      .ok_or_else(|| Error::InvalidCategory(s.to_string()))
  }
}
