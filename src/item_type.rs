use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemType {
  Comment,
  Job,
  Poll,
  PollOpt,
  Story,
}

impl ItemType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Comment => "comment",
      Self::Job => "job",
      Self::Poll => "poll",
      Self::PollOpt => "pollopt",
      Self::Story => "story",
    }
  }

  /// Maps a wire type tag, returning `None` for tags outside the known set.
  pub(crate) fn from_tag(tag: &str) -> Option<Self> {
    match tag {
      "comment" => Some(Self::Comment),
      "job" => Some(Self::Job),
      "poll" => Some(Self::Poll),
      "pollopt" => Some(Self::PollOpt),
      "story" => Some(Self::Story),
      _ => None,
    }
  }
}

impl fmt::Display for ItemType {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
