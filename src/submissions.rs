use super::*;

/// A user's submitted items split by type tag, each list in submission
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submissions {
  pub comments: Vec<Item>,
  pub jobs: Vec<Item>,
  pub pollopts: Vec<Item>,
  pub polls: Vec<Item>,
  pub stories: Vec<Item>,
}

impl Submissions {
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn len(&self) -> usize {
    self.comments.len()
      + self.jobs.len()
      + self.pollopts.len()
      + self.polls.len()
      + self.stories.len()
  }
}

impl FromIterator<Item> for Submissions {
  /// Items without a type tag belong to none of the lists and are dropped.
  fn from_iter<I: IntoIterator<Item = Item>>(items: I) -> Self {
    let mut submissions = Self::default();

    for item in items {
      let list = match item.item_type {
        Some(ItemType::Comment) => &mut submissions.comments,
        Some(ItemType::Job) => &mut submissions.jobs,
        Some(ItemType::Poll) => &mut submissions.polls,
        Some(ItemType::PollOpt) => &mut submissions.pollopts,
        Some(ItemType::Story) => &mut submissions.stories,
        None => continue,
      };

      list.push(item);
    }

    submissions
  }
}
