use super::*;

impl<T: Transport> HackerNews<T> {
  /// Replaces the item's identifier fields with the records they point to:
  /// author, parent, poll, children and poll options.
  ///
  /// Expansion is one hop deep. Children come back with their own relations
  /// unresolved, and fields that are absent or already resolved are left
  /// alone, so calling this twice issues no further requests.
  #[instrument(skip(self, item), fields(id = item.id))]
  pub async fn expand_item(&self, item: &mut Item) -> Result {
    let author = item.by.as_ref().and_then(Relation::unresolved).cloned();
    let parent = item.parent.as_ref().and_then(Relation::unresolved).copied();
    let poll = item.poll.as_ref().and_then(Relation::unresolved).copied();
    let kids = Self::pending_ids(item.kids.as_ref());
    let parts = Self::pending_ids(item.parts.as_ref());

    let (author, parent, poll, kids, parts) = futures::try_join!(
      async {
        match &author {
          Some(id) => self.fetch_user(id).await.map(Some),
          None => Ok(None),
        }
      },
      async {
        match parent {
          Some(id) => self.fetch_item(id).await.map(Some),
          None => Ok(None),
        }
      },
      async {
        match poll {
          Some(id) => self.fetch_item(id).await.map(Some),
          None => Ok(None),
        }
      },
      async {
        match &kids {
          Some(ids) => {
            Ok::<_, Error>(Some(self.get_items_by_ids(ids, None).await))
          }
          None => Ok(None),
        }
      },
      async {
        match &parts {
          Some(ids) => {
            Ok::<_, Error>(Some(self.get_items_by_ids(ids, None).await))
          }
          None => Ok(None),
        }
      },
    )?;

    if let Some(user) = author {
      item.by = Some(Relation::Resolved(Box::new(user)));
    }

    if let Some(parent) = parent {
      item.parent = Some(Relation::Resolved(Box::new(parent)));
    }

    if let Some(poll) = poll {
      item.poll = Some(Relation::Resolved(Box::new(poll)));
    }

    if let Some(kids) = kids {
      item.kids = Some(Relation::Resolved(kids));
    }

    if let Some(parts) = parts {
      item.parts = Some(Relation::Resolved(parts));
    }

    Ok(())
  }

  /// Resolves the user's `submitted` list into items, in submission order,
  /// and partitions them by type into [`User::submissions`]. Does nothing
  /// once `submitted` has been resolved.
  #[instrument(skip(self, user), fields(id = %user.id))]
  pub async fn expand_user(&self, user: &mut User) -> Result {
    let ids = match &user.submitted {
      Some(Relation::Resolved(_)) => return Ok(()),
      Some(Relation::Unresolved(ids)) => ids.clone(),
      None => Vec::new(),
    };

    let items = if ids.is_empty() {
      Vec::new()
    } else {
      self.get_items_by_ids(&ids, None).await
    };

    user.submissions = Some(items.iter().cloned().collect());

    if user.submitted.is_some() {
      user.submitted = Some(Relation::Resolved(items));
    }

    Ok(())
  }

  fn pending_ids(
    relation: Option<&Relation<Vec<u64>, Vec<Item>>>,
  ) -> Option<Vec<u64>> {
    relation
      .and_then(Relation::unresolved)
      .filter(|ids| !ids.is_empty())
      .cloned()
  }
}
