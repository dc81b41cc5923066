use std::collections::BTreeSet;

use crate::RecipeId;

/// The set of recipe ids the user has marked favorite.
///
/// Backed by a `BTreeSet` so iteration (and therefore the persisted
/// sequence) is deterministic. Unknown ids restored from a corrupted
/// payload are tolerated: they stay in the set and simply never match
/// a displayed card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteSet {
    ids: BTreeSet<RecipeId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = RecipeId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Flips membership of `id` and reports whether it is a favorite
    /// now. Toggling the same id twice restores the original set.
    pub fn toggle(&mut self, id: RecipeId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order, for the persistence boundary.
    pub fn to_ids(&self) -> Vec<RecipeId> {
        self.ids.iter().copied().collect()
    }
}
