use std::collections::BTreeSet;

use crate::view_model::{AppViewModel, RecipeCardView, DETAILS_HIDE, DETAILS_SHOW};
use crate::{compute_visible, Catalog, FavoriteSet, RecipeId};

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Catalog insertion order.
    #[default]
    None,
    /// Stable sort by title.
    Title,
}

impl SortMode {
    /// The next mode in the selector cycle.
    pub fn cycled(self) -> Self {
        match self {
            SortMode::None => SortMode::Title,
            SortMode::Title => SortMode::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    catalog: Catalog,
    favorites: FavoriteSet,
    search_query: String,
    favorites_only: bool,
    sort_mode: SortMode,
    /// Derived visible list, in display order. Rebuilt from the full
    /// catalog on every filter invocation.
    visible: Vec<RecipeId>,
    /// Cards currently showing their details block. Card-local state:
    /// cleared whenever the visible list is recomputed.
    expanded: BTreeSet<RecipeId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(Catalog::seeded())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let visible = catalog.iter().map(|recipe| recipe.id).collect();
        Self {
            catalog,
            favorites: FavoriteSet::new(),
            search_query: String::new(),
            favorites_only: false,
            sort_mode: SortMode::default(),
            visible,
            expanded: BTreeSet::new(),
            dirty: false,
        }
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn view(&self) -> AppViewModel {
        let cards = self
            .visible
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .map(|recipe| {
                let expanded = self.expanded.contains(&recipe.id);
                RecipeCardView {
                    id: recipe.id,
                    title: recipe.title.clone(),
                    ingredients_line: format!("Ingredients: {}", recipe.ingredients.join(", ")),
                    details: recipe.details.clone(),
                    favorited: self.favorites.contains(recipe.id),
                    expanded,
                    details_label: if expanded { DETAILS_HIDE } else { DETAILS_SHOW },
                }
            })
            .collect();

        AppViewModel {
            counter: format!(
                "Showing {} of {} recipes",
                self.visible.len(),
                self.catalog.len()
            ),
            cards,
            search_query: self.search_query.clone(),
            favorites_only: self.favorites_only,
            sort_mode: self.sort_mode,
            dirty: self.dirty,
        }
    }

    /// Reports and clears the dirty flag. The host re-renders when
    /// this returns true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    pub(crate) fn set_favorites_only(&mut self, enabled: bool) {
        self.favorites_only = enabled;
    }

    pub(crate) fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    pub(crate) fn set_favorites(&mut self, favorites: FavoriteSet) {
        self.favorites = favorites;
    }

    pub(crate) fn toggle_favorite(&mut self, id: RecipeId) -> bool {
        self.favorites.toggle(id)
    }

    pub(crate) fn is_visible(&self, id: RecipeId) -> bool {
        self.visible.contains(&id)
    }

    pub(crate) fn toggle_expanded(&mut self, id: RecipeId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Re-derives the visible list from the full catalog and the
    /// current view state. Discards all expanded flags, matching the
    /// full-rebuild render this precedes.
    pub(crate) fn recompute_visible(&mut self) {
        let visible = compute_visible(
            &self.catalog,
            &self.search_query,
            self.favorites_only,
            self.sort_mode,
            &self.favorites,
        )
        .iter()
        .map(|recipe| recipe.id)
        .collect();
        self.visible = visible;
        self.expanded.clear();
        self.dirty = true;
    }
}
