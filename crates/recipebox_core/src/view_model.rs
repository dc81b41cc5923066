use crate::{RecipeId, SortMode};

/// Label of a collapsed card's details toggle.
pub const DETAILS_SHOW: &str = "Show details";
/// Label of an expanded card's details toggle.
pub const DETAILS_HIDE: &str = "Hide details";

/// Everything a host needs to draw the page. Rebuilt from scratch on
/// each render; carries no references back into the state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Counter label, `"Showing {visible} of {total} recipes"`.
    pub counter: String,
    pub cards: Vec<RecipeCardView>,
    pub search_query: String,
    pub favorites_only: bool,
    pub sort_mode: SortMode,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCardView {
    pub id: RecipeId,
    pub title: String,
    /// `"Ingredients: a, b, c"`, ingredients in declared order.
    pub ingredients_line: String,
    pub details: String,
    pub favorited: bool,
    pub expanded: bool,
    pub details_label: &'static str,
}
