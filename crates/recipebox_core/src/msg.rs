use crate::{RecipeId, SortMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search field (debounced text, trailing edge).
    SearchChanged(String),
    /// User picked a sort mode. Applied immediately, never debounced.
    SortModeChanged(SortMode),
    /// User flipped the favorites-only filter. Applied immediately.
    FavoritesOnlySet(bool),
    /// User activated the favorite toggle on a card.
    FavoriteToggled(RecipeId),
    /// User activated the show/hide details toggle on a card.
    DetailsToggled(RecipeId),
    /// Restore the favorite set loaded from persisted state at startup.
    RestoreFavorites(Vec<RecipeId>),
    /// Fallback for placeholder wiring.
    NoOp,
}
