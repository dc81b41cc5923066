use crate::{AppState, Effect, FavoriteSet, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchChanged(query) => {
            if query == state.search_query() {
                return (state, Vec::new());
            }
            state.set_search_query(query);
            state.recompute_visible();
            Vec::new()
        }
        Msg::SortModeChanged(mode) => {
            if mode == state.sort_mode() {
                return (state, Vec::new());
            }
            state.set_sort_mode(mode);
            state.recompute_visible();
            Vec::new()
        }
        Msg::FavoritesOnlySet(enabled) => {
            if enabled == state.favorites_only() {
                return (state, Vec::new());
            }
            state.set_favorites_only(enabled);
            state.recompute_visible();
            Vec::new()
        }
        Msg::FavoriteToggled(id) => {
            state.toggle_favorite(id);
            if state.favorites_only() {
                // Unfavoriting while the filter is active must remove
                // the card from view.
                state.recompute_visible();
            } else {
                state.mark_dirty();
            }
            vec![Effect::SaveFavorites(state.favorites().to_ids())]
        }
        Msg::DetailsToggled(id) => {
            if state.is_visible(id) {
                state.toggle_expanded(id);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RestoreFavorites(ids) => {
            // Loaded from disk: no save effect, ids kept as-is even if
            // some no longer exist in the catalog.
            state.set_favorites(FavoriteSet::from_ids(ids));
            if state.favorites_only() {
                state.recompute_visible();
            } else {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
