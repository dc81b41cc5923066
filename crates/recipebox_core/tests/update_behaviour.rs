use std::sync::Once;

use recipebox_core::{
    update, AppState, Effect, Msg, SortMode, DETAILS_HIDE, DETAILS_SHOW,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(recipebox_logging::initialize_for_tests);
}

#[test]
fn initial_view_shows_the_full_catalog() {
    init_logging();
    let state = AppState::new();
    let view = state.view();

    assert_eq!(view.counter, "Showing 8 of 8 recipes");
    assert_eq!(view.cards.len(), 8);
    assert!(view.cards.iter().all(|card| !card.favorited));
    assert!(view.cards.iter().all(|card| !card.expanded));
}

#[test]
fn favorite_toggle_is_involutive_and_persists_every_mutation() {
    init_logging();
    let state = AppState::new();
    let original = state.favorites().clone();

    let (state, effects) = update(state, Msg::FavoriteToggled(3));
    assert!(state.favorites().contains(3));
    assert_eq!(effects, vec![Effect::SaveFavorites(vec![3])]);

    let (state, effects) = update(state, Msg::FavoriteToggled(3));
    assert_eq!(state.favorites(), &original);
    assert_eq!(effects, vec![Effect::SaveFavorites(vec![])]);
}

#[test]
fn search_recomputes_and_updates_the_counter() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::SearchChanged("chicken".to_string()));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.counter, "Showing 1 of 8 recipes");
    assert_eq!(view.cards[0].title, "Chicken Tikka Masala");
}

#[test]
fn identical_search_is_a_noop() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SearchChanged("egg".to_string()));
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::SearchChanged("egg".to_string()));
    assert_eq!(next, before);
    assert!(effects.is_empty());
    assert!(next.consume_dirty()); // still dirty from the first change
}

#[test]
fn unfavoriting_while_filter_active_empties_the_view() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FavoriteToggled(3));
    let (state, _) = update(state, Msg::FavoritesOnlySet(true));

    let view = state.view();
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].id, 3);
    assert!(view.cards[0].favorited);

    let (state, effects) = update(state, Msg::FavoriteToggled(3));
    assert_eq!(effects, vec![Effect::SaveFavorites(vec![])]);
    let view = state.view();
    assert!(view.cards.is_empty());
    assert_eq!(view.counter, "Showing 0 of 8 recipes");
}

#[test]
fn favorite_toggle_without_filter_keeps_the_card_in_view() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::FavoriteToggled(5));

    assert_eq!(effects, vec![Effect::SaveFavorites(vec![5])]);
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.cards.len(), 8);
    assert!(view.cards.iter().any(|card| card.id == 5 && card.favorited));
}

#[test]
fn sort_mode_title_orders_cards_and_none_restores_catalog_order() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SortModeChanged(SortMode::Title));
    let view = state.view();
    assert_eq!(view.cards[0].title, "Avocado Toast");
    assert_eq!(view.cards[7].title, "Sushi Rolls");

    let (state, _) = update(state, Msg::SortModeChanged(SortMode::None));
    let ids: Vec<_> = state.view().cards.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn details_toggle_flips_the_label_for_one_card_only() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::DetailsToggled(1));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    for card in state.view().cards {
        if card.id == 1 {
            assert!(card.expanded);
            assert_eq!(card.details_label, DETAILS_HIDE);
        } else {
            assert!(!card.expanded);
            assert_eq!(card.details_label, DETAILS_SHOW);
        }
    }
}

#[test]
fn recompute_collapses_all_expanded_cards() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::DetailsToggled(1));
    assert!(state.view().cards[0].expanded);

    // Any filter/sort change rebuilds the cards from scratch.
    let (state, _) = update(state, Msg::SortModeChanged(SortMode::Title));
    assert!(state.view().cards.iter().all(|card| !card.expanded));
}

#[test]
fn details_toggle_ignored_for_hidden_cards() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::SearchChanged("sushi".to_string()));
    assert!(state.consume_dirty());

    // Recipe 1 is filtered out; toggling it changes nothing.
    let (mut next, effects) = update(state, Msg::DetailsToggled(1));
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn restored_favorites_round_trip_without_a_save_effect() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FavoriteToggled(2));
    let (state, effects) = update(state, Msg::FavoriteToggled(5));
    let saved = match &effects[0] {
        Effect::SaveFavorites(ids) => ids.clone(),
    };
    assert_eq!(saved, vec![2, 5]);

    let (restored, effects) = update(AppState::new(), Msg::RestoreFavorites(saved));
    assert!(effects.is_empty());
    assert_eq!(restored.favorites(), state.favorites());
}

#[test]
fn restore_tolerates_ids_missing_from_the_catalog() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::RestoreFavorites(vec![2, 999]));
    let (state, _) = update(state, Msg::FavoritesOnlySet(true));

    let view = state.view();
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].id, 2);
}

#[test]
fn favorites_only_toggle_applies_immediately() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::FavoritesOnlySet(true));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.view().counter, "Showing 0 of 8 recipes");
}
