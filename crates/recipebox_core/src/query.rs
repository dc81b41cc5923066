use std::cmp::Ordering;

use crate::{Catalog, FavoriteSet, Recipe, SortMode};

/// Derives the visible subset and order of the catalog. Pure: never
/// mutates its inputs, identical inputs yield an identical sequence.
///
/// Filters apply in order: text query (substring match, case
/// insensitive, against title or any ingredient), then favorites-only,
/// then an optional stable sort by title. With `SortMode::None` the
/// catalog insertion order is preserved.
pub fn compute_visible<'a>(
    catalog: &'a Catalog,
    query: &str,
    favorites_only: bool,
    sort_mode: SortMode,
    favorites: &FavoriteSet,
) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();

    let mut visible: Vec<&Recipe> = catalog
        .iter()
        .filter(|recipe| needle.is_empty() || matches_query(recipe, &needle))
        .filter(|recipe| !favorites_only || favorites.contains(recipe.id))
        .collect();

    if sort_mode == SortMode::Title {
        visible.sort_by(|a, b| title_order(&a.title, &b.title));
    }

    visible
}

fn matches_query(recipe: &Recipe, needle: &str) -> bool {
    recipe.title.to_lowercase().contains(needle)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(needle))
}

/// Title comparator: case-insensitive primary key with a byte-order
/// tiebreak, so the ordering is total and identical on every host.
pub fn title_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
