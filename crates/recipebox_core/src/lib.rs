//! Recipebox core: pure state machine and view-model helpers.
mod catalog;
mod effect;
mod favorites;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use catalog::{Catalog, Recipe, RecipeId};
pub use effect::Effect;
pub use favorites::FavoriteSet;
pub use msg::Msg;
pub use query::{compute_visible, title_order};
pub use state::{AppState, SortMode};
pub use update::update;
pub use view_model::{AppViewModel, RecipeCardView, DETAILS_HIDE, DETAILS_SHOW};
