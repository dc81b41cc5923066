use crate::RecipeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the favorite set. Emitted after every favorite mutation;
    /// ids arrive in ascending order.
    SaveFavorites(Vec<RecipeId>),
}
