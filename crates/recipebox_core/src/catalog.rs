/// Identifier of a recipe in the catalog. Unique and positive.
pub type RecipeId = u32;

/// A single recipe record. Created once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// Declared order is display order.
    pub ingredients: Vec<String>,
    pub details: String,
}

/// The immutable, in-memory recipe list. Single source of truth for
/// everything shown; insertion order is the unsorted display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The fixed table of recipes the application ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            recipe(
                1,
                "Spaghetti Carbonara",
                &["spaghetti", "eggs", "pancetta", "parmesan"],
                "A classic Italian pasta made with eggs, cheese, pancetta, and pepper.",
            ),
            recipe(
                2,
                "Chicken Tikka Masala",
                &["chicken", "yogurt", "tomato", "garam masala"],
                "Chunks of roasted marinated chicken cooked in a spiced curry sauce.",
            ),
            recipe(
                3,
                "Avocado Toast",
                &["bread", "avocado", "salt", "pepper"],
                "Simple and quick breakfast: mashed avocado on toasted bread.",
            ),
            recipe(
                4,
                "Beef Tacos",
                &["taco shells", "ground beef", "lettuce", "cheese"],
                "Crunchy tacos stuffed with seasoned ground beef and toppings.",
            ),
            recipe(
                5,
                "Pancakes",
                &["flour", "milk", "egg", "baking powder"],
                "Fluffy pancakes served with syrup, butter, or fruit.",
            ),
            recipe(
                6,
                "Caesar Salad",
                &["romaine", "croutons", "parmesan", "caesar dressing"],
                "Crisp salad with romaine lettuce, croutons, and creamy dressing.",
            ),
            recipe(
                7,
                "Sushi Rolls",
                &["rice", "nori", "fish", "vegetables"],
                "Rice and fillings wrapped in seaweed, served with soy sauce.",
            ),
            recipe(
                8,
                "Chocolate Chip Cookies",
                &["flour", "sugar", "butter", "chocolate chips"],
                "Classic cookies loaded with chocolate chips.",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }
}

fn recipe(id: RecipeId, title: &str, ingredients: &[&str], details: &str) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        details: details.to_string(),
    }
}
