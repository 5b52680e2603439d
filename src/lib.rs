pub mod config;
pub mod controller;
pub mod error;
pub mod lookup;
pub mod model;
pub mod overlay;
pub mod render;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use config::{load_config, FinderConfig};
pub use controller::{SearchTicket, ViewController};
pub use error::{FinderError, LookupError};
pub use lookup::{MealDbClient, RecipeLookup};
pub use model::{Ingredient, Meal, SearchResponse};
pub use overlay::ClickTarget;
pub use state::DisplayState;

/// Search TheMealDB with the loaded configuration.
///
/// Returns an empty `Vec` when nothing matches.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let meals = meal_finder::search_recipes("Arrabiata").await?;
/// for meal in meals {
///     println!("{}: {} ingredients", meal.name, meal.ingredients().len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<Vec<Meal>, FinderError> {
    let config = load_config()?;
    let client = MealDbClient::new(&config)?;
    Ok(client.search(query.trim()).await?)
}
