use super::{attr, text};
use crate::model::Meal;

/// The rendered results view for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    /// `Results for "{query}"`, unescaped
    pub header: String,
    /// `"{n} recipe(s) found"`
    pub count: String,
    /// Card markup, one card per record in response order
    pub cards: String,
}

pub fn results_header(query: &str) -> String {
    format!("Results for \"{}\"", query)
}

pub fn results_count(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} recipe{} found", count, plural)
}

/// Render a single result card.
///
/// The card carries its record id in `data-meal-id`; clicks are resolved
/// against the record store instead of embedding the record in markup.
pub fn render_card(meal: &Meal, preview_length: usize) -> String {
    let name = text(&meal.name);
    let area = text(&meal.area);
    format!(
        r#"<div class="recipe-card" data-meal-id="{id}">
    <div class="recipe-card-media">
        <img src="{thumb}" alt="{alt}">
        <span class="badge badge-area">{area}</span>
        <span class="badge badge-category">{category}</span>
    </div>
    <div class="recipe-card-body">
        <h3>{name}</h3>
        <p class="recipe-card-preview">{preview}</p>
        <div class="recipe-card-footer">
            <span>{area} Cuisine</span>
            <button type="button" class="view-recipe" data-meal-id="{id}">View Recipe</button>
        </div>
    </div>
</div>
"#,
        id = attr(&meal.id),
        thumb = attr(&meal.thumbnail),
        alt = attr(&meal.name),
        area = area,
        category = text(&meal.category),
        name = name,
        preview = text(&meal.instructions_preview(preview_length)),
    )
}

pub fn render_results(meals: &[Meal], query: &str, preview_length: usize) -> ResultsView {
    ResultsView {
        header: results_header(query),
        count: results_count(meals.len()),
        cards: meals
            .iter()
            .map(|meal| render_card(meal, preview_length))
            .collect(),
    }
}
