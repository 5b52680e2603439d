use super::{attr, text};
use crate::model::Meal;

/// Title and body of the detail overlay for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub meal_id: String,
    /// Record name, unescaped
    pub title: String,
    pub body: String,
}

pub fn render_detail(meal: &Meal) -> DetailView {
    let mut badges = format!(
        r#"<span class="badge badge-category">{}</span><span class="badge badge-area">{}</span>"#,
        text(&meal.category),
        text(&meal.area)
    );
    for tag in meal.tag_list() {
        badges.push_str(&format!(r#"<span class="badge badge-tag">{}</span>"#, text(&tag)));
    }

    let video = meal
        .video()
        .map(|url| {
            format!(
                r#"<a class="video-link" href="{}" target="_blank" rel="noopener noreferrer">Watch Video</a>"#,
                attr(url)
            )
        })
        .unwrap_or_default();

    let ingredients: String = meal
        .ingredients()
        .iter()
        .map(|item| {
            format!(
                r#"<li class="ingredient"><span class="measure">{}</span> <span class="name">{}</span></li>"#,
                text(&item.measure),
                text(&item.ingredient)
            )
        })
        .collect();

    let steps: String = meal
        .instruction_steps()
        .iter()
        .enumerate()
        .map(|(index, step)| {
            format!(
                r#"<div class="step"><span class="step-number">{}</span><p>{}</p></div>"#,
                index + 1,
                text(step)
            )
        })
        .collect();

    let body = format!(
        r#"<div class="recipe-detail">
    <div class="recipe-detail-media">
        <img src="{thumb}" alt="{alt}">
        <div class="badges">{badges}</div>
        {video}
    </div>
    <div class="recipe-detail-text">
        <h4>Ingredients</h4>
        <ul class="ingredients">{ingredients}</ul>
        <h4>Instructions</h4>
        <div class="steps">{steps}</div>
    </div>
</div>
"#,
        thumb = attr(&meal.thumbnail),
        alt = attr(&meal.name),
    );

    DetailView {
        meal_id: meal.id.clone(),
        title: meal.name.clone(),
        body,
    }
}
