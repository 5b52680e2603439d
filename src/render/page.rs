use super::{attr, text, DetailView, ResultsView};
use crate::state::DisplayState;

/// Everything the page shell needs for one render
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub state: DisplayState,
    /// Consumed fade-in effect for the results section
    pub fade_in: bool,
    pub input: &'a str,
    pub suggestions: &'a [String],
    pub results: Option<&'a ResultsView>,
    pub detail: Option<&'a DetailView>,
    pub dark: bool,
}

fn section_class(view: &PageView<'_>, state: DisplayState) -> &'static str {
    match (view.state == state, state) {
        (false, _) => "hidden",
        (true, DisplayState::Results) if view.fade_in => "fade-in",
        (true, _) => "",
    }
}

/// Render a standalone HTML document for the current view
pub fn render_page(view: &PageView<'_>) -> String {
    let suggestions: String = view
        .suggestions
        .iter()
        .map(|query| {
            format!(
                r#"<button type="button" class="recipe-suggestion" data-query="{}">{}</button>"#,
                attr(query),
                text(query)
            )
        })
        .collect();

    let (header, count, cards) = view
        .results
        .map(|results| {
            (
                text(&results.header),
                text(&results.count),
                results.cards.as_str(),
            )
        })
        .unwrap_or_default();

    let modal = match view.detail {
        Some(detail) => format!(
            r#"<div id="recipeModal" class="modal" data-meal-id="{}">
    <div class="modal-panel">
        <h2 id="modalTitle">{}</h2>
        <div id="modalContent">{}</div>
    </div>
</div>"#,
            attr(&detail.meal_id),
            text(&detail.title),
            detail.body
        ),
        None => r#"<div id="recipeModal" class="modal hidden"></div>"#.to_string(),
    };

    let section = |state| section_class(view, state);

    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{root_class}">
<head>
<meta charset="utf-8">
<title>Recipe Finder</title>
</head>
<body class="{body_class}">
<form id="searchForm">
    <input id="searchInput" type="search" name="q" value="{input}" placeholder="Search for a recipe">
    <button type="submit">Search</button>
</form>
<section id="{welcome_id}" class="{welcome_class}">
    <h2>Find your next meal</h2>
    <div class="suggestions">{suggestions}</div>
</section>
<section id="{loading_id}" class="{loading_class}"><p>Searching recipes...</p></section>
<section id="{results_id}" class="{results_class}">
    <h2 id="resultsTitle">{header}</h2>
    <p id="resultsCount">{count}</p>
    <div id="recipeContainer">{cards}</div>
</section>
<section id="{none_id}" class="{none_class}"><p>No recipes found. Try another search.</p></section>
<section id="{error_id}" class="{error_class}"><p>Something went wrong. Please try again.</p></section>
{modal}
</body>
</html>
"#,
        root_class = if view.dark { "dark" } else { "" },
        body_class = if view.detail.is_some() { "overflow-hidden" } else { "" },
        input = attr(view.input),
        welcome_id = DisplayState::Welcome.section_id(),
        welcome_class = section(DisplayState::Welcome),
        loading_id = DisplayState::Loading.section_id(),
        loading_class = section(DisplayState::Loading),
        results_id = DisplayState::Results.section_id(),
        results_class = section(DisplayState::Results),
        none_id = DisplayState::NoResults.section_id(),
        none_class = section(DisplayState::NoResults),
        error_id = DisplayState::Error.section_id(),
        error_class = section(DisplayState::Error),
    )
}
