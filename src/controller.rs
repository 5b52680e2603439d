use crate::config::FinderConfig;
use crate::error::LookupError;
use crate::lookup::RecipeLookup;
use crate::model::Meal;
use crate::overlay::{ClickTarget, Overlay};
use crate::render::{render_detail, render_page, render_results, DetailView, PageView, ResultsView};
use crate::state::{DisplayState, StateMachine};
use crate::store::RecordStore;
use log::{debug, error, info};

/// Identifies one submitted search.
///
/// Only the completion carrying the most recent ticket is applied; anything
/// older is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    id: u64,
    query: String,
}

impl SearchTicket {
    /// The trimmed query this ticket was issued for
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Owns all view state for the recipe search page
pub struct ViewController<L> {
    lookup: L,
    state: StateMachine,
    store: RecordStore,
    results: Option<ResultsView>,
    overlay: Overlay,
    input: String,
    dark: bool,
    suggestions: Vec<String>,
    preview_length: usize,
    latest_ticket: u64,
}

impl<L: RecipeLookup> ViewController<L> {
    pub fn new(lookup: L, config: &FinderConfig) -> Self {
        Self {
            lookup,
            state: StateMachine::new(),
            store: RecordStore::new(),
            results: None,
            overlay: Overlay::default(),
            input: String::new(),
            dark: false,
            suggestions: config.suggestions.clone(),
            preview_length: config.preview_length,
            latest_ticket: 0,
        }
    }

    /// Submit the search box contents and wait for the outcome.
    ///
    /// Blank input changes nothing and returns the current state.
    pub async fn submit(&mut self, raw_query: &str) -> DisplayState {
        let Some(ticket) = self.begin_search(raw_query) else {
            return self.state.current();
        };
        let result = self.lookup.search(ticket.query()).await;
        self.complete_search(&ticket, result);
        self.state.current()
    }

    /// Fill the search box with a canned query and submit it
    pub async fn choose_suggestion(&mut self, query: &str) -> DisplayState {
        self.input = query.to_string();
        self.submit(query).await
    }

    /// First half of a search: validate the input and enter `Loading`.
    ///
    /// Returns `None` (and leaves every piece of state alone) when the
    /// trimmed query is empty.
    pub fn begin_search(&mut self, raw_query: &str) -> Option<SearchTicket> {
        let query = raw_query.trim();
        if query.is_empty() {
            debug!("Ignoring blank search");
            return None;
        }

        self.latest_ticket += 1;
        self.input = raw_query.to_string();
        self.store.clear();
        self.results = None;
        self.state.show(DisplayState::Loading);
        info!("Searching recipes for {:?}", query);

        Some(SearchTicket {
            id: self.latest_ticket,
            query: query.to_string(),
        })
    }

    /// Second half of a search: map the lookup outcome onto a display state.
    ///
    /// Returns false when the ticket is stale and the result was dropped.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<Meal>, LookupError>,
    ) -> bool {
        if ticket.id != self.latest_ticket {
            debug!(
                "Dropping stale result for {:?} (ticket {}, latest {})",
                ticket.query, ticket.id, self.latest_ticket
            );
            return false;
        }

        match result {
            Ok(meals) if meals.is_empty() => {
                info!("No recipes found for {:?}", ticket.query);
                self.state.show(DisplayState::NoResults);
            }
            Ok(meals) => {
                info!("{} recipe(s) found for {:?}", meals.len(), ticket.query);
                self.results = Some(render_results(&meals, &ticket.query, self.preview_length));
                self.store.replace(meals);
                self.state.show(DisplayState::Results);
            }
            Err(err) => {
                error!("Error fetching recipes: {}", err);
                self.state.show(DisplayState::Error);
            }
        }
        true
    }

    /// Return to the welcome view, clearing the search box.
    ///
    /// Any search still in flight is abandoned.
    pub fn reset(&mut self) {
        self.latest_ticket += 1;
        self.input.clear();
        self.store.clear();
        self.results = None;
        self.overlay.close();
        self.state.show(DisplayState::Welcome);
    }

    /// Open the detail overlay for a card. Unknown ids are ignored.
    pub fn open_detail(&mut self, meal_id: &str) -> Option<&DetailView> {
        let Some(meal) = self.store.get(meal_id) else {
            debug!("No record with id {:?}", meal_id);
            return None;
        };
        let detail = render_detail(meal);
        Some(self.overlay.open(detail))
    }

    pub fn close_detail(&mut self) -> bool {
        self.overlay.close()
    }

    /// Keyboard handler; Escape closes the overlay
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.overlay.handle_key(key)
    }

    pub fn handle_overlay_click(&mut self, target: ClickTarget) -> bool {
        self.overlay.handle_click(target)
    }

    /// Follow the host's `prefers-color-scheme: dark` preference
    pub fn set_prefers_dark(&mut self, dark: bool) {
        if self.dark != dark {
            debug!("Colour scheme changed, dark = {}", dark);
        }
        self.dark = dark;
    }

    pub fn state(&self) -> DisplayState {
        self.state.current()
    }

    pub fn is_visible(&self, state: DisplayState) -> bool {
        self.state.is_visible(state)
    }

    /// True once after each entry into the results view
    pub fn take_fade_in(&mut self) -> bool {
        self.state.take_fade_in()
    }

    pub fn results(&self) -> Option<&ResultsView> {
        self.results.as_ref()
    }

    pub fn records(&self) -> &RecordStore {
        &self.store
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Render the whole page for the current view.
    ///
    /// Consumes the pending fade-in effect, like the browser would on paint.
    pub fn render_page(&mut self) -> String {
        let fade_in = self.state.take_fade_in();
        render_page(&PageView {
            state: self.state.current(),
            fade_in,
            input: &self.input,
            suggestions: &self.suggestions,
            results: self.results.as_ref(),
            detail: self.overlay.detail(),
            dark: self.dark,
        })
    }
}
