/// The view currently shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Welcome,
    Loading,
    Results,
    NoResults,
    Error,
}

impl DisplayState {
    pub const ALL: [DisplayState; 5] = [
        DisplayState::Welcome,
        DisplayState::Loading,
        DisplayState::Results,
        DisplayState::NoResults,
        DisplayState::Error,
    ];

    /// Element id of the page section that shows this state
    pub const fn section_id(self) -> &'static str {
        match self {
            Self::Welcome => "welcomeSection",
            Self::Loading => "loadingState",
            Self::Results => "resultsSection",
            Self::NoResults => "noResults",
            Self::Error => "errorState",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Loading => "loading",
            Self::Results => "results",
            Self::NoResults => "no-results",
            Self::Error => "error",
        }
    }
}

/// Holds the single active [`DisplayState`].
///
/// [`StateMachine::show`] is the only way to change it, so activating one
/// state always deactivates the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMachine {
    current: DisplayState,
    fade_in_pending: bool,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> DisplayState {
        self.current
    }

    /// Activate `next`, returning the state it replaced
    pub fn show(&mut self, next: DisplayState) -> DisplayState {
        let previous = self.current;
        self.current = next;
        self.fade_in_pending = next == DisplayState::Results;
        previous
    }

    pub fn is_visible(&self, state: DisplayState) -> bool {
        self.current == state
    }

    /// Every state paired with its visibility, in section order
    pub fn sections(&self) -> impl Iterator<Item = (DisplayState, bool)> + '_ {
        DisplayState::ALL
            .into_iter()
            .map(move |state| (state, self.is_visible(state)))
    }

    /// True once after entering `Results`, false on every later call
    pub fn take_fade_in(&mut self) -> bool {
        std::mem::take(&mut self.fade_in_pending)
    }
}
