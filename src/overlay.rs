use crate::render::DetailView;

/// Where a click on the open overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the panel
    Backdrop,
    /// Anywhere inside the panel
    Panel,
}

/// The recipe detail overlay. Either closed or showing exactly one record.
#[derive(Debug, Default)]
pub struct Overlay {
    detail: Option<DetailView>,
}

impl Overlay {
    /// Show `detail`, replacing whatever was open
    pub fn open(&mut self, detail: DetailView) -> &DetailView {
        self.detail.insert(detail)
    }

    /// Returns false if it was already closed
    pub fn close(&mut self) -> bool {
        self.detail.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Page scrolling is locked exactly while the overlay is open
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Escape closes an open overlay; other keys are ignored
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        target == ClickTarget::Backdrop && self.close()
    }
}
