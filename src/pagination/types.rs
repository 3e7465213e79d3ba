//! Core types for the pagination component.

use bubbletea_rs::Msg;

/// The kind of a rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Jump to the first page.
    First,
    /// Step back one page.
    Prev,
    /// A numbered page.
    Page,
    /// Step forward one page.
    Next,
    /// Jump to the last page.
    Last,
}

impl ItemKind {
    /// Lowercase name, as used in markup data attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::First => "first",
            ItemKind::Prev => "prev",
            ItemKind::Page => "page",
            ItemKind::Next => "next",
            ItemKind::Last => "last",
        }
    }
}

/// One rendered control.
///
/// Items are rebuilt on every render and never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// What the control does.
    pub kind: ItemKind,
    /// The page activating this control shows.
    pub target_page: usize,
    /// Set on the page item for the current page.
    pub is_active: bool,
    /// Set when the control cannot be activated.
    pub is_disabled: bool,
    /// Text after label template substitution.
    pub label: String,
    /// Link target in href mode.
    pub href: Option<String>,
}

impl DisplayItem {
    /// Reports whether activating this item would change the page.
    pub fn is_clickable(&self) -> bool {
        !self.is_active && !self.is_disabled
    }

    pub(crate) fn into_disabled(self) -> Self {
        let is_disabled = self.is_disabled || !self.is_active;
        Self {
            is_disabled,
            ..self
        }
    }
}

/// Asks the pagination with the matching id to activate the item at `index`.
///
/// Hosts that do their own hit-testing (mouse regions, list selection) send
/// this instead of calling [`Model::click`](super::Model::click).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemClickMsg {
    /// Target pagination id; `0` addresses any instance.
    pub id: i64,
    /// Index into the rendered items.
    pub index: usize,
}

/// Emitted through a `Cmd` after a page change driven by [`update`](super::Model::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangedMsg {
    /// Id of the pagination that changed.
    pub id: i64,
    /// The page now shown.
    pub page: usize,
}

impl From<ItemClickMsg> for Msg {
    fn from(msg: ItemClickMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PageChangedMsg> for Msg {
    fn from(msg: PageChangedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Observer callback, invoked with a page number.
pub type Observer = Box<dyn FnMut(usize) + Send>;
