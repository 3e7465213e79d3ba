//! The pagination model: page state, display items, and observers.

use super::config::{Config, Counts};
use super::error::{ConfigError, PageError};
use super::keymap::KeyMap;
use super::query::{generate_query_string, page_from_query_string};
use super::types::{DisplayItem, ItemClickMsg, ItemKind, Observer, PageChangedMsg};
use super::view::Styles;
use super::window::{compute_window, PageWindow};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, trace};

// Instance ids route ItemClickMsg to the right pagination.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

fn notify(observers: &mut [Observer], page: usize) {
    for observer in observers.iter_mut() {
        observer(page);
    }
}

/// Collects observers and host context before the first render.
///
/// Observers registered here see the notifications fired during construction.
///
/// ```rust
/// use bubbletea_pagination::pagination::{Builder, Config};
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let pagination = Builder::new(Config::new().with_total_pages(10).with_start_page(4))
///     .on_page_change(move |page| sink.lock().unwrap().push(page))
///     .build()
///     .unwrap();
///
/// assert_eq!(pagination.current_page(), 4);
/// assert_eq!(*seen.lock().unwrap(), vec![4]);
/// ```
pub struct Builder {
    config: Config,
    search: String,
    before_change: Vec<Observer>,
    on_change: Vec<Observer>,
    styles: Styles,
    keymap: KeyMap,
}

impl Builder {
    /// Starts a builder from the given options.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            search: String::new(),
            before_change: Vec::new(),
            on_change: Vec::new(),
            styles: Styles::default(),
            keymap: KeyMap::default(),
        }
    }

    /// Registers an observer fired with the target page before each render.
    pub fn on_before_page_change(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.before_change.push(Box::new(f));
        self
    }

    /// Registers an observer fired with the new page after each render.
    pub fn on_page_change(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_change.push(Box::new(f));
        self
    }

    /// The host's current query string, used in href mode.
    pub fn location_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Replaces the terminal styles.
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings.
    pub fn keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Validates the options and performs the initial render.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the page counts are not positive
    /// integers or the start page lies outside `1..=total_pages`.
    pub fn build(self) -> Result<Model, ConfigError> {
        let counts = self.config.counts()?;
        Ok(self.assemble(counts))
    }

    fn assemble(self, counts: Counts) -> Model {
        let mut model = Model {
            id: next_id(),
            config: self.config,
            total_pages: counts.total_pages,
            visible_pages: counts.visible_pages,
            current_page: counts.start_page,
            items: Vec::new(),
            enabled: true,
            search: self.search,
            before_change: self.before_change,
            on_change: self.on_change,
            styles: self.styles,
            keymap: self.keymap,
        };

        if model.is_hidden() {
            debug!(id = model.id, "single page with hideOnlyOnePage set, rendering nothing");
            if model.config.initiate_start_page_click {
                notify(&mut model.on_change, 1);
            }
            return model;
        }

        let mut start_page = counts.start_page;
        if let Some(param) = &model.config.href {
            start_page = page_from_query_string(&model.search, param)
                .filter(|page| (1..=counts.total_pages as i64).contains(page))
                .map_or(1, |page| page as usize);
        }

        if model.config.initiate_start_page_click {
            model.show_unchecked(start_page);
        } else {
            model.current_page = start_page;
            model.render(start_page);
        }
        model
    }
}

/// A windowed page-number pagination control.
///
/// The model owns the current page and the rendered [`DisplayItem`]s. Page
/// changes go through [`show`](Model::show), which notifies the "before
/// change" observers, rebuilds the items, and then notifies the "changed"
/// observers.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagination::pagination::{new, Config, ItemKind};
///
/// let mut pagination = new(Config::new().with_total_pages(10)).unwrap();
/// let window = pagination.show(5).unwrap();
/// assert_eq!(window.numeric, vec![3, 4, 5, 6, 7]);
///
/// let active: Vec<_> = pagination.items().iter().filter(|i| i.is_active).collect();
/// assert_eq!(active.len(), 1);
/// assert_eq!(active[0].kind, ItemKind::Page);
/// assert_eq!(active[0].target_page, 5);
///
/// assert!(pagination.show(11).is_err());
/// assert_eq!(pagination.current_page(), 5);
/// ```
pub struct Model {
    id: i64,
    config: Config,
    total_pages: usize,
    visible_pages: usize,
    current_page: usize,
    items: Vec<DisplayItem>,
    enabled: bool,
    search: String,
    before_change: Vec<Observer>,
    on_change: Vec<Observer>,
    /// Terminal styles used by [`view`](Model::view).
    pub styles: Styles,
    /// Key bindings handled by [`update`](Model::update).
    pub keymap: KeyMap,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("current_page", &self.current_page)
            .field("total_pages", &self.total_pages)
            .field("visible_pages", &self.visible_pages)
            .field("enabled", &self.enabled)
            .field("items", &self.items)
            .field("before_change", &self.before_change.len())
            .field("on_change", &self.on_change.len())
            .finish_non_exhaustive()
    }
}

impl Default for Model {
    fn default() -> Self {
        Builder::new(Config::default()).assemble(Counts {
            total_pages: 1,
            start_page: 1,
            visible_pages: 5,
        })
    }
}

impl Model {
    /// Unique id of this instance, matched against [`ItemClickMsg::id`].
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The options this pagination was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The page currently shown.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The total page count.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The configured window width.
    pub fn visible_pages(&self) -> usize {
        self.visible_pages
    }

    /// The rendered controls, in display order.
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    /// The window for the current page.
    pub fn window(&self) -> PageWindow {
        compute_window(self.current_page, self.total_pages, self.visible_pages)
    }

    /// Whether clicks and key bindings are handled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the pagination renders nothing because there is a single page
    /// and `hide_only_one_page` is set.
    pub fn is_hidden(&self) -> bool {
        self.config.hide_only_one_page && self.total_pages == 1
    }

    /// Registers an observer fired with the target page before each render.
    pub fn on_before_page_change(&mut self, f: impl FnMut(usize) + Send + 'static) {
        self.before_change.push(Box::new(f));
    }

    /// Registers an observer fired with the new page after each render.
    pub fn on_page_change(&mut self, f: impl FnMut(usize) + Send + 'static) {
        self.on_change.push(Box::new(f));
    }

    /// Shows `page` and returns the window that was rendered.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::OutOfRange`] when `page` lies outside
    /// `1..=total_pages`. Nothing changes in that case.
    pub fn show(&mut self, page: usize) -> Result<PageWindow, PageError> {
        check_page(page, self.total_pages)?;
        Ok(self.show_unchecked(page))
    }

    fn show_unchecked(&mut self, page: usize) -> PageWindow {
        debug!(id = self.id, page, total_pages = self.total_pages, "showing page");
        self.current_page = page;
        notify(&mut self.before_change, page);
        let window = self.render(page);
        self.set_enabled(true);
        notify(&mut self.on_change, page);
        window
    }

    fn render(&mut self, page: usize) -> PageWindow {
        let window = compute_window(page, self.total_pages, self.visible_pages);
        self.items = if self.is_hidden() {
            Vec::new()
        } else {
            let items = self.build_display_items(&window);
            self.mark_active_and_disabled(items, &window)
        };
        window
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.keymap.set_enabled(enabled);
    }

    // Prev/next only wrap when there is somewhere to wrap to.
    fn looping(&self) -> bool {
        self.config.loop_pages && self.total_pages > 1
    }

    fn target_for(&self, kind: ItemKind, page: usize) -> usize {
        let total = self.total_pages;
        match kind {
            ItemKind::First => 1,
            ItemKind::Last => total,
            ItemKind::Page => page,
            ItemKind::Prev if page > 1 => page - 1,
            ItemKind::Prev if self.looping() => total,
            ItemKind::Prev => 1,
            ItemKind::Next if page < total => page + 1,
            ItemKind::Next if self.looping() => 1,
            ItemKind::Next => total,
        }
    }

    fn disabled_for(&self, kind: ItemKind, current: usize) -> bool {
        match kind {
            ItemKind::Page => false,
            ItemKind::First => current == 1,
            ItemKind::Last => current == self.total_pages,
            ItemKind::Prev => !self.looping() && current == 1,
            ItemKind::Next => !self.looping() && current == self.total_pages,
        }
    }

    fn make_item(&self, kind: ItemKind, target_page: usize) -> DisplayItem {
        let label = match self.config.labels.for_kind(kind) {
            Some(template) => self.config.make_text(template, target_page, self.total_pages),
            None => target_page.to_string(),
        };
        let href = self
            .config
            .href
            .as_deref()
            .map(|param| generate_query_string(target_page, &self.search, param));
        DisplayItem {
            kind,
            target_page,
            is_active: false,
            is_disabled: false,
            label,
            href,
        }
    }

    /// Builds the controls for `window` in display order: first, prev, one
    /// item per page number, next, last. Controls without a label are left
    /// out. The returned items carry no active or disabled state yet.
    pub fn build_display_items(&self, window: &PageWindow) -> Vec<DisplayItem> {
        let current = window.current_page;
        let labels = &self.config.labels;
        let mut items = Vec::with_capacity(window.numeric.len() + 4);

        for kind in [ItemKind::First, ItemKind::Prev] {
            if labels.for_kind(kind).is_some() {
                items.push(self.make_item(kind, self.target_for(kind, current)));
            }
        }
        items.extend(
            window
                .numeric
                .iter()
                .map(|&page| self.make_item(ItemKind::Page, page)),
        );
        for kind in [ItemKind::Next, ItemKind::Last] {
            if labels.for_kind(kind).is_some() {
                items.push(self.make_item(kind, self.target_for(kind, current)));
            }
        }
        items
    }

    /// Sets the active and disabled state of each item for `window`.
    pub fn mark_active_and_disabled(
        &self,
        items: Vec<DisplayItem>,
        window: &PageWindow,
    ) -> Vec<DisplayItem> {
        let current = window.current_page;
        items
            .into_iter()
            .map(|item| DisplayItem {
                is_active: item.kind == ItemKind::Page && item.target_page == current,
                is_disabled: self.disabled_for(item.kind, current),
                ..item
            })
            .collect()
    }

    /// Re-renders at the current page and turns click handling back on.
    pub fn enable(&mut self) -> PageWindow {
        debug!(id = self.id, "enabling pagination");
        self.show_unchecked(self.current_page)
    }

    /// Stops click and key handling and marks every non-active item disabled.
    /// The current page is kept.
    pub fn disable(&mut self) {
        debug!(id = self.id, "disabling pagination");
        self.set_enabled(false);
        self.items = std::mem::take(&mut self.items)
            .into_iter()
            .map(DisplayItem::into_disabled)
            .collect();
    }

    /// Replaces the total page count and shows `current_page`.
    ///
    /// # Errors
    ///
    /// Fails without changing anything when `total_pages` is zero or
    /// `current_page` lies outside `1..=total_pages`.
    pub fn change_total_pages(
        &mut self,
        total_pages: usize,
        current_page: usize,
    ) -> Result<PageWindow, PageError> {
        if total_pages == 0 {
            return Err(PageError::ZeroTotalPages);
        }
        check_page(current_page, total_pages)?;
        debug!(id = self.id, from = self.total_pages, to = total_pages, "changing total pages");
        self.total_pages = total_pages;
        Ok(self.show_unchecked(current_page))
    }

    /// Activates the rendered item at `index`.
    ///
    /// Returns the new window, or `None` when the pagination is disabled, the
    /// index is out of bounds, or the item is disabled or already active.
    pub fn click(&mut self, index: usize) -> Option<PageWindow> {
        if !self.enabled {
            trace!(id = self.id, index, "click ignored, pagination disabled");
            return None;
        }
        let item = self.items.get(index)?;
        if !item.is_clickable() {
            trace!(id = self.id, index, kind = item.kind.as_str(), "click ignored");
            return None;
        }
        let target = item.target_page;
        self.show(target).ok()
    }

    /// Activates a navigation control by kind, whether or not it is rendered.
    fn activate(&mut self, kind: ItemKind) -> Option<PageWindow> {
        if !self.enabled || self.is_hidden() {
            return None;
        }
        let current = self.current_page;
        let target = self.target_for(kind, current);
        if self.disabled_for(kind, current) || target == current {
            return None;
        }
        self.show(target).ok()
    }

    fn page_changed_cmd(&self, page: usize) -> Cmd {
        let msg = PageChangedMsg { id: self.id, page };
        Box::pin(async move { Some(Box::new(msg) as Msg) })
    }

    /// Handles [`ItemClickMsg`]s and key presses.
    ///
    /// When the page changes, the returned command yields a
    /// [`PageChangedMsg`] for the parent model.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(click) = msg.downcast_ref::<ItemClickMsg>() {
            if click.id > 0 && click.id != self.id {
                return None;
            }
            let window = self.click(click.index)?;
            return Some(self.page_changed_cmd(window.current_page));
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let kind = if self.keymap.next_page.matches(key_msg) {
                ItemKind::Next
            } else if self.keymap.prev_page.matches(key_msg) {
                ItemKind::Prev
            } else if self.keymap.first_page.matches(key_msg) {
                ItemKind::First
            } else if self.keymap.last_page.matches(key_msg) {
                ItemKind::Last
            } else {
                return None;
            };
            let window = self.activate(kind)?;
            return Some(self.page_changed_cmd(window.current_page));
        }

        None
    }

    /// Drops the rendered items and all observers. The model cannot be used
    /// afterwards.
    pub fn destroy(mut self) {
        debug!(id = self.id, "destroying pagination");
        self.items.clear();
        self.before_change.clear();
        self.on_change.clear();
    }
}

fn check_page(page: usize, total_pages: usize) -> Result<(), PageError> {
    if page < 1 || page > total_pages {
        return Err(PageError::OutOfRange { page, total_pages });
    }
    Ok(())
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

/// Builds a pagination without observers.
///
/// Shorthand for `Builder::new(config).build()`.
pub fn new(config: Config) -> Result<Model, ConfigError> {
    Builder::new(config).build()
}
