//! Key bindings for keyboard navigation of the pagination.

use crate::key::{self, KeyMap as KeyMapTrait};

/// Key bindings that activate the navigation controls.
///
/// A key press follows the same rules as clicking the matching control: it
/// does nothing when that control would be disabled.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// Default keys: Home, 'g'
    pub first_page: key::Binding,
    /// Default keys: End, 'G'
    pub last_page: key::Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
        }
    }
}

impl KeyMap {
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.prev_page.set_enabled(enabled);
        self.next_page.set_enabled(enabled);
        self.first_page.set_enabled(enabled);
        self.last_page.set_enabled(enabled);
    }
}

impl KeyMapTrait for KeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.first_page, &self.last_page],
        ]
    }
}
