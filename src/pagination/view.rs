//! Rendering for the pagination: terminal output and HTML markup.

use super::model::Model;
use super::types::{DisplayItem, ItemKind};
use lipgloss_extras::prelude::*;

/// Terminal styles for each kind of control.
///
/// The active and disabled styles replace the kind style for items in that
/// state.
#[derive(Debug, Clone)]
pub struct Styles {
    /// "First" control.
    pub first: Style,
    /// "Previous" control.
    pub prev: Style,
    /// Numbered pages.
    pub page: Style,
    /// "Next" control.
    pub next: Style,
    /// "Last" control.
    pub last: Style,
    /// The current page.
    pub active: Style,
    /// Controls that cannot be activated.
    pub disabled: Style,
    /// Placed between controls.
    pub separator: String,
}

impl Default for Styles {
    fn default() -> Self {
        let nav = Style::new().foreground(Color::from("245"));
        Self {
            first: nav.clone(),
            prev: nav.clone(),
            page: Style::new(),
            next: nav.clone(),
            last: nav,
            active: Style::new().bold(true).underline(true).foreground(Color::from("212")),
            disabled: Style::new().foreground(Color::from("238")),
            separator: " ".to_string(),
        }
    }
}

impl Styles {
    fn for_item(&self, item: &DisplayItem) -> &Style {
        if item.is_active {
            return &self.active;
        }
        if item.is_disabled {
            return &self.disabled;
        }
        match item.kind {
            ItemKind::First => &self.first,
            ItemKind::Prev => &self.prev,
            ItemKind::Page => &self.page,
            ItemKind::Next => &self.next,
            ItemKind::Last => &self.last,
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Model {
    /// Renders the controls on one line.
    ///
    /// Returns an empty string when the pagination is hidden.
    ///
    /// ```rust
    /// use bubbletea_pagination::pagination::{new, Config};
    ///
    /// let pagination = new(Config::new().with_total_pages(3)).unwrap();
    /// let plain = lipgloss_extras::lipgloss::strip_ansi(&pagination.view());
    /// let words: Vec<&str> = plain.split_whitespace().collect();
    /// assert_eq!(words, ["First", "Previous", "1", "2", "3", "Next", "Last"]);
    /// ```
    pub fn view(&self) -> String {
        self.items()
            .iter()
            .map(|item| self.styles.for_item(item).render(&item.label))
            .collect::<Vec<_>>()
            .join(&self.styles.separator)
    }

    /// Renders the controls as a `<ul>` list for HTML hosts.
    ///
    /// Links point at `#` unless href mode is on.
    pub fn markup(&self) -> String {
        if self.items().is_empty() {
            return String::new();
        }
        let classes = &self.config().classes;
        let mut out = format!("<ul class=\"{}\">", escape_html(&classes.pagination_class));
        for item in self.items() {
            let mut class = classes.for_kind(item.kind).to_string();
            if item.is_active {
                class.push(' ');
                class.push_str(&classes.active_class);
            }
            if item.is_disabled {
                class.push(' ');
                class.push_str(&classes.disabled_class);
            }
            out.push_str(&format!(
                "<li class=\"{}\" data-page=\"{}\" data-page-type=\"{}\"><a href=\"{}\" class=\"{}\">{}</a></li>",
                escape_html(class.trim()),
                item.target_page,
                item.kind.as_str(),
                escape_html(item.href.as_deref().unwrap_or("#")),
                escape_html(&classes.anchor_class),
                escape_html(&item.label),
            ));
        }
        out.push_str("</ul>");
        out
    }
}
