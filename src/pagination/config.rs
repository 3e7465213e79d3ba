//! Construction options for the pagination component.
//!
//! [`Config`] deserializes from the same camelCase option names the
//! twbs-pagination jQuery plugin uses, so existing option blobs load as-is:
//!
//! ```rust
//! use bubbletea_pagination::pagination::Config;
//!
//! let config = Config::from_json(r#"{
//!     "totalPages": "35",
//!     "visiblePages": 7,
//!     "first": false,
//!     "loop": true
//! }"#).unwrap();
//!
//! assert!(config.labels.first.is_none());
//! assert!(config.loop_pages);
//! ```

use super::error::ConfigError;
use super::types::ItemKind;
use serde::{Deserialize, Deserializer};

/// An integer option that may also arrive as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntValue {
    /// A plain number.
    Int(i64),
    /// Text parsed like an integer prefix (`"12"`, `" 12px"`).
    Text(String),
}

macro_rules! int_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for IntValue {
                fn from(n: $t) -> Self {
                    IntValue::Int(n as i64)
                }
            }
        )*
    };
}

int_value_from!(i32, i64, u32, usize);

impl From<&str> for IntValue {
    fn from(s: &str) -> Self {
        IntValue::Text(s.to_string())
    }
}

impl IntValue {
    /// Resolves the value, naming `field` in the error.
    pub fn resolve(&self, field: &'static str) -> Result<i64, ConfigError> {
        match self {
            IntValue::Int(n) => Ok(*n),
            IntValue::Text(s) => parse_int_prefix(s).ok_or_else(|| ConfigError::InvalidInteger {
                field,
                value: s.clone(),
            }),
        }
    }
}

/// Parses the leading integer of `s`: optional whitespace, an optional sign,
/// then at least one digit. Trailing text is ignored.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let n: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -n } else { n })
}

/// Label templates. `None` or an empty string leaves the control out
/// entirely; for numbered pages it falls back to the bare number.
///
/// Templates may contain the page and total-pages tokens, which are replaced
/// with the item's target page and the total page count.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// "First" control.
    #[serde(deserialize_with = "string_or_false")]
    pub first: Option<String>,
    /// "Previous" control.
    #[serde(deserialize_with = "string_or_false")]
    pub prev: Option<String>,
    /// "Next" control.
    #[serde(deserialize_with = "string_or_false")]
    pub next: Option<String>,
    /// "Last" control.
    #[serde(deserialize_with = "string_or_false")]
    pub last: Option<String>,
    /// Numbered pages. `None` shows the bare number.
    #[serde(deserialize_with = "string_or_false")]
    pub page: Option<String>,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first: Some("First".to_string()),
            prev: Some("Previous".to_string()),
            next: Some("Next".to_string()),
            last: Some("Last".to_string()),
            page: None,
        }
    }
}

impl Labels {
    /// The template for `kind`. Empty templates count as unset.
    pub fn for_kind(&self, kind: ItemKind) -> Option<&str> {
        let template = match kind {
            ItemKind::First => &self.first,
            ItemKind::Prev => &self.prev,
            ItemKind::Page => &self.page,
            ItemKind::Next => &self.next,
            ItemKind::Last => &self.last,
        };
        template.as_deref().filter(|t| !t.is_empty())
    }
}

// Accepts a string, null, or `false` (the jQuery plugin's way of turning an option off).
fn string_or_false<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Flag(bool),
    }

    match Option::<Label>::deserialize(deserializer)? {
        Some(Label::Text(s)) => Ok(Some(s)),
        Some(Label::Flag(true)) => Err(serde::de::Error::custom(
            "expected a string, null or false",
        )),
        Some(Label::Flag(false)) | None => Ok(None),
    }
}

/// Class names used by [`Model::markup`](super::Model::markup).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    /// Class of the `<ul>` container.
    pub pagination_class: String,
    /// Class of the "first" item.
    pub first_class: String,
    /// Class of the "previous" item.
    pub prev_class: String,
    /// Class of numbered page items.
    pub page_class: String,
    /// Class of the "next" item.
    pub next_class: String,
    /// Class of the "last" item.
    pub last_class: String,
    /// Added to the active item.
    pub active_class: String,
    /// Added to disabled items.
    pub disabled_class: String,
    /// Class of the inner anchor.
    pub anchor_class: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            pagination_class: "pagination".to_string(),
            first_class: "page-item first".to_string(),
            prev_class: "page-item prev".to_string(),
            page_class: "page-item".to_string(),
            next_class: "page-item next".to_string(),
            last_class: "page-item last".to_string(),
            active_class: "active".to_string(),
            disabled_class: "disabled".to_string(),
            anchor_class: "page-link".to_string(),
        }
    }
}

impl ClassNames {
    /// Base class for `kind`.
    pub fn for_kind(&self, kind: ItemKind) -> &str {
        match kind {
            ItemKind::First => &self.first_class,
            ItemKind::Prev => &self.prev_class,
            ItemKind::Page => &self.page_class,
            ItemKind::Next => &self.next_class,
            ItemKind::Last => &self.last_class,
        }
    }
}

/// Options fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Number of pages. Default 1.
    pub total_pages: IntValue,
    /// Page shown first. Default 1. Ignored in href mode.
    pub start_page: IntValue,
    /// Maximum number of page items shown at once. Default 5. Values above
    /// [`MAX_VISIBLE_PAGES`] are capped to it.
    pub visible_pages: IntValue,
    /// Route the initial render through `show`, firing both notifications.
    /// Default true.
    pub initiate_start_page_click: bool,
    /// Render nothing when there is a single page. Default false.
    pub hide_only_one_page: bool,
    /// Query parameter that carries the page number. Enables href mode.
    #[serde(deserialize_with = "string_or_false")]
    pub href: Option<String>,
    /// Token replaced with a page number in label templates.
    pub page_variable: String,
    /// Token replaced with the total page count in label templates.
    pub total_pages_variable: String,
    /// Label templates.
    #[serde(flatten)]
    pub labels: Labels,
    /// Wrap prev/next around at the boundaries. Default false.
    #[serde(rename = "loop")]
    pub loop_pages: bool,
    /// Markup class names.
    #[serde(flatten)]
    pub classes: ClassNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_pages: IntValue::Int(1),
            start_page: IntValue::Int(1),
            visible_pages: IntValue::Int(5),
            initiate_start_page_click: true,
            hide_only_one_page: false,
            href: None,
            page_variable: "{{page}}".to_string(),
            total_pages_variable: "{{total_pages}}".to_string(),
            labels: Labels::default(),
            loop_pages: false,
            classes: ClassNames::default(),
        }
    }
}

/// Upper bound on the window width. Larger `visible_pages` values are capped
/// so the window never allocates more than this many page numbers.
pub const MAX_VISIBLE_PAGES: usize = 1000;

/// The numeric options after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Counts {
    pub total_pages: usize,
    pub start_page: usize,
    pub visible_pages: usize,
}

impl Config {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON options object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the total page count (builder pattern).
    pub fn with_total_pages(mut self, total_pages: impl Into<IntValue>) -> Self {
        self.total_pages = total_pages.into();
        self
    }

    /// Sets the start page (builder pattern).
    pub fn with_start_page(mut self, start_page: impl Into<IntValue>) -> Self {
        self.start_page = start_page.into();
        self
    }

    /// Sets the window width (builder pattern).
    pub fn with_visible_pages(mut self, visible_pages: impl Into<IntValue>) -> Self {
        self.visible_pages = visible_pages.into();
        self
    }

    /// Enables or disables wrap-around for prev/next (builder pattern).
    pub fn with_loop(mut self, loop_pages: bool) -> Self {
        self.loop_pages = loop_pages;
        self
    }

    /// Sets whether a single page renders nothing (builder pattern).
    pub fn with_hide_only_one_page(mut self, hide: bool) -> Self {
        self.hide_only_one_page = hide;
        self
    }

    /// Sets whether construction fires notifications (builder pattern).
    pub fn with_initiate_start_page_click(mut self, initiate: bool) -> Self {
        self.initiate_start_page_click = initiate;
        self
    }

    /// Enables href mode with the given query parameter (builder pattern).
    pub fn with_href(mut self, param: impl Into<String>) -> Self {
        self.href = Some(param.into());
        self
    }

    /// Replaces the label templates (builder pattern).
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Replaces the markup class names (builder pattern).
    pub fn with_classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }

    /// Validates the numeric options.
    ///
    /// Total and visible pages must be positive integers and the start page
    /// must lie in `1..=total_pages`. Visible pages are capped at
    /// [`MAX_VISIBLE_PAGES`].
    pub(crate) fn counts(&self) -> Result<Counts, ConfigError> {
        let total_pages = positive(&self.total_pages, "totalPages")?;
        let visible_pages = positive(&self.visible_pages, "visiblePages")?;
        let start_page = self.start_page.resolve("startPage")?;
        if start_page < 1 || start_page > total_pages {
            return Err(ConfigError::InvalidStartPage {
                start_page,
                total_pages,
            });
        }
        Ok(Counts {
            total_pages: total_pages as usize,
            start_page: start_page as usize,
            visible_pages: (visible_pages as usize).min(MAX_VISIBLE_PAGES),
        })
    }

    /// Substitutes the first occurrence of each page token in `template`.
    pub(crate) fn make_text(&self, template: &str, page: usize, total_pages: usize) -> String {
        template
            .replacen(&self.page_variable, &page.to_string(), 1)
            .replacen(&self.total_pages_variable, &total_pages.to_string(), 1)
    }
}

fn positive(value: &IntValue, field: &'static str) -> Result<i64, ConfigError> {
    let n = value.resolve(field)?;
    if n < 1 {
        return Err(ConfigError::NotPositive { field, value: n });
    }
    Ok(n)
}
