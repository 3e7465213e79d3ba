#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pagination/")]

//! # bubbletea-pagination
//!
//! A windowed page-number pagination component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, in the style of the bubbletea-widgets components.
//!
//! ## Overview
//!
//! The component shows a bounded window of page numbers around the current
//! page, with optional first/prev/next/last controls. Selecting a control
//! changes the page and notifies observers. It follows the Elm Architecture
//! with `update()` and `view()` methods, and can also be driven directly by
//! calling [`pagination::Model::show`] and friends from any UI layer.
//!
//! ## Features
//!
//! - **Sliding window** that stays centred on the current page and clamps at
//!   both ends
//! - **Observers** fired before and after every page change
//! - **Loop mode** where prev/next wrap around at the boundaries
//! - **Href mode** that carries the page number in a query parameter
//! - **Type-safe key bindings** for keyboard navigation
//! - **Theming** through lipgloss styles, plus HTML markup with configurable
//!   class names
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_pagination::prelude::*;
//!
//! let mut pagination = pagination_new(
//!     PaginationConfig::new().with_total_pages(10).with_loop(true),
//! )
//! .unwrap();
//!
//! pagination.show(10).unwrap();
//! let next = pagination
//!     .items()
//!     .iter()
//!     .find(|item| item.kind == ItemKind::Next)
//!     .unwrap();
//! assert_eq!(next.target_page, 1);
//! assert!(!next.is_disabled);
//! ```
//!
//! ## Key Bindings
//!
//! | Keys | Action |
//! |------|--------|
//! | `←` `h` `pgup` | previous page |
//! | `→` `l` `pgdown` | next page |
//! | `home` `g` | first page |
//! | `end` `G` | last page |

pub mod key;
pub mod pagination;

pub use key::{new_binding, with_disabled, with_help, with_keys_str, Binding, KeyMap, KeyPress};
pub use pagination::Model as Pagination;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pagination::prelude::*;
///
/// let pagination: Pagination = pagination_new(PaginationConfig::default()).unwrap();
/// assert_eq!(pagination.total_pages(), 1);
/// ```
pub mod prelude {
    pub use crate::key::{
        new_binding, with_disabled, with_help, with_keys_str, Binding, KeyMap, KeyPress,
    };
    pub use crate::pagination::{
        compute_window, new as pagination_new, Builder as PaginationBuilder,
        Config as PaginationConfig, ConfigError, DisplayItem, ItemClickMsg, ItemKind,
        KeyMap as PaginationKeyMap, Model as Pagination, PageChangedMsg, PageError, PageWindow,
        Styles as PaginationStyles,
    };
}
