//! Windowed page-number pagination for Bubble Tea applications.
//!
//! The component renders a bounded run of page numbers around the current
//! page, optionally flanked by first/prev/next/last controls, and notifies
//! observers when a page is selected. It is a port of the twbs-pagination
//! jQuery plugin's behaviour onto the bubbletea-rs component model.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pagination::pagination::{new, Config};
//!
//! let mut pagination = new(
//!     Config::new()
//!         .with_total_pages(20)
//!         .with_visible_pages(5)
//!         .with_start_page(10),
//! )
//! .unwrap();
//!
//! assert_eq!(pagination.window().numeric, vec![8, 9, 10, 11, 12]);
//!
//! pagination.show(20).unwrap();
//! assert_eq!(pagination.window().numeric, vec![16, 17, 18, 19, 20]);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbletea_pagination::pagination::{self, Config, PageChangedMsg};
//!
//! struct App {
//!     pagination: pagination::Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let pagination = pagination::new(Config::new().with_total_pages(12)).unwrap();
//!         (Self { pagination }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(changed) = msg.downcast_ref::<PageChangedMsg>() {
//!             // load the rows for changed.page here
//!             let _ = changed.page;
//!             return None;
//!         }
//!         self.pagination.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.pagination.view()
//!     }
//! }
//! ```
//!
//! # Observers
//!
//! "Before change" observers run with the target page before the controls are
//! rebuilt; "changed" observers run after. Register them on the [`Builder`] to
//! see the notifications fired during construction.

pub mod config;
pub mod error;
pub mod keymap;
pub mod model;
pub mod query;
pub mod types;
pub mod view;
pub mod window;

#[cfg(test)]
mod tests;

pub use config::{ClassNames, Config, IntValue, Labels, MAX_VISIBLE_PAGES};
pub use error::{ConfigError, PageError};
pub use keymap::KeyMap;
pub use model::{new, Builder, Model};
pub use query::{generate_query_string, page_from_query_string};
pub use types::{DisplayItem, ItemClickMsg, ItemKind, Observer, PageChangedMsg};
pub use view::Styles;
pub use window::{compute_window, PageWindow};
