//! Tests for the pagination component.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::{KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::{Arc, Mutex};

    type Events = Arc<Mutex<Vec<(&'static str, usize)>>>;

    fn recorded(config: Config) -> (Model, Events) {
        let events: Events = Arc::new(Mutex::new(Vec::new()));
        let before = Arc::clone(&events);
        let after = Arc::clone(&events);
        let model = Builder::new(config)
            .on_before_page_change(move |p| before.lock().unwrap().push(("before", p)))
            .on_page_change(move |p| after.lock().unwrap().push(("page", p)))
            .build()
            .unwrap();
        (model, events)
    }

    fn ten_pages() -> Model {
        new(Config::new().with_total_pages(10)).unwrap()
    }

    fn item(model: &Model, kind: ItemKind) -> DisplayItem {
        model
            .items()
            .iter()
            .find(|i| i.kind == kind)
            .cloned()
            .unwrap()
    }

    fn pages(model: &Model) -> Vec<usize> {
        model
            .items()
            .iter()
            .filter(|i| i.kind == ItemKind::Page)
            .map(|i| i.target_page)
            .collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_new_renders_start_page() {
        let m = new(Config::new().with_total_pages(10).with_start_page(5)).unwrap();
        assert_eq!(m.current_page(), 5);
        assert_eq!(m.total_pages(), 10);
        assert_eq!(pages(&m), vec![3, 4, 5, 6, 7]);
        assert!(m.is_enabled());
    }

    #[test]
    fn test_item_order() {
        let m = ten_pages();
        let kinds: Vec<ItemKind> = m.items().iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ItemKind::First,
                ItemKind::Prev,
                ItemKind::Page,
                ItemKind::Page,
                ItemKind::Page,
                ItemKind::Page,
                ItemKind::Page,
                ItemKind::Next,
                ItemKind::Last,
            ]
        );
    }

    #[test]
    fn test_construction_rejects_bad_start_page() {
        let err = new(Config::new().with_total_pages(5).with_start_page(0)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStartPage { start_page: 0, .. }));

        let err = new(Config::new().with_total_pages(5).with_start_page(6)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStartPage { start_page: 6, .. }));
    }

    #[test]
    fn test_construction_rejects_non_integer_counts() {
        let err = new(Config::new().with_total_pages("many")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInteger { field: "totalPages", .. }));

        let err = new(Config::new().with_visible_pages("few")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInteger { field: "visiblePages", .. }));
    }

    #[test]
    fn test_show_out_of_range_keeps_state() {
        let mut m = ten_pages();
        m.show(4).unwrap();
        let before = m.items().to_vec();

        assert_eq!(
            m.show(0),
            Err(PageError::OutOfRange {
                page: 0,
                total_pages: 10
            })
        );
        assert!(m.show(11).is_err());
        assert_eq!(m.current_page(), 4);
        assert_eq!(m.items(), before.as_slice());
    }

    #[test]
    fn test_exactly_one_active_item() {
        let mut m = ten_pages();
        for page in 1..=10 {
            m.show(page).unwrap();
            let active: Vec<&DisplayItem> = m.items().iter().filter(|i| i.is_active).collect();
            assert_eq!(active.len(), 1, "page {page}");
            assert_eq!(active[0].kind, ItemKind::Page);
            assert_eq!(active[0].target_page, page);
        }
    }

    #[test]
    fn test_first_page_disables_first_and_prev() {
        let m = ten_pages();
        let first = item(&m, ItemKind::First);
        let prev = item(&m, ItemKind::Prev);
        assert!(first.is_disabled && prev.is_disabled);
        assert_eq!(prev.target_page, 1);
        assert!(!item(&m, ItemKind::Next).is_disabled);
        assert!(!item(&m, ItemKind::Last).is_disabled);
    }

    #[test]
    fn test_last_page_without_loop_disables_next() {
        let mut m = ten_pages();
        m.show(10).unwrap();
        let next = item(&m, ItemKind::Next);
        assert!(next.is_disabled);
        assert_eq!(next.target_page, 10);
        assert!(item(&m, ItemKind::Last).is_disabled);
    }

    #[test]
    fn test_loop_wraps_prev_and_next() {
        let mut m = new(Config::new().with_total_pages(10).with_loop(true)).unwrap();
        let prev = item(&m, ItemKind::Prev);
        assert_eq!(prev.target_page, 10);
        assert!(!prev.is_disabled);
        // First is still disabled on page 1 even when looping.
        assert!(item(&m, ItemKind::First).is_disabled);

        m.show(10).unwrap();
        let next = item(&m, ItemKind::Next);
        assert_eq!(next.target_page, 1);
        assert!(!next.is_disabled);
    }

    #[test]
    fn test_loop_with_single_page_disables_navigation() {
        let m = new(Config::new().with_total_pages(1).with_loop(true)).unwrap();
        for kind in [ItemKind::First, ItemKind::Prev, ItemKind::Next, ItemKind::Last] {
            let i = item(&m, kind);
            assert_eq!(i.target_page, 1);
            assert!(i.is_disabled, "{kind:?}");
        }
    }

    #[test]
    fn test_hidden_labels_omit_controls() {
        let labels = Labels {
            first: None,
            last: None,
            ..Labels::default()
        };
        let m = new(Config::new().with_total_pages(3).with_labels(labels)).unwrap();
        let kinds: Vec<ItemKind> = m.items().iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ItemKind::Prev,
                ItemKind::Page,
                ItemKind::Page,
                ItemKind::Page,
                ItemKind::Next
            ]
        );
    }

    #[test]
    fn test_empty_labels_count_as_unset() {
        let labels = Labels {
            first: Some(String::new()),
            page: Some(String::new()),
            ..Labels::default()
        };
        let m = new(Config::new().with_total_pages(5).with_labels(labels)).unwrap();
        assert!(m.items().iter().all(|i| i.kind != ItemKind::First));
        let page_labels: Vec<&str> = m
            .items()
            .iter()
            .filter(|i| i.kind == ItemKind::Page)
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(page_labels, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_huge_window_is_capped() {
        let huge = 1i64 << 40;
        let m = new(Config::new().with_total_pages(huge).with_visible_pages(huge)).unwrap();
        assert_eq!(m.visible_pages(), MAX_VISIBLE_PAGES);
        assert_eq!(pages(&m).len(), MAX_VISIBLE_PAGES);
        assert_eq!(pages(&m).first(), Some(&1));
    }

    #[test]
    fn test_label_templates() {
        let labels = Labels {
            page: Some("p{{page}}".to_string()),
            last: Some("Last ({{total_pages}})".to_string()),
            ..Labels::default()
        };
        let m = new(Config::new().with_total_pages(12).with_labels(labels)).unwrap();
        assert_eq!(item(&m, ItemKind::Page).label, "p1");
        assert_eq!(item(&m, ItemKind::Last).label, "Last (12)");
    }

    #[test]
    fn test_observer_order_on_show() {
        let (mut m, events) = recorded(Config::new().with_total_pages(10));
        events.lock().unwrap().clear();

        m.show(3).unwrap();
        assert_eq!(*events.lock().unwrap(), vec![("before", 3), ("page", 3)]);
    }

    #[test]
    fn test_construction_notifies_start_page() {
        let (_m, events) = recorded(Config::new().with_total_pages(10).with_start_page(2));
        assert_eq!(*events.lock().unwrap(), vec![("before", 2), ("page", 2)]);
    }

    #[test]
    fn test_construction_without_initiate_is_silent() {
        let (m, events) = recorded(
            Config::new()
                .with_total_pages(10)
                .with_start_page(7)
                .with_initiate_start_page_click(false),
        );
        assert!(events.lock().unwrap().is_empty());
        assert_eq!(m.current_page(), 7);
        assert_eq!(pages(&m), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_runtime_observers() {
        let mut m = ten_pages();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        m.on_page_change(move |p| sink.lock().unwrap().push(p));

        m.show(2).unwrap();
        m.show(9).unwrap();
        assert!(m.show(42).is_err());
        assert_eq!(*seen.lock().unwrap(), vec![2, 9]);
    }

    #[test]
    fn test_hide_only_one_page() {
        let (m, events) = recorded(Config::new().with_total_pages(1).with_hide_only_one_page(true));
        assert!(m.is_hidden());
        assert!(m.items().is_empty());
        assert_eq!(m.view(), "");
        assert_eq!(m.markup(), "");
        // Only the "changed" notification fires for a hidden pagination.
        assert_eq!(*events.lock().unwrap(), vec![("page", 1)]);
    }

    #[test]
    fn test_hide_only_one_page_without_initiate() {
        let (m, events) = recorded(
            Config::new()
                .with_total_pages(1)
                .with_hide_only_one_page(true)
                .with_initiate_start_page_click(false),
        );
        assert!(m.items().is_empty());
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_hidden_pagination_reappears_when_total_grows() {
        let mut m = new(Config::new().with_total_pages(1).with_hide_only_one_page(true)).unwrap();
        m.change_total_pages(4, 2).unwrap();
        assert!(!m.is_hidden());
        assert_eq!(pages(&m), vec![1, 2, 3, 4]);

        m.change_total_pages(1, 1).unwrap();
        assert!(m.items().is_empty());
    }

    #[test]
    fn test_change_total_pages() {
        let mut m = ten_pages();
        m.show(8).unwrap();

        let window = m.change_total_pages(20, 15).unwrap();
        assert_eq!(m.total_pages(), 20);
        assert_eq!(m.current_page(), 15);
        assert_eq!(window.numeric, vec![13, 14, 15, 16, 17]);
        assert_eq!(item(&m, ItemKind::Last).target_page, 20);
    }

    #[test]
    fn test_change_total_pages_is_all_or_nothing() {
        let mut m = ten_pages();
        m.show(8).unwrap();

        assert_eq!(m.change_total_pages(0, 1), Err(PageError::ZeroTotalPages));
        assert_eq!(
            m.change_total_pages(5, 8),
            Err(PageError::OutOfRange {
                page: 8,
                total_pages: 5
            })
        );
        assert_eq!(m.total_pages(), 10);
        assert_eq!(m.current_page(), 8);
    }

    #[test]
    fn test_click_navigates() {
        let mut m = ten_pages();
        // Items: First, Prev, 1..5, Next, Last.
        let window = m.click(5).unwrap();
        assert_eq!(window.current_page, 4);
        assert_eq!(m.current_page(), 4);

        let next_index = m.items().iter().position(|i| i.kind == ItemKind::Next).unwrap();
        m.click(next_index).unwrap();
        assert_eq!(m.current_page(), 5);
    }

    #[test]
    fn test_click_on_active_or_disabled_is_noop() {
        let (mut m, events) = recorded(Config::new().with_total_pages(10));
        events.lock().unwrap().clear();

        assert!(m.click(0).is_none()); // First, disabled on page 1
        assert!(m.click(2).is_none()); // page 1, active
        assert!(m.click(99).is_none());
        assert_eq!(m.current_page(), 1);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disable_and_enable() {
        let mut m = ten_pages();
        m.show(3).unwrap();
        m.disable();

        assert!(!m.is_enabled());
        assert_eq!(m.current_page(), 3);
        for i in m.items() {
            if i.is_active {
                assert_eq!(i.target_page, 3);
                assert!(!i.is_disabled);
            } else {
                assert!(i.is_disabled, "{:?} should be disabled", i.kind);
            }
        }
        assert!(m.click(5).is_none());
        assert!(m.update(key(KeyCode::Right)).is_none());
        assert_eq!(m.current_page(), 3);

        let window = m.enable();
        assert_eq!(window.current_page, 3);
        assert!(m.is_enabled());
        assert!(!item(&m, ItemKind::Next).is_disabled);
        assert!(m.click(5).is_some());
    }

    #[test]
    fn test_show_reenables_after_disable() {
        let mut m = ten_pages();
        m.disable();
        m.show(2).unwrap();
        assert!(m.is_enabled());
        assert!(m.keymap.next_page.enabled());
    }

    #[test]
    fn test_key_navigation() {
        let mut m = ten_pages();
        assert!(m.update(key(KeyCode::Left)).is_none()); // prev disabled on page 1

        assert!(m.update(key(KeyCode::Right)).is_some());
        assert_eq!(m.current_page(), 2);

        assert!(m.update(key(KeyCode::End)).is_some());
        assert_eq!(m.current_page(), 10);
        assert!(m.update(key(KeyCode::Char('l'))).is_none());

        assert!(m.update(key(KeyCode::Char('h'))).is_some());
        assert_eq!(m.current_page(), 9);

        assert!(m.update(key(KeyCode::Home)).is_some());
        assert_eq!(m.current_page(), 1);

        assert!(m.update(key(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn test_key_navigation_loops() {
        let mut m = new(Config::new().with_total_pages(3).with_loop(true)).unwrap();
        assert!(m.update(key(KeyCode::Left)).is_some());
        assert_eq!(m.current_page(), 3);
        assert!(m.update(key(KeyCode::Right)).is_some());
        assert_eq!(m.current_page(), 1);
    }

    #[test]
    fn test_item_click_msg_routing() {
        let mut a = ten_pages();
        let mut b = ten_pages();
        assert_ne!(a.id(), b.id());

        let msg = ItemClickMsg {
            id: b.id(),
            index: 4,
        };
        assert!(a.update(msg.into()).is_none());
        assert_eq!(a.current_page(), 1);
        assert!(b.update(msg.into()).is_some());
        assert_eq!(b.current_page(), 3);

        // Id 0 addresses any instance.
        assert!(a.update(ItemClickMsg { id: 0, index: 3 }.into()).is_some());
        assert_eq!(a.current_page(), 2);
    }

    #[test]
    fn test_unrelated_msg_ignored() {
        let mut m = ten_pages();
        assert!(m.update(Box::new("hello") as Msg).is_none());
    }

    #[test]
    fn test_href_mode_reads_and_writes_query() {
        let m = Builder::new(Config::new().with_total_pages(10).with_href("page"))
            .location_search("?q=rust&page=6")
            .build()
            .unwrap();
        assert_eq!(m.current_page(), 6);

        let next = item(&m, ItemKind::Next);
        assert_eq!(next.href.as_deref(), Some("?q=rust&page=7"));
        assert_eq!(item(&m, ItemKind::First).href.as_deref(), Some("?q=rust&page=1"));
    }

    #[test]
    fn test_href_mode_falls_back_to_first_page() {
        for search in ["", "?page=abc", "?page=0", "?page=11", "?other=3"] {
            let m = Builder::new(
                Config::new()
                    .with_total_pages(10)
                    .with_start_page(4)
                    .with_href("page"),
            )
            .location_search(search)
            .build()
            .unwrap();
            assert_eq!(m.current_page(), 1, "search {search:?}");
        }
    }

    #[test]
    fn test_no_href_outside_href_mode() {
        let m = ten_pages();
        assert!(m.items().iter().all(|i| i.href.is_none()));
    }

    #[test]
    fn test_view_marks_items() {
        let mut m = new(Config::new().with_total_pages(7)).unwrap();
        m.show(4).unwrap();
        let plain = lipgloss_extras::lipgloss::strip_ansi(&m.view());
        let words: Vec<&str> = plain.split_whitespace().collect();
        assert_eq!(
            words,
            vec!["First", "Previous", "2", "3", "4", "5", "6", "Next", "Last"]
        );
    }

    #[test]
    fn test_markup() {
        let mut m = new(Config::new().with_total_pages(3)).unwrap();
        m.show(3).unwrap();
        let html = m.markup();

        assert!(html.starts_with("<ul class=\"pagination\">"));
        assert!(html.ends_with("</ul>"));
        assert!(html.contains(
            "<li class=\"page-item active\" data-page=\"3\" data-page-type=\"page\"><a href=\"#\" class=\"page-link\">3</a></li>"
        ));
        assert!(html.contains("<li class=\"page-item next disabled\" data-page=\"3\""));
        assert!(html.contains("<li class=\"page-item prev\" data-page=\"2\""));
    }

    #[test]
    fn test_markup_escapes_labels() {
        let labels = Labels {
            next: Some("<b>&</b>".to_string()),
            ..Labels::default()
        };
        let m = new(Config::new().with_total_pages(2).with_labels(labels)).unwrap();
        assert!(m.markup().contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    }

    #[test]
    fn test_build_and_mark_are_separate_steps() {
        let m = ten_pages();
        let window = compute_window(6, 10, 5);
        let raw = m.build_display_items(&window);
        assert!(raw.iter().all(|i| !i.is_active && !i.is_disabled));
        assert_eq!(raw.len(), 9);

        let marked = m.mark_active_and_disabled(raw, &window);
        let active: Vec<usize> = marked
            .iter()
            .filter(|i| i.is_active)
            .map(|i| i.target_page)
            .collect();
        assert_eq!(active, vec![6]);
        assert!(marked.iter().all(|i| !i.is_disabled));
    }

    #[test]
    fn test_destroy_consumes_model() {
        let (m, events) = recorded(Config::new().with_total_pages(3));
        m.destroy();
        // Observers were dropped with the model.
        assert_eq!(Arc::strong_count(&events), 1);
    }

    #[test]
    fn test_default_model() {
        let m = Model::default();
        assert_eq!(m.current_page(), 1);
        assert_eq!(m.total_pages(), 1);
        assert_eq!(pages(&m), vec![1]);
    }
}
