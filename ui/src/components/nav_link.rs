use dioxus::prelude::*;

use crate::navigation::NavEntry;

#[derive(Props, Clone, PartialEq)]
pub struct NavLinkProps {
    pub entry: &'static NavEntry,

    pub current_path: String,

    // Receives `false` ("hide the flyout") whenever the link is clicked.
    #[props(default)]
    pub on_activate: Option<EventHandler<bool>>,
}

/// Tells the owner of the menu that a link was followed. The argument is the
/// requested flyout state, always `false`.
pub fn notify_activated(on_activate: Option<EventHandler<bool>>) {
    if let Some(handler) = on_activate {
        handler.call(false);
    }
}

/// A menu entry rendered through the router's `Link`, so navigation never
/// reloads the page. Highlighting follows the entry's own match rule rather
/// than the router's exact-match `active_class`.
#[component]
pub fn NavLink(props: NavLinkProps) -> Element {
    let entry = props.entry;
    let class = if entry.is_active(&props.current_path) {
        "nav-option active"
    } else {
        "nav-option"
    };
    let on_activate = props.on_activate;

    rsx! {
        Link {
            class: "{class}",
            to: entry.route,
            onclick: move |_evt: MouseEvent| notify_activated(on_activate),
            span { class: "nav-glyph", "{entry.glyph}" }
            "{entry.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::navigation::MENU_CATALOG;
    use crate::testing;

    fn catalog_entry(label: &str) -> &'static NavEntry {
        MENU_CATALOG.iter().find(|e| e.label == label).unwrap()
    }

    thread_local! {
        static REQUESTED: Cell<Option<bool>> = const { Cell::new(None) };
    }

    fn activate_with_handler() -> Element {
        let handler = EventHandler::new(|open: bool| REQUESTED.with(|r| r.set(Some(open))));
        notify_activated(Some(handler));
        rsx! {}
    }

    #[test]
    fn activation_asks_to_hide_the_flyout() {
        REQUESTED.with(|r| r.set(None));
        testing::render(activate_with_handler);
        assert_eq!(REQUESTED.with(Cell::get), Some(false));
    }

    #[test]
    fn activation_without_handler_is_a_no_op() {
        testing::render(|| {
            notify_activated(None);
            rsx! {}
        });
    }

    #[test]
    fn detail_path_highlights_its_listing() {
        let html = testing::render_routed("/token/0xabc", || {
            rsx! {
                NavLink {
                    entry: catalog_entry("Tokens"),
                    current_path: "/token/0xabc",
                }
            }
        });
        assert!(html.contains("class=\"nav-option active\""), "{html}");
        assert!(html.contains("href=\"/tokens\""));
        assert!(html.contains("Tokens"));
    }

    #[test]
    fn unrelated_link_stays_plain() {
        let html = testing::render_routed("/token/0xabc", || {
            rsx! {
                NavLink {
                    entry: catalog_entry("Swap"),
                    current_path: "/token/0xabc",
                }
            }
        });
        assert!(html.contains("class=\"nav-option\""), "{html}");
        assert!(!html.contains("active"));
        assert!(html.contains("href=\"/swap\""));
    }
}
