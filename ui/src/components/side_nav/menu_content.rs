use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use strum::IntoEnumIterator;

use crate::components::icons::{ChevronDown, ChevronUp};
use crate::components::nav_link::NavLink;
use crate::navigation::{ActiveSubmenu, Category};

#[derive(Props, Clone, PartialEq)]
pub struct MenuContentProps {
    pub current_path: String,

    /// Called with `false` when a link is clicked; the mobile layout uses it
    /// to hide the flyout.
    #[props(optional)]
    pub on_link_activated: Option<EventHandler<bool>>,
}

/// The four collapsible categories. At most one is expanded at a time.
#[component]
pub fn MenuContent(props: MenuContentProps) -> Element {
    let mut active = use_signal(ActiveSubmenu::default);

    rsx! {
        div {
            class: "menu-content",
            for category in Category::iter() {
                div {
                    key: "{category.label()}",
                    class: "nav-category",
                    CategoryHeader {
                        category,
                        open: active.read().is_open(category),
                        on_toggle: move |_| {
                            active.with_mut(|submenu| submenu.toggle(category));
                            debug!("submenu now {:?}", active.peek().open());
                        },
                    }
                    if active.read().is_open(category) {
                        div {
                            class: "submenu",
                            for entry in category.entries() {
                                NavLink {
                                    key: "{entry.route}",
                                    entry,
                                    current_path: props.current_path.clone(),
                                    on_activate: props.on_link_activated,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategoryHeader(category: Category, open: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "nav-option category-header",
            r#type: "button",
            aria_expanded: "{open}",
            onclick: move |evt| on_toggle.call(evt),
            span { class: "nav-glyph", "{category.glyph()}" }
            span { class: "category-label", "{category.label()}" }
            if open {
                ChevronUp {}
            } else {
                ChevronDown {}
            }
        }
    }
}
