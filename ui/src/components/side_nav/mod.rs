//! The dashboard's side navigation: a fixed column on wide screens, a header
//! bar with a flyout menu on narrow ones.

mod flyout;
mod menu_content;
mod polling;
mod social_links;

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::config::SiteConfig;
use crate::hooks::{use_click_outside, use_media_query, ClickTarget, TrackedElements};

pub use flyout::{FlyoutEvent, FlyoutState, MenuToggleButton, MobileFlyout};
pub use menu_content::{CategoryHeader, MenuContent};
pub use polling::{elapsed_label, PollingIndicator, SessionPollingIndicator};
pub use social_links::SocialLinks;

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

/// Which presentation the viewport calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    Desktop { show_polling: bool },
    Mobile,
}

impl NavLayout {
    pub fn for_viewport(is_narrow: bool, is_medium: bool) -> Self {
        if is_narrow {
            NavLayout::Mobile
        } else {
            NavLayout::Desktop {
                show_polling: !is_medium,
            }
        }
    }
}

fn apply(mut flyout: Signal<FlyoutState>, event: FlyoutEvent) {
    let current = *flyout.peek();
    let next = current.transition(event);
    if next != current {
        debug!("flyout {:?} -> open={}", event, next.is_open());
        flyout.set(next);
    }
}

#[component]
fn BrandTitle(title: String) -> Element {
    rsx! {
        Link {
            class: "brand-title",
            to: "/",
            "{title}"
        }
    }
}

/// Responsive navigation shell. `current_path` comes from the router and
/// decides which menu link is highlighted.
#[component]
pub fn SideNav(current_path: String) -> Element {
    let config = use_context::<SiteConfig>();
    let is_narrow = use_media_query(&config.narrow_query());
    let is_medium = use_media_query(&config.medium_query());

    let flyout = use_signal(FlyoutState::default);
    let tracked = use_hook(|| {
        let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        TrackedElements::new(&format!("side-nav-{instance}"))
    });

    let on_document_click = use_callback(move |target: ClickTarget| {
        apply(flyout, FlyoutEvent::DocumentClick(target))
    });
    use_click_outside(tracked.clone(), on_document_click);

    match NavLayout::for_viewport(is_narrow(), is_medium()) {
        NavLayout::Desktop { show_polling } => rsx! {
            DesktopNav { current_path, show_polling }
        },
        NavLayout::Mobile => rsx! {
            MobileNav { current_path, tracked, flyout }
        },
    }
}

/// Full-height column: brand, network badge, menu, social links and,
/// when there is room, the polling indicator.
#[component]
pub fn DesktopNav(current_path: String, show_polling: bool) -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        nav {
            class: "side-nav desktop",
            div {
                class: "side-nav-column",
                div {
                    class: "side-nav-top",
                    BrandTitle { title: config.brand_title.clone() }
                    div { class: "network-label", "{config.network_label}" }
                    MenuContent { current_path }
                }
                div {
                    class: "side-nav-bottom",
                    SocialLinks { links: config.social_links.clone() }
                }
                if show_polling {
                    SessionPollingIndicator {}
                }
            }
        }
    }
}

/// Header bar with the menu behind a toggle. `tracked` must carry the ids
/// the document click listener tests against.
#[component]
pub fn MobileNav(current_path: String, tracked: TrackedElements, flyout: Signal<FlyoutState>) -> Element {
    let config = use_context::<SiteConfig>();
    let open = flyout.read().is_open();

    rsx! {
        nav {
            class: "side-nav mobile",
            div {
                class: "side-nav-bar",
                BrandTitle { title: config.brand_title.clone() }
                SocialLinks { links: config.social_links.clone() }
                MenuToggleButton {
                    id: tracked.toggle_button_id.clone(),
                    expanded: open,
                    on_press: move |_| apply(flyout, FlyoutEvent::TogglePressed),
                }
                MobileFlyout {
                    id: tracked.panel_id.clone(),
                    open,
                    MenuContent {
                        current_path,
                        on_link_activated: move |open: bool| apply(flyout, FlyoutEvent::Requested(open)),
                    }
                }
            }
        }
    }
}
