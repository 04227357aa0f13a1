//! The mobile flyout: its open/closed state machine, the toggle button and
//! the panel that hosts the menu.

use dioxus::prelude::*;

use crate::components::icons::MenuIcon;
use crate::hooks::ClickTarget;

/// Something that can happen to the flyout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyoutEvent {
    TogglePressed,
    DocumentClick(ClickTarget),
    /// A menu link asked for the flyout to be shown or hidden.
    Requested(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlyoutState {
    open: bool,
}

impl FlyoutState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn transition(self, event: FlyoutEvent) -> Self {
        let open = match event {
            // The toggle only ever opens; closing is left to outside clicks
            // and link activation.
            FlyoutEvent::TogglePressed => true,
            FlyoutEvent::DocumentClick(target) if target.is_outside() => false,
            FlyoutEvent::DocumentClick(_) => self.open,
            FlyoutEvent::Requested(open) => open,
        };
        Self { open }
    }
}

#[component]
pub fn MenuToggleButton(id: String, expanded: bool, on_press: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            id: "{id}",
            class: "menu-toggle",
            r#type: "button",
            aria_label: "Open menu",
            aria_expanded: "{expanded}",
            onclick: move |evt| on_press.call(evt),
            MenuIcon {}
        }
    }
}

/// Hidden with `display: none` rather than unmounted, so the menu keeps its
/// expanded category between openings.
#[component]
pub fn MobileFlyout(id: String, open: bool, children: Element) -> Element {
    let display = if open { "block" } else { "none" };
    rsx! {
        div {
            id: "{id}",
            class: "menu-flyout",
            style: "display: {display};",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn opened() -> FlyoutState {
        FlyoutState::default().transition(FlyoutEvent::TogglePressed)
    }

    #[test]
    fn toggle_opens_a_closed_flyout() {
        assert!(!FlyoutState::default().is_open());
        assert!(opened().is_open());
    }

    #[test]
    fn toggle_keeps_an_open_flyout_open() {
        assert!(opened().transition(FlyoutEvent::TogglePressed).is_open());
    }

    #[test]
    fn outside_click_closes() {
        let state = opened().transition(FlyoutEvent::DocumentClick(ClickTarget::Outside));
        assert!(!state.is_open());
    }

    #[test]
    fn clicks_on_panel_or_toggle_keep_it_open() {
        for target in [ClickTarget::Panel, ClickTarget::ToggleButton] {
            let state = opened().transition(FlyoutEvent::DocumentClick(target));
            assert!(state.is_open(), "{target:?} closed the flyout");
        }
    }

    #[test]
    fn outside_click_on_closed_flyout_is_a_no_op() {
        let state = FlyoutState::default();
        assert_eq!(
            state.transition(FlyoutEvent::DocumentClick(ClickTarget::Outside)),
            state
        );
    }

    #[test]
    fn link_activation_closes() {
        assert!(!opened().transition(FlyoutEvent::Requested(false)).is_open());
    }

    #[test]
    fn closed_panel_is_hidden_but_rendered() {
        let html = testing::render(|| rsx! {
            MobileFlyout {
                id: "nav-panel",
                open: false,
                span { "menu body" }
            }
        });
        assert!(html.contains("display: none;"));
        assert!(html.contains("menu body"));
        assert!(html.contains("id=\"nav-panel\""));
    }

    #[test]
    fn open_panel_is_displayed() {
        let html = testing::render(|| rsx! {
            MobileFlyout {
                id: "nav-panel",
                open: true,
                span { "menu body" }
            }
        });
        assert!(html.contains("display: block;"));
    }
}
