//=============================================================================
// File: src/hooks/use_click_outside.rs
//=============================================================================

// A document-wide click listener that reports, for every click, whether it
// landed on a tracked toggle button, inside a tracked panel, or elsewhere.
// The platform glue follows the same split as `compat.rs`.

use dioxus::prelude::*;
use futures::StreamExt;
use serde::Deserialize;

use super::scoped_listener::use_scoped_listener;

#[cfg(target_arch = "wasm32")]
use self::wasm32::DocumentClickHost;

#[cfg(not(target_arch = "wasm32"))]
use self::non_wasm32::DocumentClickHost;

/// Where a click landed relative to the tracked elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, strum::EnumIs)]
#[serde(rename_all = "kebab-case")]
pub enum ClickTarget {
    ToggleButton,
    Panel,
    Outside,
}

impl ClickTarget {
    /// The toggle button wins if the panel somehow contains it.
    pub fn classify(in_toggle_button: bool, in_panel: bool) -> Self {
        match (in_toggle_button, in_panel) {
            (true, _) => ClickTarget::ToggleButton,
            (false, true) => ClickTarget::Panel,
            (false, false) => ClickTarget::Outside,
        }
    }
}

/// DOM ids of the two elements a click is tested against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedElements {
    pub toggle_button_id: String,
    pub panel_id: String,
}

impl TrackedElements {
    pub fn new(prefix: &str) -> Self {
        Self {
            toggle_button_id: format!("{prefix}-toggle"),
            panel_id: format!("{prefix}-panel"),
        }
    }
}

/// Calls `on_click` with the classified target of every click on the
/// document while the calling component is mounted.
pub fn use_click_outside(tracked: TrackedElements, on_click: Callback<ClickTarget>) {
    let clicks = use_coroutine(move |mut rx: UnboundedReceiver<ClickTarget>| async move {
        while let Some(target) = rx.next().await {
            on_click.call(target);
        }
    });

    use_scoped_listener("document click", move || {
        DocumentClickHost::new(tracked, clicks.tx())
    });
}

/// # WebAssembly Implementation
/// Registers a `click` listener on `document` through `web_sys` and tests
/// containment with `Node::contains`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use futures::channel::mpsc::UnboundedSender;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, Node};

    use super::{ClickTarget, TrackedElements};
    use crate::error::DomError;
    use crate::hooks::scoped_listener::ListenerHost;

    pub struct DocumentClickHost {
        document: Document,
        tracked: TrackedElements,
        tx: UnboundedSender<ClickTarget>,
    }

    impl DocumentClickHost {
        pub fn new(
            tracked: TrackedElements,
            tx: UnboundedSender<ClickTarget>,
        ) -> Result<Self, DomError> {
            let document = web_sys::window()
                .ok_or(DomError::NoWindow)?
                .document()
                .ok_or(DomError::NoDocument)?;
            Ok(Self {
                document,
                tracked,
                tx,
            })
        }
    }

    fn contains(document: &Document, id: &str, node: Option<&Node>) -> bool {
        document
            .get_element_by_id(id)
            .map(|element| element.contains(node))
            .unwrap_or(false)
    }

    impl ListenerHost for DocumentClickHost {
        type Handle = Closure<dyn FnMut(Event)>;

        fn attach(&self) -> Result<Self::Handle, DomError> {
            let document = self.document.clone();
            let tracked = self.tracked.clone();
            let tx = self.tx.clone();

            let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let target = event.target();
                let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
                let click = ClickTarget::classify(
                    contains(&document, &tracked.toggle_button_id, node),
                    contains(&document, &tracked.panel_id, node),
                );
                // The receiver only goes away with the component.
                let _ = tx.unbounded_send(click);
            });

            self.document
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            Ok(on_click)
        }

        fn detach(&self, handle: Self::Handle) {
            if let Err(e) = self
                .document
                .remove_event_listener_with_callback("click", handle.as_ref().unchecked_ref())
            {
                dioxus_logger::tracing::warn!(
                    "failed to remove click listener: {}",
                    DomError::from(e)
                );
            }
        }
    }
}

/// # Webview Implementation
/// Desktop and mobile render into a webview, so the listener is installed
/// with `document::eval` and reports back over the eval channel.
#[cfg(not(target_arch = "wasm32"))]
mod non_wasm32 {
    use dioxus::core::Task;
    use dioxus::prelude::*;
    use futures::channel::mpsc::UnboundedSender;

    use super::{ClickTarget, TrackedElements};
    use crate::error::DomError;
    use crate::hooks::scoped_listener::ListenerHost;

    pub struct DocumentClickHost {
        tracked: TrackedElements,
        tx: UnboundedSender<ClickTarget>,
    }

    impl DocumentClickHost {
        pub fn new(
            tracked: TrackedElements,
            tx: UnboundedSender<ClickTarget>,
        ) -> Result<Self, DomError> {
            Ok(Self { tracked, tx })
        }

        pub(super) fn handler_key(&self) -> String {
            format!("__click_outside_{}", self.tracked.panel_id.replace('-', "_"))
        }
    }

    impl ListenerHost for DocumentClickHost {
        type Handle = Task;

        fn attach(&self) -> Result<Self::Handle, DomError> {
            let script = format!(
                r#"
                const toggle_id = "{toggle}";
                const panel_id = "{panel}";
                const handler = (event) => {{
                    const toggle = document.getElementById(toggle_id);
                    const panel = document.getElementById(panel_id);
                    let target = "outside";
                    if (toggle && toggle.contains(event.target)) {{
                        target = "toggle-button";
                    }} else if (panel && panel.contains(event.target)) {{
                        target = "panel";
                    }}
                    dioxus.send(target);
                }};
                window["{key}"] = handler;
                document.addEventListener("click", handler);
                "#,
                toggle = self.tracked.toggle_button_id,
                panel = self.tracked.panel_id,
                key = self.handler_key(),
            );

            let mut eval = document::eval(&script);
            let tx = self.tx.clone();
            let task = spawn(async move {
                while let Ok(target) = eval.recv::<ClickTarget>().await {
                    if tx.unbounded_send(target).is_err() {
                        break;
                    }
                }
            });
            Ok(task)
        }

        fn detach(&self, handle: Self::Handle) {
            handle.cancel();
            let key = self.handler_key();
            document::eval(&format!(
                r#"
                if (window["{key}"]) {{
                    document.removeEventListener("click", window["{key}"]);
                    delete window["{key}"];
                }}
                "#
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_the_toggle_button() {
        assert_eq!(ClickTarget::classify(true, false), ClickTarget::ToggleButton);
        assert_eq!(ClickTarget::classify(true, true), ClickTarget::ToggleButton);
        assert_eq!(ClickTarget::classify(false, true), ClickTarget::Panel);
        assert_eq!(ClickTarget::classify(false, false), ClickTarget::Outside);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn webview_handler_key_is_a_plain_identifier() {
        let (tx, _rx) = futures::channel::mpsc::unbounded();
        let host = non_wasm32::DocumentClickHost::new(TrackedElements::new("side-nav-3"), tx).unwrap();
        assert_eq!(host.handler_key(), "__click_outside_side_nav_3_panel");
    }

    #[test]
    fn tracked_ids_share_the_prefix() {
        let tracked = TrackedElements::new("side-nav-3");
        assert_eq!(tracked.toggle_button_id, "side-nav-3-toggle");
        assert_eq!(tracked.panel_id, "side-nav-3-panel");
    }
}
