//=============================================================================
// File: src/hooks/use_media_query.rs
//=============================================================================

// Conditionally export the correct module based on the target platform,
// following the established pattern in `compat.rs`.

use dioxus::prelude::*;
use futures::StreamExt;

use super::scoped_listener::use_scoped_listener;

#[cfg(target_arch = "wasm32")]
use self::wasm32::{current_match, MediaQueryHost};

#[cfg(not(target_arch = "wasm32"))]
use self::non_wasm32::{current_match, MediaQueryHost};

/// Tracks whether the CSS media `query` (e.g. `(max-width: 1080px)`)
/// currently matches, re-evaluated whenever the viewport changes.
///
/// Reads as `false` where media queries are unavailable. In desktop and
/// mobile webviews the answer arrives asynchronously over `document::eval`,
/// so the first frame always renders as if the query did not match; a
/// narrow window therefore paints the desktop column once before switching.
pub fn use_media_query(query: &str) -> Signal<bool> {
    let query = query.to_string();
    let initial = query.clone();
    let mut matches = use_signal(move || current_match(&initial));

    let updates = use_coroutine(move |mut rx: UnboundedReceiver<bool>| async move {
        while let Some(value) = rx.next().await {
            if *matches.peek() != value {
                matches.set(value);
            }
        }
    });

    use_scoped_listener("media query", move || {
        MediaQueryHost::new(query, updates.tx())
    });

    matches
}

/// # WebAssembly Implementation
/// Uses `window.matchMedia` and its `change` event directly.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use futures::channel::mpsc::UnboundedSender;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Event, MediaQueryList};

    use crate::error::DomError;
    use crate::hooks::scoped_listener::ListenerHost;

    fn media_query_list(query: &str) -> Result<MediaQueryList, DomError> {
        web_sys::window()
            .ok_or(DomError::NoWindow)?
            .match_media(query)?
            .ok_or_else(|| DomError::MediaQueryUnsupported(query.to_string()))
    }

    pub fn current_match(query: &str) -> bool {
        media_query_list(query)
            .map(|list| list.matches())
            .unwrap_or(false)
    }

    pub struct MediaQueryHost {
        list: MediaQueryList,
        tx: UnboundedSender<bool>,
    }

    impl MediaQueryHost {
        pub fn new(query: String, tx: UnboundedSender<bool>) -> Result<Self, DomError> {
            let list = media_query_list(&query)?;
            Ok(Self { list, tx })
        }
    }

    impl ListenerHost for MediaQueryHost {
        type Handle = Closure<dyn FnMut(Event)>;

        fn attach(&self) -> Result<Self::Handle, DomError> {
            let list = self.list.clone();
            let tx = self.tx.clone();
            let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let _ = tx.unbounded_send(list.matches());
            });
            self.list
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
            // The viewport may have changed between the first render and now.
            let _ = self.tx.unbounded_send(self.list.matches());
            Ok(on_change)
        }

        fn detach(&self, handle: Self::Handle) {
            if let Err(e) = self
                .list
                .remove_event_listener_with_callback("change", handle.as_ref().unchecked_ref())
            {
                dioxus_logger::tracing::warn!(
                    "failed to remove media query listener: {}",
                    DomError::from(e)
                );
            }
        }
    }
}

/// # Webview Implementation
/// Evaluates `matchMedia` inside the webview; the first message carries the
/// current state and every `change` event sends another.
#[cfg(not(target_arch = "wasm32"))]
mod non_wasm32 {
    use std::sync::atomic::{AtomicU64, Ordering};

    use dioxus::core::Task;
    use dioxus::prelude::*;
    use futures::channel::mpsc::UnboundedSender;

    use crate::error::DomError;
    use crate::hooks::scoped_listener::ListenerHost;

    static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

    pub fn current_match(_query: &str) -> bool {
        false
    }

    pub struct MediaQueryHost {
        query: String,
        pub(super) key: String,
        tx: UnboundedSender<bool>,
    }

    impl MediaQueryHost {
        pub fn new(query: String, tx: UnboundedSender<bool>) -> Result<Self, DomError> {
            let key = format!("__media_query_{}", NEXT_KEY.fetch_add(1, Ordering::Relaxed));
            Ok(Self { query, key, tx })
        }
    }

    impl ListenerHost for MediaQueryHost {
        type Handle = Task;

        fn attach(&self) -> Result<Self::Handle, DomError> {
            let script = format!(
                r#"
                const list = window.matchMedia({query:?});
                const handler = (event) => dioxus.send(event.matches);
                window["{key}"] = {{ list, handler }};
                list.addEventListener("change", handler);
                dioxus.send(list.matches);
                "#,
                query = self.query,
                key = self.key,
            );

            let mut eval = document::eval(&script);
            let tx = self.tx.clone();
            let task = spawn(async move {
                while let Ok(matches) = eval.recv::<bool>().await {
                    if tx.unbounded_send(matches).is_err() {
                        break;
                    }
                }
            });
            Ok(task)
        }

        fn detach(&self, handle: Self::Handle) {
            handle.cancel();
            let key = &self.key;
            document::eval(&format!(
                r#"
                const entry = window["{key}"];
                if (entry) {{
                    entry.list.removeEventListener("change", entry.handler);
                    delete window["{key}"];
                }}
                "#
            ));
        }
    }
}
