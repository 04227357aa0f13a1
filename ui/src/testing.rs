//! Server-side rendering helpers for component tests.

use std::rc::Rc;

use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;

use crate::config::SiteConfig;

/// Renders `app` once and returns its HTML. Props builders, callbacks and
/// hooks all run inside the `VirtualDom`'s runtime.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Renders `app` with an in-memory history starting at `path` and the
/// default [`SiteConfig`] provided at the root.
pub fn render_at(path: &str, app: fn() -> Element) -> String {
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
    let mut dom = VirtualDom::new(app)
        .with_root_context(history)
        .with_root_context(SiteConfig::default());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Renders `body` as the only page of a router sitting at `path`, so
/// components built on `Link` can be rendered on their own.
pub fn render_routed(path: &str, body: fn() -> Element) -> String {
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
    let mut dom = VirtualDom::new(RoutedBody)
        .with_root_context(history)
        .with_root_context(SiteConfig::default())
        .with_root_context(Body(body));
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Clone, Copy)]
struct Body(fn() -> Element);

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum BodyRoute {
    #[route("/:..segments")]
    AnyPath { segments: Vec<String> },
}

#[component]
fn AnyPath(segments: Vec<String>) -> Element {
    let Body(body) = use_context::<Body>();
    let path = segments.join("/");
    rsx! {
        div {
            "data-path": "/{path}",
            {body()}
        }
    }
}

#[component]
fn RoutedBody() -> Element {
    rsx! { Router::<BodyRoute> {} }
}
