//! Inline SVG icons (Feather-style strokes), so no image assets are needed.

use dioxus::prelude::*;

#[component]
pub fn ChevronUp(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon chevron-up",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polyline { points: "18 15 12 9 6 15" }
        }
    }
}

#[component]
pub fn ChevronDown(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon chevron-down",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polyline { points: "6 9 12 15 18 9" }
        }
    }
}

/// Three horizontal bars.
#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "icon menu",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            line { x1: "3", y1: "6", x2: "21", y2: "6" }
            line { x1: "3", y1: "12", x2: "21", y2: "12" }
            line { x1: "3", y1: "18", x2: "21", y2: "18" }
        }
    }
}
