use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;

#[component]
pub fn Cmc() -> Element {
    rsx! {
        EmptyState {
            title: "CMC".to_string(),
            description: Some("CoinMarketCap listing details.".to_string()),
            icon: Some("🌐".to_string()),
        }
    }
}

#[component]
pub fn Coingecko() -> Element {
    rsx! {
        EmptyState {
            title: "Coingecko".to_string(),
            description: Some("CoinGecko listing details.".to_string()),
            icon: Some("🌐".to_string()),
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        EmptyState {
            title: "Page not found".to_string(),
            description: Some(format!("Nothing lives at {path}.")),
        }
    }
}
