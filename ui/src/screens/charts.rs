use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;

#[component]
pub fn Overview() -> Element {
    rsx! {
        EmptyState {
            title: "Overview".to_string(),
            description: Some("Protocol volume, liquidity and top movers.".to_string()),
            icon: Some("📊".to_string()),
        }
    }
}

#[component]
pub fn Accounts() -> Element {
    rsx! {
        EmptyState {
            title: "Accounts".to_string(),
            description: Some("Look up liquidity positions by wallet address.".to_string()),
            icon: Some("🔍".to_string()),
        }
    }
}

#[component]
pub fn Account(address: String) -> Element {
    rsx! {
        EmptyState {
            title: "Account".to_string(),
            description: Some(address),
            icon: Some("🔍".to_string()),
        }
    }
}

#[component]
pub fn Tokens() -> Element {
    rsx! {
        EmptyState {
            title: "Tokens".to_string(),
            description: Some("Every token traded on the exchange.".to_string()),
            icon: Some("🪙".to_string()),
        }
    }
}

#[component]
pub fn Token(address: String) -> Element {
    rsx! {
        EmptyState {
            title: "Token".to_string(),
            description: Some(address),
            icon: Some("🪙".to_string()),
        }
    }
}

#[component]
pub fn Pairs() -> Element {
    rsx! {
        EmptyState {
            title: "Pairs".to_string(),
            description: Some("Every trading pair and its reserves.".to_string()),
            icon: Some("🔗".to_string()),
        }
    }
}

#[component]
pub fn Pair(address: String) -> Element {
    rsx! {
        EmptyState {
            title: "Pair".to_string(),
            description: Some(address),
            icon: Some("🔗".to_string()),
        }
    }
}
