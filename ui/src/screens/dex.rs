use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;

#[component]
pub fn Swap() -> Element {
    rsx! {
        EmptyState {
            title: "Swap".to_string(),
            description: Some("Trade one token for another at the pool price.".to_string()),
            icon: Some("🔁".to_string()),
        }
    }
}

#[component]
pub fn Liquidity() -> Element {
    rsx! {
        EmptyState {
            title: "Liquidity".to_string(),
            description: Some("Provide liquidity to a pair and earn trading fees.".to_string()),
            icon: Some("💧".to_string()),
        }
    }
}

#[component]
pub fn Farms() -> Element {
    rsx! {
        EmptyState {
            title: "Farms".to_string(),
            description: Some("Stake LP tokens to earn rewards.".to_string()),
            icon: Some("🌾".to_string()),
        }
    }
}
