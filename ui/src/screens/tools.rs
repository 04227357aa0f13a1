use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;

#[component]
pub fn LpLocker() -> Element {
    rsx! {
        EmptyState {
            title: "LP Locker".to_string(),
            description: Some("Lock LP tokens for a fixed period.".to_string()),
            icon: Some("🔒".to_string()),
        }
    }
}

#[component]
pub fn Multisender() -> Element {
    rsx! {
        EmptyState {
            title: "Multisender".to_string(),
            description: Some("Send a token to many addresses in one transaction.".to_string()),
            icon: Some("📤".to_string()),
        }
    }
}

#[component]
pub fn Scanner() -> Element {
    rsx! {
        EmptyState {
            title: "Scanner".to_string(),
            description: Some("Inspect a token contract before trading it.".to_string()),
            icon: Some("📡".to_string()),
        }
    }
}
