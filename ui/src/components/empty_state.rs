// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    icon: Option<String>,
}

/// A dashed placeholder panel for pages whose content lives elsewhere.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            if let Some(icon) = props.icon {
                div { class: "empty-state-icon", "{icon}" }
            }

            h4 { "{props.title}" }

            if let Some(desc) = props.description {
                p { "{desc}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn renders_title_and_optional_parts() {
        let html = testing::render(|| rsx! {
            EmptyState {
                title: "Tokens".to_string(),
                description: Some("Token listings appear here.".to_string()),
            }
        });
        assert!(html.contains("<h4>Tokens</h4>"));
        assert!(html.contains("Token listings appear here."));
        assert!(!html.contains("empty-state-icon"));
    }
}
