use dioxus::prelude::*;

use crate::config::SocialLink;

/// Outbound profile links; each opens in a new browsing context.
#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> Element {
    rsx! {
        div {
            class: "social-links",
            for link in links {
                a {
                    key: "{link.name}",
                    href: link.href,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    aria_label: link.name,
                    title: link.name,
                    span { class: "social-glyph", "{link.glyph}" }
                }
            }
        }
    }
}
