use dioxus::prelude::*;

use crate::session::use_session_elapsed;

/// Text of the "last updated" indicator. Zero seconds reads the same as no
/// reading at all.
pub fn elapsed_label(seconds: Option<u64>) -> String {
    match seconds {
        Some(seconds) if seconds > 0 => format!("Updated {seconds}s ago"),
        _ => "Updated - ago".to_string(),
    }
}

/// Status dot plus "Updated Ns ago", pinned to the bottom-left corner.
#[component]
pub fn PollingIndicator(#[props(!optional)] seconds: Option<u64>) -> Element {
    let label = elapsed_label(seconds);
    rsx! {
        div {
            class: "polling",
            div { class: "polling-dot" }
            a {
                href: "/",
                small { "{label}" }
            }
        }
    }
}

/// [`PollingIndicator`] fed by the session clock. The clock is read here, so
/// each tick re-renders this component and nothing above it.
#[component]
pub fn SessionPollingIndicator() -> Element {
    let seconds = use_session_elapsed();
    rsx! {
        PollingIndicator { seconds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionClock;
    use crate::testing;

    #[test]
    fn label_shows_whole_seconds() {
        assert_eq!(elapsed_label(Some(42)), "Updated 42s ago");
        assert_eq!(elapsed_label(Some(1)), "Updated 1s ago");
    }

    #[test]
    fn label_falls_back_to_dash() {
        assert_eq!(elapsed_label(None), "Updated - ago");
        assert_eq!(elapsed_label(Some(0)), "Updated - ago");
    }

    #[test]
    fn indicator_renders_label_and_dot() {
        let html = testing::render(|| rsx! { PollingIndicator { seconds: Some(42) } });
        assert!(html.contains("Updated 42s ago"));
        assert!(html.contains("polling-dot"));

        let html = testing::render(|| rsx! { PollingIndicator { seconds: None } });
        assert!(html.contains("Updated - ago"));
    }

    fn ticked_clock() -> Element {
        let elapsed_seconds = use_signal(|| Some(7));
        use_context_provider(|| SessionClock { elapsed_seconds });
        rsx! { SessionPollingIndicator {} }
    }

    #[test]
    fn session_indicator_reads_the_clock_itself() {
        let html = testing::render(ticked_clock);
        assert!(html.contains("Updated 7s ago"), "{html}");
    }

    #[test]
    fn session_indicator_without_clock_shows_dash() {
        let html = testing::render(|| rsx! { SessionPollingIndicator {} });
        assert!(html.contains("Updated - ago"));
    }
}
