//! The session clock behind the "Updated Ns ago" indicator.

use std::time::Duration;

use dioxus::prelude::*;
use web_time::Instant;

use crate::compat;

/// A reactive clock provided as a Dioxus context.
///
/// `elapsed_seconds` stays `None` until the first tick, then counts whole
/// seconds since the providing component mounted.
#[derive(Clone, Copy)]
pub struct SessionClock {
    pub elapsed_seconds: Signal<Option<u64>>,
}

/// Starts a clock ticking once per second and provides it to descendants.
pub fn use_session_clock_provider() -> SessionClock {
    let elapsed_seconds = use_signal(|| None);
    let started_at = use_hook(Instant::now);
    let clock = use_context_provider(|| SessionClock { elapsed_seconds });

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut elapsed = elapsed_seconds;
        async move {
            dioxus_logger::tracing::info!("session clock started");
            loop {
                compat::sleep(Duration::from_secs(1)).await;
                elapsed.set(Some(started_at.elapsed().as_secs()));
            }
        }
    });

    clock
}

/// Seconds since the session clock started, or `None` when there is no
/// clock above this component or it has not ticked yet.
pub fn use_session_elapsed() -> Option<u64> {
    try_use_context::<SessionClock>().and_then(|clock| (clock.elapsed_seconds)())
}
