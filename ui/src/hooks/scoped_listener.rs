//! Acquire/release wrapper for listeners that live as long as a component.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};

use crate::error::DomError;

/// Something that can register a listener with the host page and later
/// remove it again.
pub trait ListenerHost {
    /// Whatever must be kept alive while the listener is registered
    /// (a JS closure, an eval channel, ...).
    type Handle;

    fn attach(&self) -> Result<Self::Handle, DomError>;

    fn detach(&self, handle: Self::Handle);
}

/// Holds an attached listener and detaches it exactly once: on
/// [`ScopedListener::release`] or, failing that, on drop.
pub struct ScopedListener<H: ListenerHost> {
    host: H,
    handle: Option<H::Handle>,
}

impl<H: ListenerHost> ScopedListener<H> {
    pub fn attach(host: H) -> Result<Self, DomError> {
        let handle = host.attach()?;
        Ok(Self {
            host,
            handle: Some(handle),
        })
    }

    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.detach(handle);
        }
    }
}

impl<H: ListenerHost> Drop for ScopedListener<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Attaches the listener built by `make_host` the first time the calling
/// component renders and detaches it when the component unmounts.
///
/// Failures are logged and leave the component without the listener.
pub fn use_scoped_listener<H, F>(name: &'static str, make_host: F)
where
    H: ListenerHost + 'static,
    H::Handle: 'static,
    F: FnOnce() -> Result<H, DomError>,
{
    let slot = use_hook(move || {
        let listener = make_host().and_then(ScopedListener::attach);
        let listener = match listener {
            Ok(listener) => {
                debug!("{name} listener attached");
                Some(listener)
            }
            Err(e) => {
                warn!("{name} listener unavailable: {e}");
                None
            }
        };
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        if let Some(mut listener) = slot.borrow_mut().take() {
            listener.release();
            debug!("{name} listener detached");
        }
    });
}
