pub mod scoped_listener;
pub mod use_click_outside;
pub mod use_media_query;

pub use use_click_outside::{use_click_outside, ClickTarget, TrackedElements};
pub use use_media_query::use_media_query;
