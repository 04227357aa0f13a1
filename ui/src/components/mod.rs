//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! The side navigation lives in `side_nav`; the rest are small pieces it and the pages share.
pub mod empty_state;
pub mod icons;
pub mod nav_link;
pub mod side_nav;
