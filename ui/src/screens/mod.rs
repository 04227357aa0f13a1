// This file makes the screen modules available to the rest of the application.
// Each screen is the target of one route; page content is a placeholder.

pub mod charts;
pub mod dex;
pub mod listings;
pub mod tools;
