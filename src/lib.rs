//! Household energy load estimation and solar system sizing.

pub mod catalog;
pub mod config;
pub mod error;
/// CSV import/export at the presentation boundary.
pub mod io;
pub mod load;
pub mod optimize;
pub mod sizing;
pub mod vendors;

#[cfg(feature = "api")]
pub mod api;
