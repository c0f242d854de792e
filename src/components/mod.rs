//! UI components built with Leptos.
//!
//! - [`Navbar`] - Brand plus theme and locale toggles
//! - [`catalog`] - Searchable, paginated document grid
//! - [`preview`] - Preview overlay and its browser host
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod catalog;
pub mod icons;
mod navbar;
pub mod preview;

pub use catalog::Catalog;
pub use navbar::Navbar;
