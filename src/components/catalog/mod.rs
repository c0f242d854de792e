//! Document catalog view.
//!
//! Components:
//! - [`Catalog`] - Discovery, state and layout
//! - [`Toolbar`] - Search box and sort toggle
//! - [`Card`] - One document with open and download actions
//! - [`Pager`] - Previous / next navigation

mod card;
#[allow(clippy::module_inception)]
mod catalog;
mod pager;
mod toolbar;

pub use card::Card;
pub use catalog::Catalog;
pub use pager::Pager;
pub use toolbar::Toolbar;
