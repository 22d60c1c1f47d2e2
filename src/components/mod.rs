//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`chrome`] - Header and footer rendered on every page
//! - [`pages`] - Presentational page views
//! - [`icons`] - Centralized icon definitions

pub mod chrome;
pub mod icons;
pub mod pages;
pub mod router;

pub use router::AppRouter;
