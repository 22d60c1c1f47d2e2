//! Data models for the application.
//!
//! - [`Page`], [`MatchRule`], [`RouteEntry`] - Hash-based navigation

mod route;

pub use route::{MatchRule, Page, RouteEntry, hash_href, normalize, resolve};
