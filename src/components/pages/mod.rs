//! Presentational page views.
//!
//! Each page is a self-contained renderable unit with no required props;
//! the router selects exactly one per navigation.

mod contact;
mod landing;
mod newsletter;
mod not_found;

pub use contact::Contact;
pub use landing::LandingPage;
pub use newsletter::Newsletter;
pub use not_found::NotFound;
