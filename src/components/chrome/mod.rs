//! Site chrome: header and footer rendered on every page regardless of
//! which route matched.

mod footer;
mod header;

pub use footer::Footer;
pub use header::Header;
