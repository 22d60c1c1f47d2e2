//! Centralized icon definitions.
//!
//! Maps semantic icon names to concrete `icondata` icons so components
//! never reference an icon set directly.

use icondata::Icon;

pub const GITHUB: Icon = icondata::BsGithub;
pub const INSTAGRAM: Icon = icondata::BsInstagram;
pub const MAIL: Icon = icondata::BsEnvelope;
