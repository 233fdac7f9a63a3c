//! Version management and semver bumping.

pub mod bump;

pub use bump::{SemverLevel, apply_bump, format_tag, highest_level, parse_tag};
