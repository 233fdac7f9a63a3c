//! Changelog generation and writing.

pub mod engine;
pub mod grouping;
pub mod writer;

pub use engine::Changelog;
pub use grouping::{GroupedCommits, group_commits};
pub use writer::{render, save_changelog};
