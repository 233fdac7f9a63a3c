//! Git operations using git2-rs.

pub mod commits;
pub mod range;
pub mod remote;
pub mod source;
pub mod tags;

pub use remote::normalize_remote_url;
pub use source::{CommitSource, GitCommitSource};
pub use tags::DEFAULT_TAG;

#[cfg(test)]
pub use source::MockCommitSource;
