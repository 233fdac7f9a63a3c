//! Parsing raw commit subjects into kind-grouped messages.

use tracing::debug;

use crate::config::ChangelogSettings;

/// Commit messages grouped by kind.
///
/// Kinds keep the order they were first seen in, messages keep source
/// order, and a kind is only present if it holds at least one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedCommits {
    groups: Vec<(String, Vec<String>)>,
}

impl GroupedCommits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to `kind`, creating the group on first use.
    pub fn push(&mut self, kind: &str, message: String) {
        match self.groups.iter_mut().find(|(k, _)| k == kind) {
            Some((_, messages)) => messages.push(message),
            None => self.groups.push((kind.to_string(), vec![message])),
        }
    }

    pub fn get(&self, kind: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Kinds present, in first-seen order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(kind, _)| kind.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(kind, messages)| (kind.as_str(), messages.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K, M> FromIterator<(K, Vec<M>)> for GroupedCommits
where
    K: AsRef<str>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<M>)>>(iter: I) -> Self {
        let mut grouped = Self::new();
        for (kind, messages) in iter {
            for message in messages {
                grouped.push(kind.as_ref(), message.into());
            }
        }
        grouped
    }
}

/// Group `label: message` lines by the kind their label maps to.
///
/// Lines without a `:`, with an unknown label, or with an empty message are
/// dropped.
pub fn group_commits(raw: &str, settings: &dyn ChangelogSettings) -> GroupedCommits {
    let mut grouped = GroupedCommits::new();

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some((label, message)) = line.split_once(':') else {
            debug!(line, "Dropping commit without a label");
            continue;
        };

        let label = label.trim();
        let Some(kind) = settings.kind(label) else {
            debug!(label, "Dropping commit with unknown label");
            continue;
        };

        let message = message.trim();
        if message.is_empty() {
            debug!(kind, "Dropping commit with empty message");
            continue;
        }

        grouped.push(kind, message.to_string());
    }

    grouped
}
