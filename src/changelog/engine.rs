//! Release changelog computed from commit history.

use std::cell::OnceCell;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::ChangelogSettings;
use crate::error::ChangelogError;
use crate::git::CommitSource;
use crate::version::{SemverLevel, apply_bump, format_tag, highest_level, parse_tag};

use super::grouping::{GroupedCommits, group_commits};

/// A changelog for the next release.
///
/// Every derived value is computed from the settings and the commit source
/// on first access and cached for the lifetime of the instance. Commits or
/// tags that land afterwards are not picked up; build a new `Changelog` to
/// see them.
pub struct Changelog<'a, S: CommitSource + ?Sized> {
    settings: &'a dyn ChangelogSettings,
    source: &'a S,
    start: Option<String>,
    end: Option<String>,
    grouped_commits: OnceCell<GroupedCommits>,
    last_tag: OnceCell<String>,
    tag: OnceCell<String>,
    project_url: OnceCell<String>,
    content: OnceCell<Vec<String>>,
}

impl<'a, S: CommitSource + ?Sized> Changelog<'a, S> {
    pub fn new(settings: &'a dyn ChangelogSettings, source: &'a S) -> Self {
        Self {
            settings,
            source,
            start: None,
            end: None,
            grouped_commits: OnceCell::new(),
            last_tag: OnceCell::new(),
            tag: OnceCell::new(),
            project_url: OnceCell::new(),
            content: OnceCell::new(),
        }
    }

    /// Scan a different range than the configured one.
    pub fn with_range(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Revision the scan starts after.
    pub fn start(&self) -> &str {
        self.start.as_deref().unwrap_or(self.settings.start())
    }

    /// Revision the scan ends at.
    pub fn end(&self) -> &str {
        self.end.as_deref().unwrap_or(self.settings.end())
    }

    /// Unreleased commits grouped by kind.
    pub fn grouped_commits(&self) -> Result<&GroupedCommits, ChangelogError> {
        memoize(&self.grouped_commits, || {
            let raw = self.source.unreleased_commits(self.start(), self.end())?;
            let grouped = group_commits(&raw, self.settings);
            debug!(kinds = grouped.len(), "Grouped unreleased commits");
            Ok(grouped)
        })
    }

    /// Distinct kinds present in the unreleased commits, in first-seen order.
    pub fn kinds(&self) -> Result<Vec<&str>, ChangelogError> {
        Ok(self.grouped_commits()?.kinds().collect())
    }

    /// Most severe semver level among the present kinds.
    ///
    /// Kinds without a level are ignored; with no level at all the release
    /// is a patch.
    pub fn increment_level(&self) -> Result<SemverLevel, ChangelogError> {
        let levels = self
            .kinds()?
            .into_iter()
            .filter_map(|kind| self.settings.version_level(kind));
        Ok(highest_level(levels))
    }

    /// Tag component to increment: 0 for major, 1 for minor, 2 for patch.
    pub fn tag_increment_position(&self) -> Result<usize, ChangelogError> {
        Ok(self.increment_level()?.position())
    }

    /// Tag of the previous release.
    pub fn last_tag(&self) -> &str {
        self.last_tag.get_or_init(|| self.source.last_tag())
    }

    /// Tag of the release being prepared.
    pub fn tag(&self) -> Result<&str, ChangelogError> {
        memoize(&self.tag, || {
            let previous = parse_tag(self.last_tag())?;
            let level = self.increment_level()?;
            let next = format_tag(&apply_bump(&previous, level));
            debug!(previous = self.last_tag(), next, level = level.as_str(), "Computed next tag");
            Ok(next)
        })
        .map(String::as_str)
    }

    /// Name of the release branch.
    pub fn branch(&self) -> Result<String, ChangelogError> {
        Ok(format!("release/{}", self.tag()?))
    }

    /// Project URL used for the comparison link; empty without a remote.
    pub fn project_url(&self) -> Result<&str, ChangelogError> {
        memoize(&self.project_url, || Ok(self.source.project_url()?)).map(String::as_str)
    }

    /// Markdown lines of the changelog.
    ///
    /// Each kind gets a `###` heading, one bullet per commit and a blank
    /// separator. A comparison link against the previous tag closes the
    /// list when the project URL is known.
    pub fn content(&self) -> Result<&[String], ChangelogError> {
        memoize(&self.content, || {
            let mut lines = Vec::new();

            for (kind, messages) in self.grouped_commits()?.iter() {
                lines.push(format!("### {}", self.settings.title(kind)));
                lines.extend(messages.iter().map(|message| format!("- {}", message)));
                lines.push(String::new());
            }

            let url = self.project_url()?;
            if !url.is_empty() {
                let tag = self.tag()?;
                lines.push(format!(
                    "[{tag}]: {url}/compare/{previous}..{tag}",
                    previous = self.last_tag()
                ));
            }

            Ok(lines)
        })
        .map(Vec::as_slice)
    }

    /// Where the changelog is saved, dated today.
    pub fn file_path(&self) -> Result<PathBuf, ChangelogError> {
        self.file_path_on(Local::now().date_naive())
    }

    /// Where the changelog is saved, dated `date`.
    pub fn file_path_on(&self, date: NaiveDate) -> Result<PathBuf, ChangelogError> {
        let name = format!("[{}] - {}.md", self.tag()?, date.format("%Y-%m-%d"));
        Ok(PathBuf::from(self.settings.folder()).join(name))
    }
}

/// Compute a value into `cell` once, leaving the cell empty on error.
fn memoize<T>(
    cell: &OnceCell<T>,
    compute: impl FnOnce() -> Result<T, ChangelogError>,
) -> Result<&T, ChangelogError> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = compute()?;
    Ok(cell.get_or_init(|| value))
}
