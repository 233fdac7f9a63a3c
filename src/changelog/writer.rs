//! Rendering and saving changelog files.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::ChangelogError;

/// Join changelog lines into file contents, one line per row.
pub fn render(lines: &[String]) -> String {
    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}

/// Temporary sibling of `path` with the mode a plain create would give it.
///
/// An existing target keeps its permissions. Otherwise the file is opened
/// with `0o666` and the process umask applies, as with `fs::write`.
fn temp_file_for(path: &Path, folder: &Path) -> std::io::Result<NamedTempFile> {
    let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let file = builder.tempfile_in(folder)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    Ok(file)
}

/// Write `lines` to `path`, creating its folder first.
///
/// The file is written to a temporary sibling and renamed into place, so a
/// failed write never leaves a truncated changelog behind.
pub fn save_changelog(path: &Path, lines: &[String]) -> Result<PathBuf, ChangelogError> {
    let write_failed = |source: std::io::Error| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(folder).map_err(write_failed)?;

    let mut file = temp_file_for(path, folder).map_err(write_failed)?;
    file.write_all(render(lines).as_bytes())
        .map_err(write_failed)?;
    file.persist(path).map_err(|e| write_failed(e.error))?;

    info!(path = %path.display(), lines = lines.len(), "Changelog saved");
    Ok(path.to_path_buf())
}
