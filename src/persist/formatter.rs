/// Optional external formatter: discovery on `PATH` and in-place invocation.
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::errors::PersistError;

/// Formatter looked up when none is given on the command line.
pub const DEFAULT_FORMATTER: &str = "prettier";

/// Locate `name` on the current `PATH`.
///
/// A name containing a path separator is checked as-is instead.
#[must_use]
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH").unwrap_or_default();
    find_in(name, &path_var)
}

/// Locate `name` in the directories listed in `path_var`.
#[must_use]
pub fn find_in(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let direct = Path::new(name);
    if direct.components().count() > 1 {
        return is_executable(direct).then(|| direct.to_path_buf());
    }

    env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    let exts = env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_owned());
    std::iter::once(dir.join(name))
        .chain(
            exts.split(';')
                .filter(|e| !e.is_empty())
                .map(|ext| dir.join(format!("{name}{}", ext.to_lowercase()))),
        )
        .collect()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Run `<formatter> --write <file>` once and wait for it.
///
/// The formatter's stdout is sent to our stderr, so stdout carries only the run summary.
///
/// # Errors
///
/// - `PersistError::FormatterSpawn` if the process cannot be started
/// - `PersistError::FormatterFailed` if it exits unsuccessfully
pub fn run_formatter(formatter: &Path, file: &Path) -> Result<(), PersistError> {
    tracing::debug!(formatter = %formatter.display(), file = %file.display(), "running formatter");
    let status = Command::new(formatter)
        .arg("--write")
        .arg(file)
        .stdout(std::io::stderr())
        .status()
        .map_err(|source| PersistError::FormatterSpawn {
            formatter: formatter.to_path_buf(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(PersistError::FormatterFailed {
            formatter: formatter.to_path_buf(),
            code: status.code(),
        })
    }
}
