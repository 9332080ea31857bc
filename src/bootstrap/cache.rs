use std::fs;
use std::path::{Path, PathBuf};

use super::platform::Host;

/// Directory under the user's home that holds VidForge state.
pub const APP_DIR: &str = ".vidforge";

/// Per-user directory holding downloaded tool binaries.
///
/// One file per tool, named after the tool plus the host's executable
/// suffix. Entries are written once and never refreshed or evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinCache {
    dir: PathBuf,
}

impl BinCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<home>/.vidforge/bin`
    pub fn in_home(home: &Path) -> Self {
        Self::new(home.join(APP_DIR).join("bin"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn binary_path(&self, name: &str, host: &Host) -> PathBuf {
        self.dir.join(format!("{}{}", name, host.exe_suffix()))
    }

    /// Path of the cached binary, if one was downloaded before.
    ///
    /// Only an executable regular file counts as a hit.
    pub fn find(&self, name: &str, host: &Host) -> Option<PathBuf> {
        let path = self.binary_path(name, host);
        is_executable(&path).then_some(path)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
