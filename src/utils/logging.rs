use std::{
    fs::{self, File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use env_logger::{Builder, Env, Target};
use log::debug;

use crate::bootstrap::cache::APP_DIR;

/// `<home>/.vidforge/vidforge.log`
pub fn log_file_path(home: &Path) -> PathBuf {
    home.join(APP_DIR).join("vidforge.log")
}

/// Open the log file under `home` for appending, creating it if needed.
fn open_log_file(home: Option<&Path>) -> io::Result<Option<(PathBuf, File)>> {
    let Some(home) = home else {
        return Ok(None);
    };

    let path = log_file_path(home);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok(Some((path, file)))
}

/// Route log records to the log file so they never draw over the TUI.
///
/// `RUST_LOG` takes precedence over `level`. Without a usable log file the
/// records are discarded.
pub fn init(level: &str) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level));

    let target = match open_log_file(dirs::home_dir().as_deref()) {
        Ok(Some((_, file))) => Target::Pipe(Box::new(file)),
        Ok(None) => Target::Pipe(Box::new(io::sink())),
        Err(e) => {
            // Printed before the TUI owns the screen
            eprintln!("Could not open log file, logging disabled: {}", e);
            Target::Pipe(Box::new(io::sink()))
        }
    };
    builder.target(target);

    if builder.try_init().is_err() {
        debug!("logger already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_file_lives_next_to_binary_cache() {
        assert_eq!(
            log_file_path(Path::new("/home/alice")),
            Path::new("/home/alice/.vidforge/vidforge.log")
        );
    }

    #[test]
    fn test_no_home_means_no_log_file() {
        assert!(open_log_file(None).unwrap().is_none());
    }

    #[test]
    fn test_log_file_is_created_and_appended() {
        use std::io::Write;

        let temp_dir = tempdir().unwrap();
        let path = log_file_path(temp_dir.path());

        let (opened, mut file) = open_log_file(Some(temp_dir.path())).unwrap().unwrap();
        assert_eq!(opened, path);
        writeln!(file, "first").unwrap();
        drop(file);

        let (_, mut file) = open_log_file(Some(temp_dir.path())).unwrap().unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_unwritable_home_is_an_error() {
        let temp_dir = tempdir().unwrap();
        // A file where the app directory should be
        let home = temp_dir.path().join("home");
        fs::write(&home, "").unwrap();

        assert!(open_log_file(Some(&home)).is_err());
    }
}
