use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::blocking::Client;
use url::Url;

use crate::errors::DownloadError;

/// Retrieves the body of a URL into a writer.
pub trait Fetch {
    /// Perform a single GET of `url`, streaming the body into `sink`.
    ///
    /// Returns the number of bytes written.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, DownloadError>;
}

/// [`Fetch`] over HTTPS.
///
/// One attempt per call and no timeout: a slow release server blocks the
/// caller for the whole transfer.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, DownloadError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, DownloadError> {
        let url = Url::parse(url)?;
        debug!("GET {}", url);

        let mut response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status(status));
        }

        Ok(response.copy_to(sink)?)
    }
}

/// Temporary name the body is streamed to before it replaces `dest`.
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Download `url` into `dest` and make it executable.
///
/// The parent directory is created when missing. The body goes to a
/// `.part` file that is only renamed to `dest` once it is complete and
/// executable, so a failed install never leaves anything at `dest`.
pub fn install(fetcher: &dyn Fetch, url: &str, dest: &Path) -> Result<u64, DownloadError> {
    if let Some(dir) = dest.parent() {
        fs::create_dir_all(dir)?;
    }

    let part = partial_path(dest);
    match write_partial(fetcher, url, &part).and_then(|bytes| {
        make_executable(&part)?;
        fs::rename(&part, dest)?;
        Ok(bytes)
    }) {
        Ok(bytes) => {
            info!("Installed {} ({} bytes) from {}", dest.display(), bytes, url);
            Ok(bytes)
        }
        Err(err) => {
            if part.exists()
                && let Err(e) = fs::remove_file(&part)
            {
                warn!("Could not remove partial download {}: {}", part.display(), e);
            }
            Err(err)
        }
    }
}

fn write_partial(fetcher: &dyn Fetch, url: &str, part: &Path) -> Result<u64, DownloadError> {
    let file = File::create(part)?;
    let mut writer = BufWriter::new(file);
    let bytes = fetcher.fetch(url, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), DownloadError> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), DownloadError> {
    Ok(())
}
