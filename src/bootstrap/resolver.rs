use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{
    cache::BinCache,
    download::{self, Fetch, HttpFetcher},
    env::{self, Environment, Prompt, StdinPrompt, SystemEnvironment},
    platform::{Host, Target},
    tool::{self, TOOLS, ToolSpec},
};
use crate::{
    errors::{AppError, DownloadError, Result},
    utils::settings::Settings,
};

/// Where a tool binary was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    SystemPath,
    Cache,
    Downloaded,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Location::SystemPath => "PATH",
            Location::Cache => "cache",
            Location::Downloaded => "downloaded",
        };
        f.write_str(label)
    }
}

/// A tool ready to be invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub path: PathBuf,
    pub location: Location,
}

/// Makes sure external tools can be invoked.
///
/// Lookup order is the executable search path, then the per-user binary
/// cache. When both miss and a user is at the terminal, tools that publish
/// standalone release binaries are offered for download into the cache.
pub struct Resolver {
    tools: &'static [ToolSpec],
    host: Host,
    cache: Option<BinCache>,
    env: Box<dyn Environment>,
    prompt: Box<dyn Prompt>,
    fetcher: Box<dyn Fetch>,
    auto_download: bool,
}

impl Resolver {
    pub fn new(
        env: Box<dyn Environment>,
        prompt: Box<dyn Prompt>,
        fetcher: Box<dyn Fetch>,
    ) -> Self {
        let cache = env.home_dir().map(|home| BinCache::in_home(&home));
        Self {
            tools: TOOLS,
            host: Host::current(),
            cache,
            env,
            prompt,
            fetcher,
            auto_download: true,
        }
    }

    /// Resolver wired to the real process environment, terminal and network.
    pub fn system(settings: &Settings) -> std::result::Result<Self, DownloadError> {
        let resolver = Self::new(
            Box::new(SystemEnvironment),
            Box::new(StdinPrompt),
            Box::new(HttpFetcher::new()?),
        )
        .with_auto_download(settings.auto_download);

        Ok(match &settings.bin_dir {
            Some(dir) => resolver.with_cache(BinCache::new(dir)),
            None => resolver,
        })
    }

    pub fn with_tools(mut self, tools: &'static [ToolSpec]) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_host(mut self, host: Host) -> Self {
        self.host = host;
        self
    }

    pub fn with_cache(mut self, cache: BinCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_auto_download(mut self, enabled: bool) -> Self {
        self.auto_download = enabled;
        self
    }

    pub fn cache_dir(&self) -> Option<&Path> {
        self.cache.as_ref().map(BinCache::dir)
    }

    fn tool(&self, name: &str) -> Result<&'static ToolSpec> {
        tool::find_tool(self.tools, name).ok_or_else(|| AppError::UnknownTool(name.to_string()))
    }

    fn locate(&self, tool: &ToolSpec) -> Option<Resolved> {
        if let Some(path) = self.env.lookup_path(tool.name) {
            debug!("{} found in PATH at {}", tool.name, path.display());
            return Some(Resolved {
                path,
                location: Location::SystemPath,
            });
        }

        let path = self.cache.as_ref()?.find(tool.name, &self.host)?;
        debug!("{} found in cache at {}", tool.name, path.display());
        Some(Resolved {
            path,
            location: Location::Cache,
        })
    }

    fn is_interactive(&self) -> bool {
        !env::is_ci(self.env.as_ref()) && self.env.is_interactive()
    }

    fn missing(tool: &ToolSpec) -> AppError {
        AppError::MissingDependency {
            tool: tool.name.to_string(),
            guidance: tool.guidance(),
        }
    }

    /// Make `name` available, downloading it after confirmation if needed.
    pub fn ensure(&self, name: &str) -> Result<Resolved> {
        let tool = self.tool(name)?;

        if let Some(resolved) = self.locate(tool) {
            return Ok(resolved);
        }

        println!("\n{} not found in system PATH.", tool.name);
        info!("{} not found in PATH or cache", tool.name);

        if !self.is_interactive() {
            debug!("non-interactive session, not offering a download");
            return Err(Self::missing(tool));
        }

        if !tool.supports_download() || !self.auto_download {
            return Err(Self::missing(tool));
        }

        let answer = self.prompt.ask(&format!(
            "Would you like to download {} automatically? [Y/n]: ",
            tool.name
        ))?;

        if !env::accepts(&answer) {
            info!("download of {} declined", tool.name);
            return Err(AppError::Declined(tool.name.to_string()));
        }

        self.download(tool)
            .map(|path| Resolved {
                path,
                location: Location::Downloaded,
            })
            .map_err(|source| AppError::Download {
                tool: tool.name.to_string(),
                source,
                guidance: tool.guidance(),
            })
    }

    /// Path of `name` from PATH or the cache. Never downloads.
    pub fn command_path(&self, name: &str) -> Result<PathBuf> {
        let tool = self.tool(name)?;
        self.locate(tool)
            .map(|resolved| resolved.path)
            .ok_or_else(|| AppError::NotFound(tool.name.to_string()))
    }

    fn download(&self, tool: &ToolSpec) -> std::result::Result<PathBuf, DownloadError> {
        let target = Target::try_from(&self.host)?;
        let url = tool.asset_url(target).ok_or_else(|| DownloadError::NoAsset {
            tool: tool.name.to_string(),
            os: self.host.os.clone(),
            arch: self.host.arch.clone(),
        })?;
        let cache = self.cache.as_ref().ok_or(DownloadError::NoCacheDir)?;
        let dest = cache.binary_path(tool.name, &self.host);

        println!("Downloading {}...", tool.name);
        info!("downloading {} for {} from {}", tool.name, target, url);

        download::install(self.fetcher.as_ref(), url, &dest)?;

        println!("✓ Downloaded {} to {}", tool.name, dest.display());
        Ok(dest)
    }
}
