use std::env::consts;
use std::fmt;

use crate::errors::DownloadError;

/// Raw identifiers of the machine VidForge runs on.
///
/// Kept as plain strings so that an unsupported host can still compute its
/// cache path; only downloads need a [`Target`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub os: String,
    pub arch: String,
}

impl Host {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    pub fn current() -> Self {
        Self::new(consts::OS, consts::ARCH)
    }

    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }

    /// File name suffix the OS requires for executables.
    pub fn exe_suffix(&self) -> &'static str {
        if self.is_windows() { ".exe" } else { "" }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    MacOs,
    Windows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Aarch64,
}

/// A platform release assets are published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub os: Os,
    pub arch: Arch,
}

impl Target {
    pub const fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }
}

impl TryFrom<&Host> for Target {
    type Error = DownloadError;

    fn try_from(host: &Host) -> Result<Self, Self::Error> {
        let os = match host.os.as_str() {
            "linux" => Some(Os::Linux),
            "macos" | "darwin" => Some(Os::MacOs),
            "windows" => Some(Os::Windows),
            _ => None,
        };
        let arch = match host.arch.as_str() {
            "x86_64" | "amd64" => Some(Arch::X86_64),
            "aarch64" | "arm64" => Some(Arch::Aarch64),
            _ => None,
        };

        match (os, arch) {
            (Some(os), Some(arch)) => Ok(Target { os, arch }),
            _ => Err(DownloadError::UnsupportedPlatform {
                os: host.os.clone(),
                arch: host.arch.clone(),
            }),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let os = match self.os {
            Os::Linux => "linux",
            Os::MacOs => "macos",
            Os::Windows => "windows",
        };
        let arch = match self.arch {
            Arch::X86_64 => "x86_64",
            Arch::Aarch64 => "aarch64",
        };
        write!(f, "{}/{}", os, arch)
    }
}
