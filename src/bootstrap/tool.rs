use super::platform::{Arch, Os, Target};

/// Tools VidForge cannot start without, in the order they are checked.
pub const REQUIRED_TOOLS: &[&str] = &["yt-dlp", "ffmpeg"];

/// Every tool the resolver knows about.
pub const TOOLS: &[ToolSpec] = &[YT_DLP, FFMPEG];

pub const YT_DLP: ToolSpec = ToolSpec {
    name: "yt-dlp",
    install: InstallHints {
        macos: "brew install yt-dlp",
        linux: "Use your package manager (apt, dnf, pacman)",
        windows: "Download from https://github.com/yt-dlp/yt-dlp/releases",
    },
    releases: &[
        ReleaseAsset::new(
            Target::new(Os::MacOs, Arch::X86_64),
            "https://github.com/yt-dlp/yt-dlp/releases/latest/download/yt-dlp_macos",
        ),
        ReleaseAsset::new(
            Target::new(Os::MacOs, Arch::Aarch64),
            "https://github.com/yt-dlp/yt-dlp/releases/latest/download/yt-dlp_macos",
        ),
        ReleaseAsset::new(
            Target::new(Os::Linux, Arch::X86_64),
            "https://github.com/yt-dlp/yt-dlp/releases/latest/download/yt-dlp_linux",
        ),
        ReleaseAsset::new(
            Target::new(Os::Linux, Arch::Aarch64),
            "https://github.com/yt-dlp/yt-dlp/releases/latest/download/yt-dlp_linux_aarch64",
        ),
        ReleaseAsset::new(
            Target::new(Os::Windows, Arch::X86_64),
            "https://github.com/yt-dlp/yt-dlp/releases/latest/download/yt-dlp.exe",
        ),
        ReleaseAsset::new(
            Target::new(Os::Windows, Arch::Aarch64),
            "https://github.com/yt-dlp/yt-dlp/releases/latest/download/yt-dlp.exe",
        ),
    ],
};

/// ffmpeg builds are not published as single static binaries for every
/// platform, so it is never downloaded automatically.
pub const FFMPEG: ToolSpec = ToolSpec {
    name: "ffmpeg",
    install: InstallHints {
        macos: "brew install ffmpeg",
        linux: "sudo apt install ffmpeg (or your package manager)",
        windows: "Download from https://ffmpeg.org/download.html",
    },
    releases: &[],
};

/// Manual install instructions, one line per platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallHints {
    pub macos: &'static str,
    pub linux: &'static str,
    pub windows: &'static str,
}

impl InstallHints {
    /// Render the hints as the indented block shown in guidance errors.
    pub fn guidance(&self) -> String {
        format!(
            "  macOS: {}\n  Linux: {}\n  Windows: {}",
            self.macos, self.linux, self.windows
        )
    }
}

/// Download location of a tool binary for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub target: Target,
    pub url: &'static str,
}

impl ReleaseAsset {
    pub const fn new(target: Target, url: &'static str) -> Self {
        Self { target, url }
    }
}

/// Static description of an external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub install: InstallHints,
    /// Empty when the tool must be installed by hand.
    pub releases: &'static [ReleaseAsset],
}

impl ToolSpec {
    pub fn supports_download(&self) -> bool {
        !self.releases.is_empty()
    }

    pub fn asset_url(&self, target: Target) -> Option<&'static str> {
        self.releases
            .iter()
            .find(|asset| asset.target == target)
            .map(|asset| asset.url)
    }

    pub fn guidance(&self) -> String {
        self.install.guidance()
    }
}

/// Find a tool by its logical name.
pub fn find_tool<'a>(tools: &'a [ToolSpec], name: &str) -> Option<&'a ToolSpec> {
    tools.iter().find(|tool| tool.name == name)
}
