use clap::Parser;

use crate::{bootstrap::DependencyPolicy, utils::settings::Settings};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// What to do when yt-dlp or ffmpeg is missing (overrides the settings file)
    #[arg(short, long, value_enum)]
    pub policy: Option<DependencyPolicy>,
    /// Never offer to download missing tools
    #[arg(long)]
    pub no_download: bool,
    /// Write debug output to the log file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(policy) = self.policy {
            settings.dependency_policy = policy;
        }
        if self.no_download {
            settings.auto_download = false;
        }
        if self.verbose {
            settings.log_level = "debug".to_string();
        }
    }
}
