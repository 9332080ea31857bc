//! Startup bootstrap: make sure the external tools VidForge drives are
//! available before the terminal UI takes over the screen.

pub mod cache;
pub mod download;
pub mod env;
pub mod platform;
pub mod resolver;
pub mod tool;

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use resolver::{Resolved, Resolver};

/// What happens when a required tool cannot be made available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DependencyPolicy {
    /// Abort startup.
    #[default]
    Strict,
    /// Warn and start the UI anyway.
    Lenient,
}

/// Outcome of ensuring one tool at startup.
#[derive(Debug)]
pub struct DependencyStatus {
    pub tool: String,
    pub outcome: std::result::Result<Resolved, String>,
}

impl DependencyStatus {
    pub fn is_ready(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Ensure every tool in `tools`, in order.
///
/// Under [`DependencyPolicy::Strict`] the first failure is returned. Under
/// [`DependencyPolicy::Lenient`] failures are reported as warnings and kept
/// in the returned statuses.
pub fn check_all(
    resolver: &Resolver,
    tools: &[&str],
    policy: DependencyPolicy,
) -> Result<Vec<DependencyStatus>> {
    let mut statuses = Vec::with_capacity(tools.len());

    for &tool in tools {
        let outcome = match resolver.ensure(tool) {
            Ok(resolved) => Ok(resolved),
            Err(err) if policy == DependencyPolicy::Lenient => {
                warn!("{} unavailable, continuing: {}", tool, err);
                eprintln!("Warning: {}", err);
                Err(err.to_string())
            }
            Err(err) => return Err(err),
        };

        statuses.push(DependencyStatus {
            tool: tool.to_string(),
            outcome,
        });
    }

    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{
        download::Fetch,
        env::{Environment, Prompt},
        platform::Host,
        resolver::Location,
        tool::TOOLS,
    };
    use crate::errors::{AppError, DownloadError};
    use std::{io, path::PathBuf};

    /// Non-interactive environment where only the listed tools are on PATH.
    struct OnPath(&'static [&'static str]);

    impl Environment for OnPath {
        fn lookup_path(&self, name: &str) -> Option<PathBuf> {
            self.0
                .iter()
                .any(|tool| *tool == name)
                .then(|| PathBuf::from("/usr/bin").join(name))
        }

        fn var(&self, _key: &str) -> Option<String> {
            None
        }

        fn is_interactive(&self) -> bool {
            false
        }

        fn home_dir(&self) -> Option<PathBuf> {
            None
        }
    }

    struct NoPrompt;

    impl Prompt for NoPrompt {
        fn ask(&self, _question: &str) -> io::Result<String> {
            panic!("non-interactive checks must not prompt");
        }
    }

    struct NoNetwork;

    impl Fetch for NoNetwork {
        fn fetch(
            &self,
            _url: &str,
            _sink: &mut dyn io::Write,
        ) -> std::result::Result<u64, DownloadError> {
            panic!("non-interactive checks must not download");
        }
    }

    fn resolver(on_path: &'static [&'static str]) -> Resolver {
        Resolver::new(Box::new(OnPath(on_path)), Box::new(NoPrompt), Box::new(NoNetwork))
            .with_tools(TOOLS)
            .with_host(Host::new("linux", "x86_64"))
    }

    #[test]
    fn test_all_tools_present() {
        let statuses = check_all(
            &resolver(&["yt-dlp", "ffmpeg"]),
            &["yt-dlp", "ffmpeg"],
            DependencyPolicy::Strict,
        )
        .unwrap();

        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(DependencyStatus::is_ready));
        let yt_dlp = statuses[0].outcome.as_ref().unwrap();
        assert_eq!(yt_dlp.location, Location::SystemPath);
        assert_eq!(yt_dlp.path, PathBuf::from("/usr/bin/yt-dlp"));
    }

    #[test]
    fn test_strict_policy_stops_at_first_failure() {
        let err = check_all(
            &resolver(&["yt-dlp"]),
            &["yt-dlp", "ffmpeg"],
            DependencyPolicy::Strict,
        )
        .unwrap_err();

        assert!(matches!(err, AppError::MissingDependency { ref tool, .. } if tool == "ffmpeg"));
    }

    #[test]
    fn test_lenient_policy_records_failures_and_continues() {
        let statuses = check_all(
            &resolver(&["ffmpeg"]),
            &["yt-dlp", "ffmpeg"],
            DependencyPolicy::Lenient,
        )
        .unwrap();

        assert_eq!(statuses.len(), 2);
        assert!(!statuses[0].is_ready());
        assert!(
            statuses[0]
                .outcome
                .as_ref()
                .unwrap_err()
                .starts_with("yt-dlp not found. Please install it:")
        );
        assert!(statuses[1].is_ready());
    }

    #[test]
    fn test_lenient_policy_records_unknown_tool() {
        let statuses = check_all(&resolver(&[]), &["bogus"], DependencyPolicy::Lenient).unwrap();

        assert_eq!(
            statuses[0].outcome.as_ref().unwrap_err(),
            "unknown command: bogus"
        );
    }

    #[test]
    fn test_policy_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DependencyPolicy::Lenient).unwrap(),
            "\"lenient\""
        );
        let policy: DependencyPolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(policy, DependencyPolicy::Strict);
    }
}
