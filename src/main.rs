use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use vidforge::{
    args::Args,
    bootstrap::{
        check_all,
        env::{SystemEnvironment, is_ci},
        resolver::Resolver,
        tool::REQUIRED_TOOLS,
    },
    ui::tui::{StartupView, run_tui},
    utils::{logging, settings::Settings},
};

fn main() -> Result<()> {
    let args = Args::parse();

    if is_ci(&SystemEnvironment) {
        println!("VidForge CI mode: startup OK");
        return Ok(());
    }

    let mut settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}. Using default settings.", e);
        Settings::default()
    });
    args.apply(&mut settings);

    logging::init(&settings.log_level);
    info!(
        "vidforge {} starting (dependency policy: {:?})",
        env!("CARGO_PKG_VERSION"),
        settings.dependency_policy
    );

    let resolver = Resolver::system(&settings)?;
    if let Some(dir) = resolver.cache_dir() {
        debug!("binary cache: {}", dir.display());
    }

    let statuses = check_all(&resolver, REQUIRED_TOOLS, settings.dependency_policy)?;

    run_tui(&StartupView {
        statuses: &statuses,
        policy: settings.dependency_policy,
        use_ascii: settings.use_ascii_indicators,
    })
}
