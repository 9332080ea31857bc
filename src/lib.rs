//! VidForge: a terminal workbench around yt-dlp and ffmpeg.
//!
//! The [`bootstrap`] module makes sure both tools can be invoked before the
//! [`ui`] takes over the terminal.

pub mod args;
pub mod bootstrap;
pub mod errors;
pub mod ui;
pub mod utils;
