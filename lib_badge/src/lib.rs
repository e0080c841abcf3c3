pub mod constants;
pub mod error;
pub mod font;
pub mod icon;
pub mod render;

use log::*;
use std::io::Write;

pub use crate::error::BadgeError;
pub use crate::font::{FontChain, LetterFont};
pub use crate::icon::{create_icon, ensure_png_support, IconSize};
pub use crate::render::render_icon;

/// Logs to stderr so stdout carries only the progress lines.
///
/// Defaults to `Info` for the workspace crates; `RUST_LOG` overrides it.
pub fn init_logging() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_badge"), LevelFilter::Info)
        .filter(Some("badge_gen"), LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let level = record.level();
            writeln!(buf, "{:<5} {}: {}", level, record.target(), record.args())
        })
        .init();
}
