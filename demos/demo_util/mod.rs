use std::env::{args, var};
use std::str::FromStr;

const LOG_VAR: &str = "WAD_LOG";

/// Install the logger at the level named by `WAD_LOG`, `info` by default
pub fn setup_logging() {
    let level = var(LOG_VAR)
        .ok()
        .and_then(|name| log::Level::from_str(&name).ok())
        .unwrap_or(log::Level::Info);

    simple_logger::init_with_level(level).unwrap();
}

/// First command-line argument
pub fn wad_path() -> String {
    if let Some(wad_path) = args().nth(1) {
        wad_path
    } else {
        panic!("Usage: {} <archive.wad>", args().next().unwrap_or_default());
    }
}
