use std::env;
use tracing::{debug, warn};

use crate::core::motd::{clamp_width, layout_banner, MOTD_MAX_WIDTH};
use crate::core::{franklin_version, load_config, SystemStats};
use crate::error::FranklinError;
use crate::models::{default_color, Paths, Rgb};
use crate::ui;

/// Width from the flag, else `$COLUMNS`, else the maximum banner width
fn banner_width(width: Option<usize>) -> usize {
    let width = width
        .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.trim().parse().ok()))
        .unwrap_or(MOTD_MAX_WIDTH);
    clamp_width(width)
}

/// Configured banner color, falling back to the default on a bad value
fn banner_color(paths: &Paths) -> Rgb {
    let configured = load_config(paths).motd_color;
    Rgb::from_hex(&configured).unwrap_or_else(|| {
        warn!("Ignoring invalid MOTD_COLOR {:?}", configured);
        Rgb::from_hex(default_color().hex).unwrap_or(Rgb(0x60, 0x7a, 0x97))
    })
}

/// Print the Campfire MOTD banner
pub fn show_motd(paths: &Paths, width: Option<usize>) -> Result<(), FranklinError> {
    let width = banner_width(width);
    let color = banner_color(paths);
    let stats = SystemStats::gather(franklin_version(paths));
    debug!("MOTD width {} color {}: {:?}", width, color, stats);

    for line in layout_banner(&stats, width) {
        println!("{}", ui::paint(&line, color));
    }
    Ok(())
}
