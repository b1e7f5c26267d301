use std::path::PathBuf;
use tracing::info;

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::core::load_config;
use crate::error::FranklinError;
use crate::models::{color_names, find_color, resolve_color, Config, Paths, Rgb, CAMPFIRE_COLORS};
use crate::ui;

/// Validate `input` and store it as the MOTD color. Returns the saved hex.
pub fn set_motd_color(paths: &Paths, input: &str) -> Result<String, FranklinError> {
    let hex = resolve_color(input).ok_or_else(|| FranklinError::InvalidColor(input.to_string()))?;
    let config = Config {
        motd_color: hex.clone(),
    };
    let path: PathBuf = config.save_to_dir(&paths.config_dir)?;
    info!("Saved MOTD color {} to {}", hex, path.display());
    Ok(hex)
}

/// `franklin config`: set the color from a flag, or pick one interactively
pub fn configure(paths: &Paths, color: Option<String>) -> Result<(), FranklinError> {
    let choice = match color {
        Some(c) => c,
        None => prompt_for_color(paths)?,
    };

    match set_motd_color(paths, &choice) {
        Ok(hex) => {
            ui::print_success(&format!("MOTD color set to {} ({})", choice, hex));
            Ok(())
        }
        Err(e @ FranklinError::InvalidColor(_)) => {
            ui::print_info(&format!("Valid colors: {}", color_names()));
            ui::print_info("Or use hex format: #rrggbb");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Show the palette with swatches and let the user pick or type a hex code
fn prompt_for_color(paths: &Paths) -> Result<String, FranklinError> {
    ui::print_header("Franklin Configuration");

    let current = load_config(paths).motd_color;
    ui::print_branch(&format!("Current MOTD color: {}", current));

    let mut items: Vec<String> = CAMPFIRE_COLORS
        .iter()
        .map(|c| {
            let swatch = match Rgb::from_hex(c.hex) {
                Some(rgb) => ui::paint("████", rgb).to_string(),
                None => "    ".to_string(),
            };
            format!("{}  {:<15} ({})", swatch, c.name, c.hex)
        })
        .collect();
    items.push("Custom hex code...".to_string());

    let default_index = CAMPFIRE_COLORS
        .iter()
        .position(|c| c.hex.eq_ignore_ascii_case(&current))
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a MOTD color")
        .items(&items)
        .default(default_index)
        .interact()?;

    if let Some(color) = CAMPFIRE_COLORS.get(selection) {
        return Ok(color.name.to_string());
    }

    let hex: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Hex code (#rrggbb)")
        .default(current)
        .validate_with(|input: &String| -> Result<(), String> {
            if Rgb::from_hex(input.trim()).is_some() || find_color(input).is_some() {
                Ok(())
            } else {
                Err("Use a palette name or #rrggbb".to_string())
            }
        })
        .interact_text()?;
    Ok(hex.trim().to_string())
}
