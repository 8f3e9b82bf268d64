use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use weekcal_core::config::WeekcalConfig;

use crate::render::swatch;

pub fn run(config: &WeekcalConfig, explicit_path: Option<&Path>) -> Result<()> {
    let config_path = match explicit_path {
        Some(p) => p.to_path_buf(),
        None => WeekcalConfig::config_path().map_err(|e| anyhow::anyhow!(e))?,
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();

    let palette = config.palette();
    println!("{}", "Colors".bold());
    for (category, color) in palette.entries() {
        println!("  {:<10} {} {}", category, swatch(color), color.dimmed());
    }
    println!(
        "  {:<10} {} {}",
        "(other)",
        swatch(palette.neutral()),
        palette.neutral().dimmed()
    );
    println!();

    println!("{}", "Effective config".bold());
    let toml = config.to_effective_toml().map_err(|e| anyhow::anyhow!(e))?;
    for line in toml.lines() {
        println!("  {}", line.dimmed());
    }

    Ok(())
}
