use anyhow::{bail, Result};

use scrolly_core::{AppConfig, Storyboard};

pub fn run(config: &AppConfig, force: bool) -> Result<()> {
    let config_path = AppConfig::config_path();
    let storyboard_path = config.data_dir().join("storyboard.toml");

    if !force {
        for path in [&config_path, &storyboard_path] {
            if path.exists() {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
        }
    }

    if let Some(parent) = storyboard_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&storyboard_path, Storyboard::sample_source())?;
    println!("Wrote sample storyboard: {}", storyboard_path.display());

    let mut config = config.clone();
    config.general.storyboard = Some(storyboard_path);
    config.save()?;
    println!("Wrote config: {}", config_path.display());

    Ok(())
}
