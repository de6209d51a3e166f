//! Config subcommands handler

use anyhow::Result;

use webbs::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print where the config file is read from.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration unless a file already exists.
pub fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config file already exists: {}", path.display());
        return Ok(());
    }
    Config::default().save_to(&path)?;
    println!("Created {}", path.display());
    Ok(())
}
