use super::open_driver;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Name { name } = cmd else {
        return Ok(());
    };

    let mut driver = open_driver(cfg)?;

    match name {
        Some(n) => {
            driver.set_display_name(n)?;
            success(format!("Display name set to '{}'.", n.trim()));
        }
        None => match driver.display_name()? {
            Some(n) => println!("{}", n),
            None => info("No display name set."),
        },
    }

    Ok(())
}
