use super::open_driver;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::status_line;
use crate::utils::formatting::bold;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let driver = open_driver(cfg)?;

    if let Some(name) = driver.display_name()? {
        println!("👋 Hello! {}", bold(&name));
    }

    println!("{}", status_line(driver.state()));

    match driver.log().open_entry() {
        Some(entry) => println!("📝 Log {} running since {}", entry.id, entry.start_str()),
        None => println!("📝 {} log entries, none running", driver.entries().len()),
    }

    Ok(())
}
