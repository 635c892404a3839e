use std::path::PathBuf;

use clap::ArgMatches;

use crate::config::{default_config_path, load_config};
use crate::error::BridgeResult;

pub fn handle_show_config(matches: &ArgMatches) -> BridgeResult<()> {
    let config_path = match matches.get_one::<String>("config") {
        Some(path) => PathBuf::from(path),
        None => default_config_path()?,
    };

    let config = load_config(Some(&config_path))?;
    println!("# {}", config_path.display());
    println!("{}", serde_json::to_string_pretty(&config.redacted())?);

    if let Err(e) = config.validate() {
        println!("# Warning: {}", e);
    }

    Ok(())
}
