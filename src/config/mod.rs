#[allow(clippy::module_inception)]
mod config;

pub use config::{default_config_path, load_config, read_config_file, Config};
