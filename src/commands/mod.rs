pub mod serve;
pub mod show_config;

pub use serve::handle_serve;
pub use show_config::handle_show_config;
