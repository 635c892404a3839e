use std::path::PathBuf;

use clap::ArgMatches;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::load_config;
use crate::error::{BridgeResult, ErrorContext};
use crate::logging::{init_logging, install_panic_hook};
use crate::server::serve;

pub async fn handle_serve(matches: &ArgMatches) -> BridgeResult<()> {
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = load_config(config_path.as_deref())?;

    if let Some(listen_addr) = matches.get_one::<String>("listen") {
        config.listen_addr = listen_addr.clone();
    }
    config.validate()?;

    let _guard = init_logging()?;
    install_panic_hook();

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    info!(
        addr = %config.listen_addr,
        jira_url = %config.jira_url,
        "Jira QA bridge listening"
    );

    serve(listener, config).await
}
