use std::fs::create_dir_all;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::constants::APP_NAME;
use crate::error::{BridgeResult, ErrorContext};

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(APP_NAME)
        .join("logs")
}

pub fn log_file_name() -> String {
    format!("bridge-{}.log", Local::now().format("%Y%m%d-%H%M%S"))
}

/// Install stdout and file logging. Keep the returned guard alive for the
/// lifetime of the process so buffered file output is flushed.
pub fn init_logging() -> BridgeResult<WorkerGuard> {
    let log_dir = log_dir();
    create_dir_all(&log_dir)?;

    let file_name = log_file_name();
    let file_appender = tracing_appender::rolling::never(&log_dir, &file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = layer().compact().with_target(false).with_filter(
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy(),
    );
    let file_layer = layer()
        .compact()
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    let log_file = log_dir.join(file_name);
    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(log_file.clone());
    }

    info!("Logging initialized to: {}", log_file.display());

    Ok(guard)
}

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(log_panic_info));
}

#[allow(deprecated)]
pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!(
            "at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    error!("{}", message);

    let backtrace = std::backtrace::Backtrace::capture();
    debug!("Backtrace:\n{}", backtrace);
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|slot| slot.clone())
}
