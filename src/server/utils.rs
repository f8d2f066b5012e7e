#[cfg(feature = "access_log")]
use std::path::Path;

#[cfg(any(feature = "settings", feature = "access_log"))]
use anyhow::Context;

#[cfg(feature = "settings")]
use crate::server::settings;

#[cfg(feature = "settings")]
pub fn load_config(config_dir: &str, env: &str) -> anyhow::Result<()> {
    settings::load_global_config(config_dir, env)
        .with_context(|| format!("Error in loading config from dir: {}", config_dir))?;
    Ok(())
}

/// Initializes log4rs. Request lines written through `AccessLogWriter` go to the
/// `access_log` target, so the file decides where they end up.
#[cfg(feature = "access_log")]
pub fn setup_logging(log4rs_file: &str) -> anyhow::Result<()> {
    log4rs::init_file(Path::new(log4rs_file), Default::default())
        .with_context(|| format!("Error in opening log file: {}", log4rs_file))?;

    Ok(())
}
