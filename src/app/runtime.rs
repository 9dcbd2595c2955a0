//! Wiring a real environment to the production driver

use crate::app::config::AppConfig;
use crate::driver::Runtime;
use crate::env::AppEnv;
use crate::error::Result;
use crate::workflow::FileSaver;
use tracing::{debug, info};

/// Build the real environment described by `config`
pub async fn initialize_env(config: &AppConfig) -> Result<AppEnv> {
    debug!("Opening log sink at {}", config.log_file.display());
    Ok(AppEnv::real(&config.log_file).await?)
}

/// Save `payload` under `path` for real: append to the log file and upload
pub async fn save_file(config: &AppConfig, path: &str, payload: Vec<u8>) -> Result<()> {
    let endpoint = config.endpoint()?;
    let env = initialize_env(config).await?;
    let saver = FileSaver::from_env(&env, endpoint);

    info!("Saving {} ({} bytes) to {}", path, payload.len(), saver.endpoint());
    Runtime::new().run(saver.save_file(path, payload)).await?;
    Ok(())
}
