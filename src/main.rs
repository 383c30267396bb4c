use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use live_translator::config::Config;
use live_translator::server;
use live_translator::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("live_translator=debug,tower_http=debug")),
        )
        .init();

    let config = load_config()?;

    let app_state = AppState::new(config.clone())?;
    app_state.spawn_session_sweeper();

    let app = server::build_app(app_state);

    let listener = server::bind(&config.system_config).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load the first configuration file found, falling back to defaults.
/// A file that exists but does not parse aborts startup.
fn load_config() -> Result<Config> {
    // Resolve paths next to the executable as well as the working directory
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
        exe_dir.join("conf.yaml").to_str().map(|s| s.to_string()),
        exe_dir.join("conf.json").to_str().map(|s| s.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in &config_paths {
        if !std::path::Path::new(path).exists() {
            debug!("No config at {}", path);
            continue;
        }
        let config = Config::load(path)
            .with_context(|| format!("Invalid configuration in {}", path))?;
        info!("Loaded configuration from: {}", path);
        return Ok(config);
    }

    info!("No configuration file found (tried {:?}), using defaults", config_paths);
    Ok(Config::default())
}
