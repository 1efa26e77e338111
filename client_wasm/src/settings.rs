//! Runtime configuration for the browser build.

use game_core::{Config, ConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Build the game config from an optional JSON override.
///
/// The play field follows the canvas size unless the JSON sets either
/// dimension explicitly.
pub fn resolve_config(
    json: Option<&str>,
    canvas_size: (u32, u32),
) -> Result<Config, SettingsError> {
    let (canvas_w, canvas_h) = (canvas_size.0 as f32, canvas_size.1 as f32);

    let config = match json.map(str::trim).filter(|s| !s.is_empty()) {
        None => Config::new().with_field(canvas_w, canvas_h),
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(raw)?;
            let sets_field = ["field_width", "field_height"]
                .iter()
                .any(|k| value.get(k).is_some());
            let config: Config = serde_json::from_value(value)?;
            if sets_field {
                config
            } else {
                config.with_field(canvas_w, canvas_h)
            }
        }
    };

    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "rejected game config");
        return Err(e.into());
    }
    Ok(config)
}
