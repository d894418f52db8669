use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_BASE_URL: &str = "https://localhost:7202";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "MINDCARE_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub base_url: String,
    /// Added in v1; older configs get the default.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Apply the environment override, then an explicit one. Trailing
    /// slashes are stripped so paths can be appended directly.
    pub fn with_overrides(mut self, explicit_base_url: Option<&str>) -> Self {
        if let Ok(from_env) = std::env::var(BASE_URL_ENV)
            && !from_env.trim().is_empty()
        {
            self.base_url = from_env;
        }
        if let Some(url) = explicit_base_url {
            self.base_url = url.to_string();
        }
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        self
    }
}

pub fn config_dir() -> Result<PathBuf, ClientError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ClientError::Config("no config directory found".to_string()))?;
    Ok(base.join("com.mindcare.cli"))
}

pub fn default_config_path() -> Result<PathBuf, ClientError> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or the default if no file exists yet.
pub fn load_config(path: &Path) -> Result<ClientConfig, ClientError> {
    if !path.exists() {
        return Ok(ClientConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        ClientError::Config(format!("failed to read config at {}: {e}", path.display()))
    })?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    serde_json::from_value(migrated)
        .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, ClientError> {
    if from_version > CURRENT_VERSION {
        return Err(ClientError::Config(format!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        )));
    }

    // v0 → v1: add timeout_secs
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| ClientError::Config("config is not a JSON object".to_string()))?;
        obj.entry("timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_TIMEOUT_SECS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added timeout_secs)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ClientConfig) -> Result<(), ClientError> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;
    write_atomic(path, json.as_bytes())?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Write to a sibling temp file, restrict permissions, then rename over
/// the target.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ClientError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;
    Ok(())
}
