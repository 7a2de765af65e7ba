use serde::{Deserialize, Serialize};

use super::flash_policy::FlashPolicy;
use super::upload_rules::UploadRules;

/// Page helper settings. Every field has a default, so `{}` is a valid config.
/// The flash dismiss delay is not configurable, see `DISMISS_DELAY_MS`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub flash_policy: FlashPolicy,
    pub upload: UploadRules,
}

impl UiConfig {
    /// Parse from JSON text, e.g. the contents of a `data-ui-config` attribute
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: UiConfig = serde_json::from_str(json)?;
        if config.upload.allowed_extensions.is_empty() {
            anyhow::bail!("upload.allowed_extensions must not be empty");
        }
        Ok(config)
    }
}
