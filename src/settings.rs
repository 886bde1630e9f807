use crate::constants::OVERRIDE_ATTR_PREFIX;
use stringz_core::config::OVERRIDE_KEYS;
use stringz_core::SceneConfig;

/// Build the scene config from `data-*` attributes. `lookup` receives the
/// full attribute name (e.g. `data-max-notes`). Bad values are logged and
/// skipped; a config that fails validation falls back to the defaults.
pub fn scene_config(lookup: impl Fn(&str) -> Option<String>) -> SceneConfig {
    let mut config = SceneConfig::default();
    for key in OVERRIDE_KEYS {
        let attr = format!("{OVERRIDE_ATTR_PREFIX}{key}");
        if let Some(raw) = lookup(&attr) {
            if let Err(e) = config.apply_override(key, &raw) {
                log::warn!("[config] ignoring {}: {}", attr, e);
            }
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::error!("[config] {}; using defaults", e);
            SceneConfig::default()
        }
    }
}
