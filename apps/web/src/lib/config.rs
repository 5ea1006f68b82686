//! Build-time configuration with an optional runtime override read from
//! `window.CTF_PORTAL_CONFIG`, so a static deployment can point at another API
//! without rebuilding. Values here are public; never put secrets in them.

use log::Level;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the portal API. Empty means same origin.
    pub api_base_url: String,
    pub log_level: Level,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime
    /// overrides.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("CTF_PORTAL_API_BASE_URL")
                .unwrap_or("")
                .to_string(),
            log_level: option_env!("CTF_PORTAL_LOG_LEVEL")
                .and_then(parse_level)
                .unwrap_or_else(default_level),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Joins `path` onto the API base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.api_base_url.trim().trim_end_matches('/');
        let path = path.trim();

        if base.is_empty() {
            path.to_string()
        } else {
            format!("{base}/{}", path.trim_start_matches('/'))
        }
    }
}

fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

fn parse_level(value: &str) -> Option<Level> {
    value.trim().parse().ok()
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(level) = runtime.log_level.as_deref().and_then(parse_level) {
        config.log_level = level;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("CTF_PORTAL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            api_base_url: "https://ctf.example.edu/api".to_string(),
            log_level: Level::Info,
        }
    }

    #[test]
    fn runtime_overrides_skip_blank_values() {
        let mut config = config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("   "),
            log_level: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, self::config());
    }

    #[test]
    fn runtime_overrides_replace_values() {
        let mut config = config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(" https://staging.example.edu "),
            log_level: normalize_runtime_value("warn"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://staging.example.edu");
        assert_eq!(config.log_level, Level::Warn);
    }

    #[test]
    fn unknown_log_level_keeps_current() {
        let mut config = config();
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                log_level: Some("chatty".to_string()),
                ..RuntimeConfig::default()
            },
        );
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let config = AppConfig {
            api_base_url: "https://ctf.example.edu/api/".to_string(),
            log_level: Level::Info,
        };
        assert_eq!(
            config.url("/auth/login"),
            "https://ctf.example.edu/api/auth/login"
        );

        let same_origin = AppConfig {
            api_base_url: String::new(),
            log_level: Level::Info,
        };
        assert_eq!(same_origin.url("/auth/me"), "/auth/me");
    }
}
