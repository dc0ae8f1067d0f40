//! Build-time configuration for the API endpoint and the verify-branch
//! switch, with an optional runtime override. The runtime config is read from
//! `window.BANKLINE_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not
//! store secrets here.

use crate::flow::verify::VerifyMode;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub verify_success_advances: bool,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("BANKLINE_API_BASE_URL").unwrap_or("");
        let verify_success_advances = option_env!("BANKLINE_VERIFY_SUCCESS_ADVANCES")
            .map(parse_flag)
            .unwrap_or(false);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            verify_success_advances,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// How the one-time PIN screen interprets a clean verify response.
    pub fn verify_mode(&self) -> VerifyMode {
        VerifyMode::from_flag(self.verify_success_advances)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    verify_success_advances: Option<bool>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.verify_success_advances {
        config.verify_success_advances = value;
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "yes")
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("BANKLINE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_string(&object, "api_base_url"),
        verify_success_advances: read_runtime_flag(&object, "verify_success_advances"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_string(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_flag(object: &js_sys::Object, key: &str) -> Option<bool> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    if let Some(flag) = value.as_bool() {
        return Some(flag);
    }
    value.as_string().map(|text| parse_flag(&text))
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
    use super::{
        apply_runtime_overrides, normalize_runtime_value, parse_flag, AppConfig, RuntimeConfig,
    };
    use crate::flow::verify::VerifyMode;

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.bankline.example "),
            Some("https://api.bankline.example".to_string())
        );
    }

    #[test]
    fn parse_flag_accepts_common_truthy_spellings() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag(""));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            verify_success_advances: false,
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("  "),
            verify_success_advances: None,
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert!(!config.verify_success_advances);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            verify_success_advances: false,
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            verify_success_advances: Some(true),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert!(config.verify_success_advances);
    }

    #[test]
    fn verify_mode_follows_the_switch() {
        let mut config = AppConfig {
            api_base_url: String::new(),
            verify_success_advances: false,
        };
        assert_eq!(config.verify_mode(), VerifyMode::Legacy);
        config.verify_success_advances = true;
        assert_eq!(config.verify_mode(), VerifyMode::Corrected);
    }
}
