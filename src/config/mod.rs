use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub(crate) const DEFAULT_JOKE_API_URL: &str = "https://icanhazdadjoke.com";
pub(crate) const DEFAULT_WOW_API_URL: &str = "https://owen-wilson-wow-api.onrender.com";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub joke_api_url: String,
    pub wow_api_url: String,
    pub log_level: String,
}

impl EnvConfig {
    /// Reads overrides from `window.ENV`.
    ///
    /// Both the upper-case keys (`JOKE_API_URL`) and the snake-case ones
    /// (`joke_api_url`) are accepted; upper-case wins.
    pub fn new() -> Self {
        Self::from_lookup(window_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |upper: &str, lower: &str| {
            lookup(upper)
                .or_else(|| lookup(lower))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let url = |upper: &str, lower: &str, default: &str| {
            pick(upper, lower)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            joke_api_url: url("JOKE_API_URL", "joke_api_url", DEFAULT_JOKE_API_URL),
            wow_api_url: url("WOW_API_URL", "wow_api_url", DEFAULT_WOW_API_URL),
            log_level: pick("LOG_LEVEL", "log_level")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Unparseable levels fall back to `info`.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn window_env(key: &str) -> Option<String> {
    let env = web_sys::window()?.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }
    js_sys::Reflect::get(&env, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()
}
