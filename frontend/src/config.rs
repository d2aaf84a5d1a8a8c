use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Picks the first usable base URL out of `candidates`, stripping trailing
/// slashes. Blank entries are skipped.
pub fn resolve_base_url<I, S>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|candidate| candidate.as_ref().trim().trim_end_matches('/').to_string())
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn build_time_base_url() -> Option<&'static str> {
    option_env!("HRMS_API_URL")
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    // window.__HRMS_ENV = { API_URL: "..." } is written by env.js at deploy time.
    pub fn from_env_js() -> Option<String> {
        read_global_key("__HRMS_ENV", &["API_URL", "api_url"])
    }

    pub fn from_window_config() -> Option<String> {
        read_global_key("__HRMS_CONFIG", &["api_base_url", "API_BASE_URL"])
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let Some(url) = &cfg.api_base_url else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &"__HRMS_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let globals = browser::from_env_js().or_else(browser::from_window_config);
    let runtime = if globals.is_some() {
        None
    } else {
        let cfg = browser::fetch_runtime_config().await;
        if let Some(cfg) = &cfg {
            browser::write_window_config(cfg);
        }
        cfg.and_then(|cfg| cfg.api_base_url)
    };
    let resolved = resolve_base_url([globals, runtime, build_time_base_url().map(String::from)]);
    log::debug!("API base URL resolved to {}", resolved);
    cache_base_url(resolved)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    cache_base_url(resolve_base_url([build_time_base_url()]))
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_first_non_blank_candidate() {
        let url = resolve_base_url([None, Some("  "), Some("https://hr.example.com/")]);
        assert_eq!(url, "https://hr.example.com");
    }

    #[test]
    fn resolve_falls_back_to_localhost() {
        let url = resolve_base_url::<_, &str>([None, None]);
        assert_eq!(url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn resolve_strips_repeated_trailing_slashes() {
        let url = resolve_base_url([Some("http://api.local:9000//")]);
        assert_eq!(url, "http://api.local:9000");
    }
}
