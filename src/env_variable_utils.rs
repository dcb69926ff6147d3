use lazy_static::lazy_static;
use wasm_bindgen::JsValue;
use web_sys::window;

lazy_static! {
    pub static ref API_BASE_URL: String = get_api_base_url();
}

/// Runtime configuration is injected by the hosting page as a global
/// ENV_CONFIG object, so the same wasm bundle works across deployments.
fn env_config() -> Option<JsValue> {
    let window = window().expect("should have a window in this context");
    let config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;
    if config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }
    Some(config)
}

pub fn get_env_var(key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(&env_config()?, &key.into()).ok()?;
    let found = value.as_string();
    if found.is_none() {
        log::warn!("Environment variable '{}' is undefined", key);
    }
    found
}

pub fn get_api_base_url() -> String {
    get_env_var("API_URL").unwrap_or_else(|| "http://localhost:8000".to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Video Summarizer".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
