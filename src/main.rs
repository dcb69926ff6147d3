mod env_variable_utils;
mod models;
mod router;
mod storage;
mod summarize;
mod utils;

use crate::env_variable_utils::{get_api_base_url, get_app_name, is_debug_mode};
use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
            get_app_name(),
            get_api_base_url(),
            is_debug_mode()
        )
        .into(),
    );

    // In debug mode probe the backend once so a misconfigured API_URL is
    // visible in the console right away.
    if is_debug_mode() {
        wasm_bindgen_futures::spawn_local(async {
            match summarize::api::get_health().await {
                Ok(response) => {
                    console::log_1(&format!("Backend health: HTTP {}", response.status()).into())
                }
                Err(e) => console::warn_1(&format!("Backend unreachable: {e}").into()),
            }
        });
    }
}
