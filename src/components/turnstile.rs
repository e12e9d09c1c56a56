//! Cloudflare Turnstile integration. The widget script is loaded from
//! `index.html`; it injects a `cf-turnstile-response` field into the form
//! and exposes a global `window.turnstile` handle.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use yew::prelude::*;

use crate::config;

#[function_component(TurnstileWidget)]
pub fn turnstile_widget() -> Html {
    html! {
        <div class="cf-turnstile" data-sitekey={config::TURNSTILE_SITE_KEY}></div>
    }
}

/// Asks the widget to issue a fresh token. When the Turnstile script has not
/// loaded there is no `window.turnstile` handle; that case is a no-op.
pub fn reset_widget() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(handle) = Reflect::get(&window, &JsValue::from_str("turnstile")) else {
        return;
    };
    if handle.is_undefined() || handle.is_null() {
        return;
    }
    let Ok(reset) = Reflect::get(&handle, &JsValue::from_str("reset")) else {
        return;
    };
    let Ok(reset) = reset.dyn_into::<Function>() else {
        return;
    };
    if let Err(e) = reset.call0(&handle) {
        gloo_console::error!("turnstile reset failed:", e);
    }
}

/// Resets the widget when dropped. Created at the top of a submission
/// attempt so success, server error and transport error all reset the
/// challenge exactly once.
pub struct WidgetResetGuard;

impl Drop for WidgetResetGuard {
    fn drop(&mut self) {
        reset_widget();
    }
}
