use crate::models::Joke;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub(crate) const VIBRATE_THUMBS_DOWN: &[u32] = &[50];
pub(crate) const VIBRATE_WOW: &[u32] = &[50, 50, 50];

pub(crate) fn share_message(joke: &Joke) -> String {
    format!("{}\n\n- Shared from WowDad 🤣", joke.text)
}

fn navigator_has(name: &str) -> Option<web_sys::Navigator> {
    let navigator = web_sys::window()?.navigator();
    js_sys::Reflect::has(&navigator, &JsValue::from_str(name))
        .unwrap_or(false)
        .then_some(navigator)
}

/// No-op on devices without the Vibration API (iOS Safari).
pub(crate) fn vibrate(pattern: &[u32]) {
    let Some(navigator) = navigator_has("vibrate") else {
        return;
    };
    let pattern: js_sys::Array = pattern.iter().map(|ms| JsValue::from(*ms)).collect();
    let _ = navigator.vibrate_with_pattern(&pattern);
}

/// Hand `text` to the platform share sheet (Web Share API).
pub(crate) async fn share_text(text: &str) -> Result<(), JsValue> {
    let navigator = navigator_has("share")
        .ok_or_else(|| JsValue::from_str("sharing is not supported on this device"))?;
    let share: js_sys::Function =
        js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))?.dyn_into()?;

    let data = js_sys::Object::new();
    js_sys::Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(text))?;

    let promise: js_sys::Promise = share.call1(&navigator, &data)?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Blocking yes/no prompt. Treats a missing window as "no".
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
