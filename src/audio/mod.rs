use crate::api::ApiClient;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Start playback of `url` and wait until the browser accepts it.
pub(crate) async fn play_clip(url: &str) -> Result<(), JsValue> {
    let audio = web_sys::HtmlAudioElement::new_with_src(url)?;
    JsFuture::from(audio.play()?).await?;
    Ok(())
}

/// Fetch one random "wow" and play it.
///
/// Never fails from the caller's point of view: a missing clip, a network
/// error or a blocked autoplay are only logged.
pub(crate) async fn play_random_wow(api: &ApiClient) {
    match api.fetch_random_wow().await {
        Ok(Some(clip)) => {
            log::debug!("playing wow from {} ({:?}): {}", clip.movie, clip.year, clip.full_line);
            if let Err(e) = play_clip(&clip.audio).await {
                log::warn!("failed to play wow {}: {e:?}", clip.audio);
            }
        }
        Ok(None) => log::debug!("wow API returned no playable clip"),
        Err(e) => log::warn!("failed to fetch a wow: {e}"),
    }
}
