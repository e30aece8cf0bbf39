use crate::config::EnvConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Joke, WowClip};

// icanhazdadjoke asks clients to identify themselves.
const USER_AGENT: &str = "WowDad App (https://github.com/user/wowdad)";

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) joke_base_url: String,
    pub(crate) wow_base_url: String,
}

impl ApiClient {
    pub fn new(joke_base_url: String, wow_base_url: String) -> Self {
        Self {
            joke_base_url,
            wow_base_url,
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(config.joke_api_url.clone(), config.wow_api_url.clone())
    }

    pub(crate) fn random_joke_url(&self) -> String {
        format!("{}/", self.joke_base_url)
    }

    pub(crate) fn random_wow_url(&self) -> String {
        format!("{}/wows/random", self.wow_base_url)
    }

    async fn get_json(&self, url: String, ctx: &str) -> ApiResult<serde_json::Value> {
        let res = reqwest::Client::new()
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    pub async fn fetch_random_joke(&self) -> ApiResult<Joke> {
        let data = self
            .get_json(self.random_joke_url(), "Fetching a joke failed")
            .await?;
        Self::parse_joke_response(data)
    }

    /// `Ok(None)` when the backend returned no playable clip.
    pub async fn fetch_random_wow(&self) -> ApiResult<Option<WowClip>> {
        let data = self
            .get_json(self.random_wow_url(), "Fetching a wow failed")
            .await?;
        Self::parse_wow_response(data)
    }

    pub(crate) fn parse_joke_response(data: serde_json::Value) -> ApiResult<Joke> {
        let joke: Joke = serde_json::from_value(data).map_err(ApiError::parse)?;
        if joke.id.trim().is_empty() {
            return Err(ApiError::parse("joke response is missing an id"));
        }
        Ok(joke)
    }

    /// The wow API answers with a list; the first clip with an audio URL wins.
    pub(crate) fn parse_wow_response(data: serde_json::Value) -> ApiResult<Option<WowClip>> {
        let clips: Vec<WowClip> = serde_json::from_value(data).map_err(ApiError::parse)?;
        Ok(clips.into_iter().find(|c| !c.audio.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;

    fn client() -> ApiClient {
        ApiClient::new(
            "https://icanhazdadjoke.com".to_string(),
            "https://owen-wilson-wow-api.onrender.com".to_string(),
        )
    }

    #[test]
    fn urls_are_built_from_base() {
        let c = client();
        assert_eq!(c.random_joke_url(), "https://icanhazdadjoke.com/");
        assert_eq!(
            c.random_wow_url(),
            "https://owen-wilson-wow-api.onrender.com/wows/random"
        );
    }

    #[test]
    fn from_config_copies_urls() {
        let config = EnvConfig::from_lookup(|k| {
            (k == "JOKE_API_URL").then(|| "http://localhost:3000".to_string())
        });
        let c = ApiClient::from_config(&config);
        assert_eq!(c.random_joke_url(), "http://localhost:3000/");
    }

    #[test]
    fn joke_response_contract_deserialize() {
        let data = serde_json::json!({
            "id": "R7UfaahVfFd",
            "joke": "My dog used to chase people on a bike a lot. It got so bad I had to take his bike away.",
            "status": 200
        });
        let joke = ApiClient::parse_joke_response(data).expect("joke response should parse");
        assert_eq!(joke.id, "R7UfaahVfFd");
        assert!(joke.text.ends_with("take his bike away."));
    }

    #[test]
    fn joke_response_without_id_is_parse_error() {
        let err = ApiClient::parse_joke_response(serde_json::json!({ "id": "", "joke": "X" }))
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Parse);

        let err = ApiClient::parse_joke_response(serde_json::json!({ "message": "rate limited" }))
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn wow_response_contract_deserialize() {
        let data = serde_json::json!([{
            "movie": "Wedding Crashers",
            "year": 2005,
            "release_date": "2005-07-15",
            "director": "David Dobkin",
            "character": "John Beckwith",
            "full_line": "Wow.",
            "current_wow_in_movie": 1,
            "total_wows_in_movie": 3,
            "video": { "1080p": "https://example.com/1080.mp4" },
            "audio": "https://example.com/wow.mp3"
        }]);
        let clip = ApiClient::parse_wow_response(data)
            .expect("wow response should parse")
            .expect("should pick a clip");
        assert_eq!(clip.movie, "Wedding Crashers");
        assert_eq!(clip.year, Some(2005));
        assert_eq!(clip.audio, "https://example.com/wow.mp3");
    }

    #[test]
    fn empty_wow_list_has_no_clip() {
        let clip = ApiClient::parse_wow_response(serde_json::json!([])).expect("should parse");
        assert!(clip.is_none());
    }

    #[test]
    fn wow_clips_without_audio_are_skipped() {
        let data = serde_json::json!([
            { "audio": "" },
            { "audio": "https://example.com/second.mp3" }
        ]);
        let clip = ApiClient::parse_wow_response(data).expect("should parse");
        assert_eq!(clip.map(|c| c.audio).as_deref(), Some("https://example.com/second.mp3"));
    }
}
