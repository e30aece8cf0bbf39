use serde::{Deserialize, Serialize};

/// One joke as served by the joke API and as persisted in the saved collection.
///
/// The body is stored under the `joke` key (both upstream and on disk).
/// Identity is `id` alone: two records with the same id are the same joke.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Joke {
    pub id: String,
    #[serde(rename = "joke")]
    pub text: String,
}

#[cfg(test)]
impl Joke {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A single "wow" clip descriptor from the celebration API.
///
/// Only `audio` is needed for playback; the rest is kept for display and
/// defaults when the backend omits it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct WowClip {
    #[serde(default)]
    pub movie: String,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub full_line: String,
    pub audio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joke_uses_joke_field_name_on_the_wire() {
        let v = serde_json::to_value(Joke::new("a1", "X")).expect("should serialize");
        assert_eq!(v, serde_json::json!({ "id": "a1", "joke": "X" }));
    }

    #[test]
    fn joke_api_response_ignores_status_field() {
        let json = r#"{"id":"R7UfaahVfFd","joke":"My dog used to chase people on a bike a lot.","status":200}"#;
        let parsed: Joke = serde_json::from_str(json).expect("joke response should parse");
        assert_eq!(parsed.id, "R7UfaahVfFd");
        assert!(parsed.text.starts_with("My dog"));
    }

    #[test]
    fn wow_clip_only_requires_audio() {
        let parsed: WowClip =
            serde_json::from_str(r#"{"audio":"https://example.com/wow.mp3"}"#)
                .expect("minimal clip should parse");
        assert_eq!(parsed.audio, "https://example.com/wow.mp3");
        assert!(parsed.movie.is_empty());
        assert!(parsed.year.is_none());
    }
}
