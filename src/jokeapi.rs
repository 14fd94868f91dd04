use crate::errors::FetchError;
use crate::models::ApiJoke;
use reqwest::{Client, Url};

pub const ANY_CATEGORY: &str = "Any";
pub const CATEGORIES: [&str; 7] = [
    ANY_CATEGORY,
    "Programming",
    "Misc",
    "Dark",
    "Pun",
    "Spooky",
    "Christmas",
];
pub const BLACKLIST_FLAGS: &str = "nsfw,religious,racist,sexist,explicit";
pub const JOKE_TYPES: &str = "twopart,single";

pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        ANY_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct JokeClient {
    http: Client,
    base: Url,
}

impl JokeClient {
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base).map_err(|err| FetchError::Url(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::Url(format!("{base} cannot be a base")));
        }
        let http = Client::builder()
            .user_agent(format!("joke_widget/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Network)?;
        Ok(Self { http, base })
    }

    // <base>/<category>?blacklistFlags=...&type=twopart,single
    pub fn joke_url(&self, category: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(category);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("blacklistFlags", BLACKLIST_FLAGS)
            .append_pair("type", JOKE_TYPES);
        url
    }

    pub async fn fetch(&self, category: &str) -> Result<ApiJoke, FetchError> {
        let response = self
            .http
            .get(self.joke_url(category))
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json::<ApiJoke>().await.map_err(FetchError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn url_carries_category_and_fixed_filters() {
        let client = JokeClient::new("https://v2.jokeapi.dev/joke/").unwrap();
        assert_eq!(
            client.joke_url("Programming").as_str(),
            "https://v2.jokeapi.dev/joke/Programming?blacklistFlags=nsfw%2Creligious%2Cracist%2Csexist%2Cexplicit&type=twopart%2Csingle"
        );
    }

    #[test]
    fn base_without_trailing_slash_still_appends_category() {
        let client = JokeClient::new("http://127.0.0.1:9/joke").unwrap();
        assert_eq!(client.joke_url("Any").path(), "/joke/Any");
    }

    #[test]
    fn category_is_a_single_path_segment() {
        let client = JokeClient::new("http://127.0.0.1:9/joke/").unwrap();
        assert_eq!(client.joke_url("a/b").path(), "/joke/a%2Fb");
    }

    #[test]
    fn blank_category_means_any() {
        assert_eq!(normalize_category("  "), "Any");
        assert_eq!(normalize_category("Pun"), "Pun");
    }

    #[tokio::test]
    async fn fetch_parses_two_part_payload() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/joke/Pun")
                    .query_param("type", JOKE_TYPES)
                    .query_param("blacklistFlags", BLACKLIST_FLAGS);
                then.status(200).json_body(serde_json::json!({
                    "type": "twopart",
                    "setup": "S",
                    "delivery": "D",
                    "category": "Pun",
                    "flags": { "explicit": false }
                }));
            })
            .await;

        let client = JokeClient::new(&server.url("/joke/")).unwrap();
        let joke = client.fetch("Pun").await.unwrap();
        assert_eq!(joke.setup.as_deref(), Some("S"));
        assert_eq!(joke.delivery.as_deref(), Some("D"));
        assert_eq!(joke.category.as_deref(), Some("Pun"));
    }

    #[tokio::test]
    async fn fetch_reports_non_success_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/joke/Any");
                then.status(503);
            })
            .await;

        let client = JokeClient::new(&server.url("/joke/")).unwrap();
        let err = client.fetch("Any").await.unwrap_err();
        assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 503));
    }
}
