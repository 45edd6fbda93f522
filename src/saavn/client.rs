//! JioSaavn HTTP client
//!
//! Talks to the legacy `api.php` surface of the JioSaavn web player. Every
//! operation is a plain GET with the call name in the query string; the
//! service needs no API key.
//!
//! One lookup is one request: no retries, no backoff, no caching here.

use super::dto;
use crate::domain::LookupError;

/// JioSaavn API client
pub struct SaavnClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent for outgoing requests
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl SaavnClient {
    /// Create a new client
    pub fn new() -> Self {
        Self::build("https://www.jiosaavn.com/api.php".to_string())
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::build(base_url.into())
    }

    fn build(base_url: String) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url,
        }
    }

    /// Search the album catalog, returning hits in service ranking order.
    pub async fn search_albums(&self, query: &str) -> Result<Vec<dto::SearchHit>, LookupError> {
        let url = self.search_url("search.getAlbumResults", query);
        let response: dto::SearchResponse = self.get_json(&url).await?;
        Ok(response.results)
    }

    /// Search the song catalog, returning hits in service ranking order.
    pub async fn search_songs(&self, query: &str) -> Result<Vec<dto::SearchHit>, LookupError> {
        let url = self.search_url("search.getResults", query);
        let response: dto::SearchResponse = self.get_json(&url).await?;
        Ok(response.results)
    }

    /// Fetch full album details for an identifier like `album/y9jAtz8tO9U_`.
    pub async fn album_details(&self, identifier: &str) -> Result<dto::AlbumDetails, LookupError> {
        let url = self.detail_url(identifier)?;
        self.get_json(&url).await
    }

    /// Fetch a single song record for an identifier like `song/GQFfdhhDXmU`.
    ///
    /// The endpoint always answers with a list of songs; the record is its
    /// first entry.
    pub async fn song_details(&self, identifier: &str) -> Result<dto::SongRecord, LookupError> {
        let url = self.detail_url(identifier)?;
        let response: dto::SongResponse = self.get_json(&url).await?;

        response.songs.into_iter().next().ok_or_else(|| {
            LookupError::mapping(format!("song details for {} contained no songs", identifier))
        })
    }

    fn search_url(&self, call: &str, query: &str) -> String {
        format!(
            "{}?__call={}&_format=json&_marker=0&q={}",
            self.base_url,
            call,
            urlencoding::encode(query)
        )
    }

    /// Build the `webapi.get` URL for a `{kind}/{token}` identifier.
    fn detail_url(&self, identifier: &str) -> Result<String, LookupError> {
        let Some((kind, token)) = identifier.split_once('/') else {
            return Err(LookupError::InvalidPermalink(identifier.to_string()));
        };

        Ok(format!(
            "{}?__call=webapi.get&token={}&type={}&_format=json&_marker=0",
            self.base_url,
            urlencoding::encode(token),
            urlencoding::encode(kind)
        ))
    }

    /// Send the GET request and parse the JSON response
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

impl Default for SaavnClient {
    fn default() -> Self {
        Self::new()
    }
}
