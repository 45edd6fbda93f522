//! JioSaavn API Data Transfer Objects
//!
//! These types match EXACTLY what the JioSaavn `api.php` endpoint returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the saavn module - convert to domain types.
//!
//! The legacy API ships every scalar as a string ("year": "2013",
//! "duration": "262"); parsing those into numbers is the adapter's job,
//! not serde's. Only the fields the mapping consumes are declared here;
//! serde ignores the rest of the payload.

use serde::{Deserialize, Serialize};

/// One page of search results from `search.getAlbumResults` or
/// `search.getResults`. A response without the `results` key is malformed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Search hits in service ranking order
    pub results: Vec<SearchHit>,
}

/// A single search hit. Album and song searches share this shape.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchHit {
    /// Catalog id of the hit
    pub id: String,
    /// Display title
    pub title: String,
    /// Public permalink; the detail-lookup token is its last path segment
    pub perma_url: String,
    /// Entity kind tag ("album", "song", ...)
    #[serde(rename = "type")]
    pub kind: String,
}

/// Full album record from `webapi.get&type=album`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumDetails {
    /// Album title
    pub title: String,
    /// Catalog album id
    pub albumid: String,
    /// Public permalink
    pub perma_url: String,
    /// Comma-joined primary artist names
    pub primary_artists: String,
    /// Comma-joined primary artist ids, same order as the names
    pub primary_artists_id: String,
    /// Release year as a bare string; present even when release_date is not
    pub year: Option<String>,
    /// Full release date, "YYYY-MM-DD"
    pub release_date: Option<String>,
    /// Song records in album listing order
    pub songs: Vec<SongRecord>,
}

/// Response shape of `webapi.get&type=song`: always a list, even for a
/// single-song lookup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongResponse {
    pub songs: Vec<SongRecord>,
}

/// A single song record, both inside [`AlbumDetails::songs`] and in the
/// song-details response. Records can be sparse; newer payloads move the
/// duration under `more_info`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongRecord {
    /// Catalog song id
    pub id: String,
    /// Song title
    #[serde(rename = "song")]
    pub title: String,
    /// Public permalink
    pub perma_url: String,
    /// Comma-joined singer names
    #[serde(default)]
    pub singers: String,
    /// Album this song belongs to
    #[serde(default)]
    pub album: String,
    /// Catalog id of the music director
    #[serde(default)]
    pub music_id: String,
    /// Duration in whole seconds, as a string
    pub duration: Option<String>,
    /// Nested details in newer payload revisions
    pub more_info: Option<SongMoreInfo>,
}

/// Nested song details; only the duration is consumed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongMoreInfo {
    /// Duration in whole seconds, as a string
    pub duration: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
