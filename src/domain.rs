//! Internal domain models for album and track candidates.
//!
//! These types are OUR types - they don't change when the JioSaavn API
//! changes. All API responses get converted into these types via the
//! adapter before anything downstream sees them.

/// Tag identifying records produced by this lookup source.
///
/// The ranking step compares a candidate's `data_source` against this tag
/// when applying the configured source weight.
pub const DATA_SOURCE: &str = "JioSaavn";

/// A normalized album candidate handed to the matching pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumInfo {
    /// Album title
    pub album: String,
    /// Generic album identifier
    pub album_id: String,
    /// Source-specific album identifier (same value, provenance field)
    pub saavn_album_id: String,
    /// Primary artist name(s), comma-joined as the source ships them
    pub artist: String,
    /// Generic artist identifier
    pub artist_id: String,
    /// Source-specific artist identifier
    pub saavn_artist_id: String,
    /// Tracks in listing order
    pub tracks: Vec<TrackInfo>,
    /// Album type tag from the search hit ("album", "EP", ...)
    pub albumtype: String,
    /// Release year
    pub year: Option<i32>,
    /// Release month (unset when the source omits the release date)
    pub month: Option<u32>,
    /// Release day (unset when the source omits the release date)
    pub day: Option<u32>,
    /// Total disc count, the maximum medium number across all tracks
    pub mediums: u32,
    /// Provenance tag, always [`DATA_SOURCE`] for records built here
    pub data_source: String,
    /// Stable external URL for this album
    pub saavn_perma_url: String,
}

/// A normalized track candidate.
///
/// Tracks appear both inside [`AlbumInfo::tracks`] (with position fields
/// filled in) and standalone from track searches (position fields unset).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackInfo {
    /// Track title
    pub title: String,
    /// Generic track identifier
    pub track_id: String,
    /// Source-specific track identifier
    pub saavn_track_id: String,
    /// Singer name(s), comma-joined as the source ships them
    pub artist: String,
    /// Title of the album this track belongs to
    pub album: String,
    /// Source-specific artist identifier
    pub saavn_artist_id: String,
    /// Duration in whole seconds
    pub length: u32,
    /// 1-based position in album listing order, independent of medium
    pub index: Option<u32>,
    /// Disc number this track sits on
    pub medium: Option<u32>,
    /// Count of tracks sharing this track's medium across the album
    pub medium_total: Option<u32>,
    /// Provenance tag, always [`DATA_SOURCE`] for records built here
    pub data_source: String,
    /// Stable external URL for this track
    pub saavn_perma_url: String,
}

/// Errors that can occur while looking up or mapping catalog data.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    /// Transport-level failure talking to the catalog service
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected JSON shape
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// No usable identifier could be derived from a permalink
    #[error("cannot derive identifier from permalink {0:?}")]
    InvalidPermalink(String),

    /// A detail record lacks a field the mapping depends on
    #[error("mapping failed: {0}")]
    Mapping(String),
}

impl LookupError {
    /// Create a mapping error with a descriptive message.
    pub fn mapping(message: impl Into<String>) -> Self {
        Self::Mapping(message.into())
    }
}
