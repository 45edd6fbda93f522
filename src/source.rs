//! JioSaavn lookup source.
//!
//! The host-facing surface: composes search queries from artist/release or
//! title/artist input, drives the catalog client hit by hit, and hands back
//! normalized candidates plus a per-source distance contribution for the
//! ranking step.
//!
//! Failure policy: a failed search call only empties that lookup, while
//! detail-fetch and mapping problems carry a typed error out of the search
//! operations. Nothing escapes `candidates`/`item_candidates`; at that
//! boundary every failure is logged at debug level and contributes no
//! candidates.

use crate::config::SourceConfig;
use crate::distance::source_distance;
use crate::domain::{AlbumInfo, DATA_SOURCE, LookupError, TrackInfo};
use crate::query::normalize_query;
use crate::saavn::{SaavnClient, to_album_info, to_track_info};
use crate::traits::{EntityKind, SaavnApi};

/// Album and track candidate source backed by the JioSaavn catalog.
pub struct JioSaavnSource<C: SaavnApi = SaavnClient> {
    client: C,
    config: SourceConfig,
}

impl JioSaavnSource {
    /// Create a source using the production JioSaavn client.
    pub fn new(config: SourceConfig) -> Self {
        Self {
            client: SaavnClient::new(),
            config,
        }
    }
}

impl<C: SaavnApi> JioSaavnSource<C> {
    /// Create a source with a custom client implementation.
    pub fn with_client(client: C, config: SourceConfig) -> Self {
        Self { client, config }
    }

    /// Search the album catalog and map every hit to a candidate.
    ///
    /// Candidates come back in search ranking order. A failed search call
    /// yields an empty list; detail and mapping failures are errors.
    pub async fn search_albums(&self, query: &str) -> Result<Vec<AlbumInfo>, LookupError> {
        let query = normalize_query(query);
        tracing::debug!("Searching JioSaavn albums for {:?}", query);

        let hits = match self.client.search_albums(&query).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::debug!("JioSaavn album search failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let mut albums = Vec::with_capacity(hits.len());
        for hit in hits {
            let identifier = self
                .client
                .make_identifier(&hit.perma_url, EntityKind::Album)?;
            let details = self.client.album_details(&identifier).await?;
            albums.push(to_album_info(details, &hit.kind)?);
        }
        Ok(albums)
    }

    /// Search the song catalog and map every hit to a candidate.
    ///
    /// Same failure policy as [`Self::search_albums`].
    pub async fn search_tracks(&self, query: &str) -> Result<Vec<TrackInfo>, LookupError> {
        let query = normalize_query(query);
        tracing::debug!("Searching JioSaavn songs for {:?}", query);

        let hits = match self.client.search_songs(&query).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::debug!("JioSaavn song search failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let mut tracks = Vec::with_capacity(hits.len());
        for hit in hits {
            let identifier = self
                .client
                .make_identifier(&hit.perma_url, EntityKind::Song)?;
            let record = self.client.song_details(&identifier).await?;
            tracks.push(to_track_info(record)?);
        }
        Ok(tracks)
    }

    /// Album candidates for a release/artist pair.
    ///
    /// When the release likely has various artists the query is the release
    /// title alone; otherwise release and artist are joined. Never fails:
    /// any lookup error ends here as an empty list.
    pub async fn candidates(
        &self,
        artist: &str,
        release: &str,
        various_artists_likely: bool,
    ) -> Vec<AlbumInfo> {
        let query = if various_artists_likely {
            release.to_string()
        } else {
            format!("{} {}", release, artist)
        };

        match self.search_albums(&query).await {
            Ok(albums) => albums,
            Err(e) => {
                tracing::debug!("JioSaavn album lookup failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Track candidates for a title/artist pair. Never fails.
    pub async fn item_candidates(&self, title: &str, artist: &str) -> Vec<TrackInfo> {
        let query = format!("{} {}", title, artist);

        match self.search_tracks(&query).await {
            Ok(tracks) => tracks,
            Err(e) => {
                tracing::debug!("JioSaavn track lookup failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Distance contribution for an album candidate.
    pub fn album_distance(&self, album: &AlbumInfo) -> f64 {
        source_distance(&album.data_source, DATA_SOURCE, self.config.source_weight)
    }

    /// Distance contribution for a track candidate.
    pub fn track_distance(&self, track: &TrackInfo) -> f64 {
        source_distance(&track.data_source, DATA_SOURCE, self.config.source_weight)
    }
}
