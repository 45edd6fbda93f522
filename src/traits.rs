//! Trait definition for the catalog client.
//!
//! The lookup source takes its JioSaavn client as an injected dependency.
//! Production code uses the real [`SaavnClient`](crate::saavn::SaavnClient),
//! while tests substitute mock implementations that return canned responses
//! and record the calls they receive.

use async_trait::async_trait;

use crate::domain::LookupError;
use crate::saavn::dto::{AlbumDetails, SearchHit, SongRecord};

/// Catalog entity kinds the identifier scheme distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Album,
    Song,
}

impl EntityKind {
    /// Wire name used in identifiers and detail requests.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Album => "album",
            EntityKind::Song => "song",
        }
    }
}

/// Trait for JioSaavn catalog access.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SaavnApi: Send + Sync {
    /// Search the album catalog.
    async fn search_albums(&self, query: &str) -> Result<Vec<SearchHit>, LookupError>;

    /// Search the song catalog.
    async fn search_songs(&self, query: &str) -> Result<Vec<SearchHit>, LookupError>;

    /// Fetch full album details for an identifier from [`Self::make_identifier`].
    async fn album_details(&self, identifier: &str) -> Result<AlbumDetails, LookupError>;

    /// Fetch a single song record for an identifier from [`Self::make_identifier`].
    async fn song_details(&self, identifier: &str) -> Result<SongRecord, LookupError>;

    /// Derive the detail-lookup identifier from a search hit's permalink.
    ///
    /// The identifier is `{kind}/{token}` where the token is the last
    /// non-empty path segment of the permalink.
    fn make_identifier(&self, perma_url: &str, kind: EntityKind) -> Result<String, LookupError> {
        let token = perma_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("");

        if token.is_empty() {
            return Err(LookupError::InvalidPermalink(perma_url.to_string()));
        }
        Ok(format!("{}/{}", kind.as_str(), token))
    }
}

// Implement the trait for the real client

#[async_trait]
impl SaavnApi for crate::saavn::SaavnClient {
    async fn search_albums(&self, query: &str) -> Result<Vec<SearchHit>, LookupError> {
        self.search_albums(query).await
    }

    async fn search_songs(&self, query: &str) -> Result<Vec<SearchHit>, LookupError> {
        self.search_songs(query).await
    }

    async fn album_details(&self, identifier: &str) -> Result<AlbumDetails, LookupError> {
        self.album_details(identifier).await
    }

    async fn song_details(&self, identifier: &str) -> Result<SongRecord, LookupError> {
        self.song_details(identifier).await
    }
}

/// Mock catalog client for testing.
///
/// Returns configurable responses for testing different scenarios.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Mock JioSaavn client that returns predefined records and keeps a
    /// log of the queries and identifiers it was asked for.
    #[derive(Default)]
    pub struct MockSaavn {
        /// Hits returned from both search calls
        pub hits: Vec<SearchHit>,
        /// Album details returned from album_details
        pub album: Option<AlbumDetails>,
        /// Song record returned from song_details
        pub song: Option<SongRecord>,
        /// Error to return from search calls (takes precedence over hits)
        pub search_error: Option<LookupError>,
        /// Error to return from detail calls (takes precedence over records)
        pub detail_error: Option<LookupError>,
        /// Queries received by the search methods, in call order
        pub queries: Mutex<Vec<String>>,
        /// Identifiers received by the detail methods, in call order
        pub detail_requests: Mutex<Vec<String>>,
    }

    impl MockSaavn {
        /// Create a mock whose searches find nothing.
        pub fn no_hits() -> Self {
            Self::default()
        }

        /// Create a mock that resolves one search hit to an album.
        pub fn with_album(hit: SearchHit, album: AlbumDetails) -> Self {
            Self {
                hits: vec![hit],
                album: Some(album),
                ..Self::default()
            }
        }

        /// Create a mock that resolves one search hit to a song.
        pub fn with_song(hit: SearchHit, song: SongRecord) -> Self {
            Self {
                hits: vec![hit],
                song: Some(song),
                ..Self::default()
            }
        }

        /// Create a mock whose search calls fail.
        pub fn failing_search(error: LookupError) -> Self {
            Self {
                search_error: Some(error),
                ..Self::default()
            }
        }

        /// Create a mock whose searches succeed but detail fetches fail.
        pub fn failing_details(hits: Vec<SearchHit>, error: LookupError) -> Self {
            Self {
                hits,
                detail_error: Some(error),
                ..Self::default()
            }
        }

        /// Queries the search methods have received so far.
        pub fn received_queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }

        /// Identifiers the detail methods have received so far.
        pub fn received_detail_requests(&self) -> Vec<String> {
            self.detail_requests.lock().unwrap().clone()
        }

        fn search(&self, query: &str) -> Result<Vec<SearchHit>, LookupError> {
            self.queries.lock().unwrap().push(query.to_string());
            if let Some(ref err) = self.search_error {
                return Err(err.clone());
            }
            Ok(self.hits.clone())
        }
    }

    #[async_trait]
    impl SaavnApi for MockSaavn {
        async fn search_albums(&self, query: &str) -> Result<Vec<SearchHit>, LookupError> {
            self.search(query)
        }

        async fn search_songs(&self, query: &str) -> Result<Vec<SearchHit>, LookupError> {
            self.search(query)
        }

        async fn album_details(&self, identifier: &str) -> Result<AlbumDetails, LookupError> {
            self.detail_requests.lock().unwrap().push(identifier.to_string());
            if let Some(ref err) = self.detail_error {
                return Err(err.clone());
            }
            self.album
                .clone()
                .ok_or_else(|| LookupError::mapping("mock has no album"))
        }

        async fn song_details(&self, identifier: &str) -> Result<SongRecord, LookupError> {
            self.detail_requests.lock().unwrap().push(identifier.to_string());
            if let Some(ref err) = self.detail_error {
                return Err(err.clone());
            }
            self.song
                .clone()
                .ok_or_else(|| LookupError::mapping("mock has no song"))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_records_queries() {
            let mock = MockSaavn::no_hits();

            mock.search_albums("first").await.unwrap();
            mock.search_songs("second").await.unwrap();

            assert_eq!(mock.received_queries(), vec!["first", "second"]);
        }

        #[tokio::test]
        async fn test_mock_search_error() {
            let mock = MockSaavn::failing_search(LookupError::Network("timeout".to_string()));

            let result = mock.search_albums("anything").await;

            assert!(matches!(result, Err(LookupError::Network(_))));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mocks::MockSaavn;

    #[test]
    fn test_entity_kind_wire_names() {
        assert_eq!(EntityKind::Album.as_str(), "album");
        assert_eq!(EntityKind::Song.as_str(), "song");
    }

    #[test]
    fn test_identifier_from_permalink() {
        let api = MockSaavn::no_hits();

        let identifier = api
            .make_identifier(
                "https://www.jiosaavn.com/album/aashiqui-2/y9jAtz8tO9U_",
                EntityKind::Album,
            )
            .unwrap();

        assert_eq!(identifier, "album/y9jAtz8tO9U_");
    }

    #[test]
    fn test_identifier_ignores_trailing_slash() {
        let api = MockSaavn::no_hits();

        let identifier = api
            .make_identifier(
                "https://www.jiosaavn.com/song/tum-hi-ho/GQFfdhhDXmU/",
                EntityKind::Song,
            )
            .unwrap();

        assert_eq!(identifier, "song/GQFfdhhDXmU");
    }

    #[test]
    fn test_identifier_rejects_empty_permalink() {
        let api = MockSaavn::no_hits();

        for bad in ["", "/", "///"] {
            let result = api.make_identifier(bad, EntityKind::Album);
            assert!(
                matches!(result, Err(LookupError::InvalidPermalink(_))),
                "{bad:?} should not yield an identifier"
            );
        }
    }
}
