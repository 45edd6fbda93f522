//! JioSaavn catalog lookup for music tagging pipelines.
//!
//! Turns free-text artist/release/title input into normalized album and
//! track metadata candidates from the JioSaavn catalog: query normalization,
//! catalog search, per-hit detail lookup, DTO-to-domain mapping, and a
//! per-source distance weight for candidate ranking.
//!
//! ```no_run
//! use jiosaavn_lookup::{JioSaavnSource, SourceConfig};
//!
//! # async fn demo() {
//! let source = JioSaavnSource::new(SourceConfig::default());
//! let albums = source.candidates("Daft Punk", "Discovery", false).await;
//! for album in &albums {
//!     println!("{} ({:?}) - {} tracks", album.album, album.year, album.tracks.len());
//! }
//! # }
//! ```

pub mod config;
pub mod distance;
pub mod domain;
pub mod query;
pub mod saavn;
pub mod source;
pub mod traits;

pub use config::{DEFAULT_SOURCE_WEIGHT, SourceConfig};
pub use domain::{AlbumInfo, DATA_SOURCE, LookupError, TrackInfo};
pub use query::normalize_query;
pub use saavn::SaavnClient;
pub use source::JioSaavnSource;
pub use traits::{EntityKind, SaavnApi};
