//! JioSaavn API integration
//!
//! Search and detail lookups against the public JioSaavn web API, plus the
//! mapping from its JSON records into normalized album/track candidates.
//!
//! The service exposes a single legacy endpoint (`api.php`) where the call
//! name travels in the query string and every scalar in the response is a
//! string.

pub mod dto;
mod adapter;
mod client;

pub use adapter::{to_album_info, to_track_info};
pub use client::SaavnClient;
