//! Adapter layer: Convert JioSaavn DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if JioSaavn changes their response format,
//! only this file and dto.rs need to change.

use std::collections::HashMap;

use super::dto;
use crate::domain::{AlbumInfo, DATA_SOURCE, LookupError, TrackInfo};

/// Convert an album details record to candidate metadata.
///
/// `albumtype` is the entity kind tag from the search hit that produced
/// this album; the detail record itself does not carry one.
pub fn to_album_info(
    details: dto::AlbumDetails,
    albumtype: &str,
) -> Result<AlbumInfo, LookupError> {
    if details.songs.is_empty() {
        return Err(LookupError::mapping(format!(
            "album {} has no songs",
            details.albumid
        )));
    }

    let (year, month, day) = release_date_parts(&details)?;

    let mut tracks = Vec::with_capacity(details.songs.len());
    for song in details.songs {
        tracks.push(to_track_info(song)?);
    }
    let mediums = sequence_tracks(&mut tracks);

    Ok(AlbumInfo {
        album: details.title,
        album_id: details.albumid.clone(),
        saavn_album_id: details.albumid,
        artist: details.primary_artists,
        artist_id: details.primary_artists_id.clone(),
        saavn_artist_id: details.primary_artists_id,
        tracks,
        albumtype: albumtype.to_string(),
        year,
        month,
        day,
        mediums,
        data_source: DATA_SOURCE.to_string(),
        saavn_perma_url: details.perma_url,
    })
}

/// Convert a single song record to candidate metadata.
///
/// Position fields (`index`, `medium`, `medium_total`) stay unset here;
/// they only mean something relative to an album listing and are filled
/// in by [`to_album_info`].
pub fn to_track_info(record: dto::SongRecord) -> Result<TrackInfo, LookupError> {
    let length = track_length(&record)?;

    Ok(TrackInfo {
        title: record.title,
        track_id: record.id.clone(),
        saavn_track_id: record.id,
        artist: record.singers,
        album: record.album,
        saavn_artist_id: record.music_id,
        length,
        index: None,
        medium: None,
        medium_total: None,
        data_source: DATA_SOURCE.to_string(),
        saavn_perma_url: record.perma_url,
    })
}

/// Extract year/month/day for an album.
///
/// A present `release_date` must be a full "YYYY-MM-DD"; anything else in
/// that field is a mapping error. When the field is absent the bare `year`
/// string is the fallback (unparsable year means no year), and month/day
/// are unknown rather than guessed.
fn release_date_parts(
    details: &dto::AlbumDetails,
) -> Result<(Option<i32>, Option<u32>, Option<u32>), LookupError> {
    let Some(date) = details.release_date.as_deref().filter(|d| !d.is_empty()) else {
        let year = details
            .year
            .as_deref()
            .and_then(|y| y.trim().parse().ok());
        return Ok((year, None, None));
    };

    let mut parts = date.splitn(3, '-');
    let year = parts.next().and_then(|p| p.parse::<i32>().ok());
    let month = parts.next().and_then(|p| p.parse::<u32>().ok());
    let day = parts.next().and_then(|p| p.parse::<u32>().ok());

    match (year, month, day) {
        (Some(year), Some(month), Some(day)) => Ok((Some(year), Some(month), Some(day))),
        _ => Err(LookupError::mapping(format!(
            "album {} has malformed release_date {:?}",
            details.albumid, date
        ))),
    }
}

/// Position tracks within their album listing.
///
/// Assigns each track its 1-based index in listing order (album-wide, not
/// per disc), defaults tracks without a disc number to medium 1, and
/// backfills `medium_total` with the count of tracks sharing each medium.
/// Returns the highest medium number as the album's disc count.
fn sequence_tracks(tracks: &mut [TrackInfo]) -> u32 {
    for (position, track) in tracks.iter_mut().enumerate() {
        track.index = Some(position as u32 + 1);
        if track.medium.is_none() {
            track.medium = Some(1);
        }
    }

    let mut totals: HashMap<u32, u32> = HashMap::new();
    for track in tracks.iter() {
        if let Some(medium) = track.medium {
            *totals.entry(medium).or_insert(0) += 1;
        }
    }
    for track in tracks.iter_mut() {
        track.medium_total = track.medium.and_then(|m| totals.get(&m).copied());
    }

    totals.keys().copied().max().unwrap_or(1)
}

/// Duration in whole seconds, preferring the record's own `duration` over
/// `more_info.duration`. A missing, empty, zero, or unparsable value counts
/// as absent; a song with no usable duration anywhere cannot be mapped.
fn track_length(record: &dto::SongRecord) -> Result<u32, LookupError> {
    let own = parse_duration(record.duration.as_deref());
    let nested = record
        .more_info
        .as_ref()
        .and_then(|info| parse_duration(info.duration.as_deref()));

    own.or(nested).ok_or_else(|| {
        LookupError::mapping(format!("song {} has no usable duration", record.id))
    })
}

fn parse_duration(raw: Option<&str>) -> Option<u32> {
    match raw?.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(seconds) => Some(seconds),
    }
}
