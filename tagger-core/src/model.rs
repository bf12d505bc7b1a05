//! Candidate Record Model
//!
//! The records a metadata source hands back to the autotagging host. The
//! host scores candidates against the user's file tags with its own distance
//! metric; nothing here is persisted by the source.
//!
//! Invariants the mapping layer upholds:
//! - counts are non-negative integers
//! - release dates are fully populated (year, month, day) or fully absent
//! - the `&quot;` entity is unescaped in every free-text field

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An album candidate assembled from one catalog detail payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumInfo {
    /// Album title
    pub album: String,

    /// Catalog album id
    pub album_id: i64,

    /// Catalog slug identifier (last path segment of the canonical URL)
    pub seokey: String,

    /// Artist name(s) as reported by the catalog
    pub artist: String,

    /// Catalog artist id(s)
    pub artist_id: String,

    /// Catalog artist slug(s)
    pub artist_seokey: String,

    /// Release year, present only with month and day
    pub year: Option<i32>,

    /// Release month, present only with year and day
    pub month: Option<u32>,

    /// Release day, present only with year and month
    pub day: Option<u32>,

    /// Record label, only when the catalog reports a non-empty one
    pub label: Option<String>,

    /// Cover-art URL that survived the decode probe
    pub cover_art_url: Option<String>,

    /// Play count
    pub play_count: u64,

    /// Favorite count
    pub fav_count: u64,

    /// Tracks in catalog order
    pub tracks: Vec<TrackInfo>,

    /// Highest medium index observed, 0 when the track list is empty
    pub mediums: u32,

    /// Name of the source that produced this candidate
    pub data_source: &'static str,
}

/// A track candidate, either standalone or part of an [`AlbumInfo`].
///
/// `index`, `medium`, and `medium_total` are assigned during album assembly
/// and stay 0 when the track is mapped outside an album context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackInfo {
    /// Track title
    pub title: String,

    /// Catalog track id
    pub track_id: i64,

    /// Catalog slug identifier
    pub seokey: String,

    /// Duration in whole seconds, when the catalog reports one
    pub length: Option<u64>,

    /// Artist name(s)
    pub artist: String,

    /// Title of the album this track belongs to
    pub album: String,

    /// Catalog artist id(s)
    pub artist_id: String,

    /// Catalog artist slug(s)
    pub artist_seokey: String,

    /// Genre tag(s)
    pub genres: Option<String>,

    /// Popularity / play count, when the catalog reports one
    pub popularity: Option<u64>,

    /// Favorite count
    pub fav_count: u64,

    /// 1-based position within the album, 0 when standalone
    pub index: u32,

    /// Medium (disc) index, 0 when standalone
    pub medium: u32,

    /// Number of tracks sharing this medium, 0 when standalone
    pub medium_total: u32,

    /// When this record was mapped (not when the catalog last changed)
    pub updated: DateTime<Utc>,

    /// Name of the source that produced this candidate
    pub data_source: &'static str,
}

/// A minimal song reference imported from a catalog playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
    pub title: String,
    pub artist: String,
    pub album: String,
}
