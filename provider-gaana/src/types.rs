//! Gaana API response types
//!
//! Data structures for deserializing catalog responses. Search endpoints
//! return arrays of summaries; detail endpoints return arrays whose first
//! element is the full record. Numeric-looking fields frequently arrive as
//! display strings ("55K+", "120~4") and are normalized by the `parse`
//! module during mapping.

use serde::Deserialize;

/// One entry of a `/albums/search` or `/songs/search` response.
///
/// Only the seokey is needed to drive the detail fetch; the title is carried
/// for log messages.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSummary {
    /// Slug identifier used by the detail endpoints
    pub seokey: String,

    /// Display title
    #[serde(default)]
    pub title: Option<String>,
}

/// A count that the service reports either as a JSON number or as a
/// human-readable string such as `"55K+"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CountField {
    Number(i64),
    Text(String),
}

/// Artwork URL table nested inside an album detail payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkUrls {
    #[serde(default)]
    pub large_artwork: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumImages {
    #[serde(default)]
    pub urls: ArtworkUrls,
}

/// Full album record from `/albums/info?seokey=`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumDetail {
    pub title: String,

    pub album_id: i64,

    pub seokey: String,

    /// Artist name(s)
    #[serde(default)]
    pub artists: String,

    /// Artist id(s)
    #[serde(default)]
    pub artist_ids: String,

    /// Artist slug(s)
    #[serde(default)]
    pub artist_seokeys: String,

    /// Release date as "YYYY-MM-DD", when the catalog has one
    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub images: AlbumImages,

    /// Display count, e.g. "1.2M+"
    #[serde(default)]
    pub play_count: Option<String>,

    /// Display count, e.g. "55K+"
    #[serde(default)]
    pub favorite_count: Option<String>,

    #[serde(default)]
    pub tracks: Vec<SongDetail>,
}

/// Full song record from `/songs/info?seokey=`, also embedded in album
/// detail payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct SongDetail {
    pub title: String,

    pub track_id: i64,

    pub seokey: String,

    /// Duration in seconds, as a string
    #[serde(default)]
    pub duration: Option<String>,

    /// Artist name(s)
    #[serde(default)]
    pub artists: String,

    /// Title of the album this song belongs to
    #[serde(default)]
    pub album: String,

    #[serde(default)]
    pub artist_ids: String,

    #[serde(default)]
    pub artist_seokeys: String,

    #[serde(default)]
    pub genres: Option<String>,

    /// Play count with a rating suffix, e.g. "120~4"
    #[serde(default)]
    pub popularity: Option<String>,

    /// Display count, e.g. "55K+"
    #[serde(default)]
    pub play_count: Option<String>,

    /// Integer or display string, depending on the endpoint
    #[serde(default)]
    pub favorite_count: Option<CountField>,
}

/// One entry of a `/playlists/info` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSong {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub artists: String,

    #[serde(default)]
    pub album: String,
}
