//! Metadata Source Contract
//!
//! The interface the autotagging host drives. Lookup methods are infallible
//! at this boundary: a source logs its own transport and decode failures and
//! degrades to an empty list or `None`, so a flaky catalog never aborts an
//! import run.

use async_trait::async_trait;

use crate::model::{AlbumInfo, TrackInfo};

/// A remote catalog that can serve album and track candidates.
///
/// # Example
///
/// ```ignore
/// use tagger_core::source::MetadataSource;
///
/// async fn lookup(source: &dyn MetadataSource) {
///     let candidates = source.candidates("Pink Floyd", "The Wall", false).await;
///     for album in candidates {
///         println!("{} ({})", album.album, source.data_source());
///     }
/// }
/// ```
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Stable name of this source, stamped into every record it produces.
    fn data_source(&self) -> &'static str;

    /// Weight the host adds to its distance metric for candidates from this
    /// source.
    fn source_weight(&self) -> f64;

    /// Album candidates for a release/artist pair. When `va_likely` is set
    /// the release is probably a compilation and the artist is left out of
    /// the query.
    async fn candidates(&self, artist: &str, release: &str, va_likely: bool) -> Vec<AlbumInfo>;

    /// Track candidates for a title/artist pair.
    async fn item_candidates(&self, artist: &str, title: &str) -> Vec<TrackInfo>;

    /// Resolve an album from a catalog URL. Returns `None` when the URL does
    /// not belong to this source or the lookup fails.
    async fn album_for_id(&self, album_id: &str) -> Option<AlbumInfo>;

    /// Resolve a track from a catalog URL. Returns `None` when the URL does
    /// not belong to this source or the lookup fails.
    async fn track_for_id(&self, track_id: &str) -> Option<TrackInfo>;
}
