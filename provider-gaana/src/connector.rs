//! Gaana catalog connector
//!
//! Implements the `MetadataSource` trait against the Gaana REST API.
//!
//! Every lookup is two-staged: a search call returns summaries carrying a
//! seokey, then one detail call per summary retrieves the full record. An
//! N-result search therefore costs N+1 sequential round trips. Nothing is
//! cached or retried; a search-call failure degrades to an empty result and
//! a failing per-result detail fetch is skipped with a warning.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

use bridge_reqwest::ReqwestHttpClient;
use tagger_core::http::{HttpClient, HttpMethod, HttpRequest};
use tagger_core::model::{AlbumInfo, PlaylistEntry, TrackInfo};
use tagger_core::source::MetadataSource;
use tagger_core::time::{Clock, SystemClock};

use crate::artwork;
use crate::config::GaanaConfig;
use crate::error::{GaanaError, Result};
use crate::normalize::{normalize_query, unescape_entities};
use crate::parse::{parse_count, parse_duration, parse_popularity, parse_release_date};
use crate::types::{AlbumDetail, CountField, PlaylistSong, SearchSummary, SongDetail};

/// Name stamped into every record this source produces.
pub const DATA_SOURCE: &str = "Gaana";

/// Fixed endpoint paths relative to the configured base URL.
pub const SONG_SEARCH: &str = "/songs/search?query=";
pub const ALBUM_SEARCH: &str = "/albums/search?limit=5&query=";
pub const ARTIST_SEARCH: &str = "/artists/search?query=";
pub const SONG_DETAILS: &str = "/songs/info?seokey=";
pub const ALBUM_DETAILS: &str = "/albums/info?seokey=";
pub const ARTIST_DETAILS: &str = "/artists/info?seokey=";
pub const PLAYLIST_DETAILS: &str = "/playlists/info?seokey=";

/// Marker substrings identifying the kind of a catalog URL.
const ALBUM_URL_MARKER: &str = "gaana.com/album/";
const SONG_URL_MARKER: &str = "gaana.com/song/";
const PLAYLIST_URL_MARKER: &str = "/playlist/";

/// Gaana catalog connector
///
/// Stateless between calls: each operation is a pure function of its inputs
/// plus the network, so callers are free to run operations concurrently.
///
/// # Example
///
/// ```ignore
/// use provider_gaana::{GaanaConfig, GaanaConnector};
/// use tagger_core::source::MetadataSource;
///
/// let connector = GaanaConnector::new(GaanaConfig::new("https://gaana-api.example.com"))?;
/// let albums = connector.candidates("The Beatles", "Abbey Road", false).await;
/// ```
pub struct GaanaConnector {
    config: GaanaConfig,
    http_client: Arc<dyn HttpClient>,
    clock: Arc<dyn Clock>,
}

impl GaanaConnector {
    /// Creates a connector with the default reqwest transport.
    pub fn new(config: GaanaConfig) -> Result<Self> {
        let http_client: Arc<dyn HttpClient> =
            Arc::new(ReqwestHttpClient::with_timeout(config.timeout));
        Self::with_http_client(config, http_client)
    }

    /// Creates a connector over an injected transport.
    pub fn with_http_client(config: GaanaConfig, http_client: Arc<dyn HttpClient>) -> Result<Self> {
        Self::with_clock(config, http_client, Arc::new(SystemClock))
    }

    /// Creates a connector over an injected transport and time source.
    pub fn with_clock(
        config: GaanaConfig,
        http_client: Arc<dyn HttpClient>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            http_client,
            clock,
        })
    }

    /// Builds a search URL with the query wrapped in quote characters, the
    /// way the service expects phrase queries.
    fn search_url(&self, path: &str, query: &str) -> String {
        format!(
            "{}{}{}",
            self.config.base_url,
            path,
            urlencoding::encode(&format!("\"{}\"", query))
        )
    }

    fn detail_url(&self, path: &str, seokey: &str) -> String {
        format!(
            "{}{}{}",
            self.config.base_url,
            path,
            urlencoding::encode(seokey)
        )
    }

    /// Issues one GET and decodes the JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request = HttpRequest::new(HttpMethod::Get, url)
            .header("Accept", "application/json")
            .timeout(self.config.timeout);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| GaanaError::Network(e.to_string()))?;

        if !response.is_success() {
            return Err(GaanaError::Http {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| GaanaError::JsonParse(e.to_string()))
    }

    /// Album candidates for a free-text query.
    ///
    /// The search-call failure is absorbed here; a failing per-result detail
    /// fetch is skipped so one bad record cannot empty the whole result.
    pub async fn search_albums(&self, query: &str) -> Vec<AlbumInfo> {
        let query = normalize_query(query);
        debug!(query = %query, "Searching Gaana for albums");

        let url = self.search_url(ALBUM_SEARCH, &query);
        let summaries: Vec<SearchSummary> = match self.fetch_json(&url).await {
            Ok(summaries) => summaries,
            Err(e) => {
                debug!(error = %e, "Album search failed");
                return Vec::new();
            }
        };

        let total = summaries.len();
        let mut albums = Vec::with_capacity(total);
        for (i, summary) in summaries.into_iter().enumerate() {
            match self.album_details(&summary.seokey).await {
                Ok(album) => {
                    debug!(
                        title = %album.album,
                        "Processed album {} of {}",
                        i + 1,
                        total
                    );
                    albums.push(album);
                }
                Err(e) => {
                    warn!(seokey = %summary.seokey, error = %e, "Skipping album detail fetch");
                }
            }
        }
        albums
    }

    /// Track candidates for a free-text query.
    pub async fn search_tracks(&self, query: &str) -> Vec<TrackInfo> {
        let query = normalize_query(query);
        debug!(query = %query, "Searching Gaana for tracks");

        let url = self.search_url(SONG_SEARCH, &query);
        let summaries: Vec<SearchSummary> = match self.fetch_json(&url).await {
            Ok(summaries) => summaries,
            Err(e) => {
                debug!(error = %e, "Track search failed");
                return Vec::new();
            }
        };

        let total = summaries.len();
        let mut tracks = Vec::with_capacity(total);
        for (i, summary) in summaries.into_iter().enumerate() {
            match self.track_details(&summary.seokey).await {
                Ok(track) => {
                    debug!(
                        title = %track.title,
                        "Processed track {} of {}",
                        i + 1,
                        total
                    );
                    tracks.push(track);
                }
                Err(e) => {
                    warn!(seokey = %summary.seokey, error = %e, "Skipping track detail fetch");
                }
            }
        }
        tracks
    }

    /// Fetches and maps one album detail record.
    async fn album_details(&self, seokey: &str) -> Result<AlbumInfo> {
        let url = self.detail_url(ALBUM_DETAILS, seokey);
        let mut details: Vec<AlbumDetail> = self.fetch_json(&url).await?;
        if details.is_empty() {
            return Err(GaanaError::EmptyResponse);
        }
        Ok(self.map_album(details.remove(0)).await)
    }

    /// Fetches and maps one song detail record.
    async fn track_details(&self, seokey: &str) -> Result<TrackInfo> {
        let url = self.detail_url(SONG_DETAILS, seokey);
        let mut details: Vec<SongDetail> = self.fetch_json(&url).await?;
        if details.is_empty() {
            return Err(GaanaError::EmptyResponse);
        }
        Ok(self.map_track(details.remove(0)))
    }

    /// Maps an album detail payload into an [`AlbumInfo`].
    async fn map_album(&self, detail: AlbumDetail) -> AlbumInfo {
        let (year, month, day) = match parse_release_date(detail.release_date.as_deref()) {
            Some((year, month, day)) => (Some(year), Some(month), Some(day)),
            None => (None, None, None),
        };

        let mut cover_art_url = None;
        if let Some(url) = detail.images.urls.large_artwork {
            if artwork::is_valid_image_url(self.http_client.as_ref(), &url, self.config.timeout)
                .await
            {
                cover_art_url = Some(url);
            } else {
                debug!(url = %url, "Discarding cover-art URL that failed the decode probe");
            }
        }

        let label = detail.label.filter(|label| !label.is_empty());
        let play_count = parse_count(detail.play_count.as_deref());
        let fav_count = parse_count(detail.favorite_count.as_deref());

        let mut tracks = Vec::with_capacity(detail.tracks.len());
        let mut medium_totals: HashMap<u32, u32> = HashMap::new();
        for (i, song) in detail.tracks.into_iter().enumerate() {
            let mut track = self.map_track(song);
            track.index = (i + 1) as u32;
            // The catalog has no disc subdivision; every track lands on
            // medium 1.
            track.medium = 1;
            *medium_totals.entry(track.medium).or_insert(0) += 1;
            tracks.push(track);
        }
        for track in &mut tracks {
            track.medium_total = medium_totals.get(&track.medium).copied().unwrap_or(0);
        }
        let mediums = medium_totals.keys().max().copied().unwrap_or(0);

        AlbumInfo {
            album: unescape_entities(&detail.title),
            album_id: detail.album_id,
            seokey: detail.seokey,
            artist: detail.artists,
            artist_id: detail.artist_ids,
            artist_seokey: detail.artist_seokeys,
            year,
            month,
            day,
            label,
            cover_art_url,
            play_count,
            fav_count,
            tracks,
            mediums,
            data_source: DATA_SOURCE,
        }
    }

    /// Maps a song detail payload into a [`TrackInfo`].
    ///
    /// `index`, `medium`, and `medium_total` stay 0 here; album assembly
    /// fills them in when the track belongs to an album.
    fn map_track(&self, song: SongDetail) -> TrackInfo {
        let fav_count = match song.favorite_count {
            Some(CountField::Number(n)) => n.max(0) as u64,
            Some(CountField::Text(text)) => parse_count(Some(&text)),
            None => 0,
        };

        TrackInfo {
            title: unescape_entities(&song.title),
            track_id: song.track_id,
            seokey: song.seokey,
            length: parse_duration(song.duration.as_deref()),
            artist: song.artists,
            album: unescape_entities(&song.album),
            artist_id: song.artist_ids,
            artist_seokey: song.artist_seokeys,
            genres: song.genres,
            popularity: parse_popularity(song.popularity.as_deref(), song.play_count.as_deref()),
            fav_count,
            index: 0,
            medium: 0,
            medium_total: 0,
            updated: self.clock.now(),
            data_source: DATA_SOURCE,
        }
    }

    /// Imports the songs of a catalog playlist URL as simplified
    /// {title, artist, album} entries.
    pub async fn import_playlist(&self, url: &str) -> Vec<PlaylistEntry> {
        if !url.contains(PLAYLIST_URL_MARKER) {
            error!(url = %url, "Invalid Gaana playlist URL");
            return Vec::new();
        }

        let seokey = url.rsplit('/').next().unwrap_or("");
        let playlist_url = self.detail_url(PLAYLIST_DETAILS, seokey);
        let songs: Vec<PlaylistSong> = match self.fetch_json(&playlist_url).await {
            Ok(songs) => songs,
            Err(e) => {
                error!(error = %e, "Error fetching playlist");
                return Vec::new();
            }
        };

        songs
            .into_iter()
            .map(|song| PlaylistEntry {
                title: unescape_entities(&song.title).trim().to_string(),
                artist: unescape_entities(&song.artists).trim().to_string(),
                album: unescape_entities(&song.album).trim().to_string(),
            })
            .collect()
    }
}

#[async_trait]
impl MetadataSource for GaanaConnector {
    fn data_source(&self) -> &'static str {
        DATA_SOURCE
    }

    fn source_weight(&self) -> f64 {
        self.config.source_weight
    }

    async fn candidates(&self, artist: &str, release: &str, va_likely: bool) -> Vec<AlbumInfo> {
        let query = if va_likely {
            release.to_string()
        } else {
            format!("{} {}", release, artist)
        };
        self.search_albums(&query).await
    }

    async fn item_candidates(&self, artist: &str, title: &str) -> Vec<TrackInfo> {
        self.search_tracks(&format!("{} {}", title, artist)).await
    }

    async fn album_for_id(&self, album_id: &str) -> Option<AlbumInfo> {
        if !album_id.contains(ALBUM_URL_MARKER) {
            return None;
        }
        debug!(url = %album_id, "Resolving Gaana album URL");

        let seokey = album_id.rsplit('/').next().unwrap_or("");
        match self.album_details(seokey).await {
            Ok(album) => Some(album),
            Err(e) => {
                debug!(url = %album_id, error = %e, "Album lookup failed");
                None
            }
        }
    }

    async fn track_for_id(&self, track_id: &str) -> Option<TrackInfo> {
        if !track_id.contains(SONG_URL_MARKER) {
            return None;
        }
        debug!(url = %track_id, "Resolving Gaana track URL");

        let seokey = track_id.rsplit('/').next().unwrap_or("");
        match self.track_details(seokey).await {
            Ok(track) => Some(track),
            Err(e) => {
                debug!(url = %track_id, error = %e, "Track lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use chrono::{TimeZone, Utc};
    use mockall::mock;

    use tagger_core::http::HttpResponse;

    mock! {
        HttpClient {}

        #[async_trait]
        impl HttpClient for HttpClient {
            async fn execute(
                &self,
                request: HttpRequest,
            ) -> tagger_core::error::Result<HttpResponse>;
        }
    }

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> chrono::DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
        }
    }

    fn connector(http: MockHttpClient) -> GaanaConnector {
        GaanaConnector::with_clock(
            GaanaConfig::new("https://api.example.com"),
            Arc::new(http),
            Arc::new(FixedClock),
        )
        .unwrap()
    }

    fn song_detail(json: &str) -> SongDetail {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_map_track_parses_display_fields() {
        let song = song_detail(
            r#"{
                "title": "The &quot;One&quot;",
                "track_id": 42,
                "seokey": "the-one",
                "duration": "245",
                "artists": "Some Artist",
                "album": "Some &quot;Album&quot;",
                "artist_ids": "9",
                "artist_seokeys": "some-artist",
                "genres": "Rock",
                "popularity": "120~4",
                "favorite_count": "2K+"
            }"#,
        );

        let track = connector(MockHttpClient::new()).map_track(song);

        assert_eq!(track.title, "The \"One\"");
        assert_eq!(track.album, "Some \"Album\"");
        assert_eq!(track.length, Some(245));
        assert_eq!(track.popularity, Some(120));
        assert_eq!(track.fav_count, 2_000);
        assert_eq!(track.genres.as_deref(), Some("Rock"));
        assert_eq!(track.data_source, DATA_SOURCE);
        assert_eq!(track.updated, FixedClock.now());
        // Standalone mapping leaves album-assembly fields unset.
        assert_eq!(track.index, 0);
        assert_eq!(track.medium, 0);
        assert_eq!(track.medium_total, 0);
    }

    #[test]
    fn test_map_track_integer_favorite_count_passes_through() {
        let song = song_detail(
            r#"{"title": "T", "track_id": 1, "seokey": "t", "favorite_count": 420}"#,
        );
        let track = connector(MockHttpClient::new()).map_track(song);
        assert_eq!(track.fav_count, 420);
    }

    #[test]
    fn test_map_track_popularity_falls_back_to_play_count() {
        let song = song_detail(
            r#"{"title": "T", "track_id": 1, "seokey": "t", "play_count": "9K+"}"#,
        );
        let track = connector(MockHttpClient::new()).map_track(song);
        assert_eq!(track.popularity, Some(9_000));
    }

    #[test]
    fn test_map_track_empty_duration_is_none() {
        let song =
            song_detail(r#"{"title": "T", "track_id": 1, "seokey": "t", "duration": ""}"#);
        let track = connector(MockHttpClient::new()).map_track(song);
        assert_eq!(track.length, None);
    }

    fn album_json(release_date: &str, tracks: &str) -> String {
        format!(
            r#"{{
                "title": "Abbey Road",
                "album_id": 101,
                "seokey": "abbey-road",
                "artists": "The Beatles",
                "artist_ids": "7",
                "artist_seokeys": "the-beatles",
                {release_date}
                "label": "Apple Records",
                "play_count": "1.2M+",
                "favorite_count": "55K+",
                "tracks": [{tracks}]
            }}"#
        )
    }

    fn album_track(n: u32) -> String {
        format!(
            r#"{{"title": "Track {n}", "track_id": {n}, "seokey": "track-{n}",
                 "duration": "200", "artists": "The Beatles", "album": "Abbey Road",
                 "artist_ids": "7", "artist_seokeys": "the-beatles"}}"#
        )
    }

    #[tokio::test]
    async fn test_map_album_full_date_and_medium_accounting() {
        let tracks = [album_track(1), album_track(2), album_track(3)].join(",");
        let detail: AlbumDetail = serde_json::from_str(&album_json(
            r#""release_date": "1969-09-26","#,
            &tracks,
        ))
        .unwrap();

        let album = connector(MockHttpClient::new()).map_album(detail).await;

        assert_eq!(album.year, Some(1969));
        assert_eq!(album.month, Some(9));
        assert_eq!(album.day, Some(26));
        assert_eq!(album.label.as_deref(), Some("Apple Records"));
        assert_eq!(album.play_count, 1_200_000);
        assert_eq!(album.fav_count, 55_000);
        assert_eq!(album.mediums, 1);
        assert_eq!(album.tracks.len(), 3);
        for (i, track) in album.tracks.iter().enumerate() {
            assert_eq!(track.index, (i + 1) as u32);
            assert_eq!(track.medium, 1);
            assert_eq!(track.medium_total, 3);
        }
    }

    #[tokio::test]
    async fn test_map_album_missing_date_leaves_all_parts_absent() {
        let detail: AlbumDetail =
            serde_json::from_str(&album_json("", "")).unwrap();

        let album = connector(MockHttpClient::new()).map_album(detail).await;

        assert_eq!(album.year, None);
        assert_eq!(album.month, None);
        assert_eq!(album.day, None);
        assert_eq!(album.mediums, 0);
        assert!(album.tracks.is_empty());
    }

    #[tokio::test]
    async fn test_map_album_two_part_date_leaves_all_parts_absent() {
        let detail: AlbumDetail =
            serde_json::from_str(&album_json(r#""release_date": "1969-09","#, "")).unwrap();

        let album = connector(MockHttpClient::new()).map_album(detail).await;

        assert_eq!((album.year, album.month, album.day), (None, None, None));
    }

    #[tokio::test]
    async fn test_map_album_discards_invalid_artwork_url() {
        let json = r#"{
            "title": "Abbey Road",
            "album_id": 101,
            "seokey": "abbey-road",
            "images": {"urls": {"large_artwork": "https://img.example.com/abbey.jpg"}}
        }"#;
        let detail: AlbumDetail = serde_json::from_str(json).unwrap();

        let mut http = MockHttpClient::new();
        http.expect_execute().times(1).returning(|_| {
            Ok(HttpResponse {
                status: 404,
                headers: std::collections::HashMap::new(),
                body: Bytes::new(),
            })
        });

        let album = connector(http).map_album(detail).await;
        assert_eq!(album.cover_art_url, None);
    }

    #[test]
    fn test_search_url_wraps_query_in_quotes() {
        let connector = connector(MockHttpClient::new());
        let url = connector.search_url(ALBUM_SEARCH, "abbey road");
        assert_eq!(
            url,
            "https://api.example.com/albums/search?limit=5&query=%22abbey%20road%22"
        );
    }
}
