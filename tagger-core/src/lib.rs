//! # Tagger Core
//!
//! Shared contract between an autotagging host and its metadata-source
//! providers.
//!
//! ## Overview
//!
//! This crate defines:
//! - The [`MetadataSource`](source::MetadataSource) trait a catalog provider
//!   implements to serve album/track candidates to the host
//! - The [`AlbumInfo`](model::AlbumInfo) / [`TrackInfo`](model::TrackInfo)
//!   record model handed back to the host
//! - The [`HttpClient`](http::HttpClient) abstraction providers issue their
//!   requests through, so transports can be swapped and tests can run
//!   without a network
//! - The [`Clock`](time::Clock) time source for deterministic timestamps

pub mod error;
pub mod http;
pub mod model;
pub mod source;
pub mod time;

pub use error::{CoreError, Result};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use model::{AlbumInfo, PlaylistEntry, TrackInfo};
pub use source::MetadataSource;
pub use time::{Clock, SystemClock};
