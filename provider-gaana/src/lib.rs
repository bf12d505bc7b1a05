//! # Gaana Provider
//!
//! Implements the `MetadataSource` trait for the Gaana music catalog.
//!
//! ## Overview
//!
//! This module provides:
//! - Two-stage album and track search (search call + one detail fetch per
//!   result, issued sequentially)
//! - Album/track resolution from catalog URLs
//! - Playlist import as simplified {title, artist, album} entries
//! - Field cleanup for the service's display-formatted values: query
//!   normalization, `&quot;` unescaping, "55K+"-style count parsing, and a
//!   decode probe for cover-art URLs
//!
//! Failures follow the host contract: a failed search or lookup is logged
//! and surfaces as an empty result or `None`, never as an error.

pub mod artwork;
pub mod config;
pub mod connector;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod types;

pub use config::GaanaConfig;
pub use connector::{GaanaConnector, DATA_SOURCE};
pub use error::{GaanaError, Result};
