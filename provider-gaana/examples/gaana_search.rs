//! Album search demo.
//!
//! Runs a two-stage album lookup against a configured catalog API:
//!
//! ```text
//! GAANA_BASE_URL=https://gaana-api.example.com \
//!     cargo run --example gaana_search -- "abbey road beatles"
//! ```

use provider_gaana::{GaanaConfig, GaanaConnector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "provider_gaana=debug".into()),
        )
        .init();

    let base_url = std::env::var("GAANA_BASE_URL")
        .map_err(|_| "GAANA_BASE_URL must point at the catalog API")?;
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "abbey road".to_string());

    let connector = GaanaConnector::new(GaanaConfig::new(base_url))?;
    let albums = connector.search_albums(&query).await;

    println!("{} album candidate(s) for '{}'", albums.len(), query);
    for album in &albums {
        println!(
            "  {} — {} ({} tracks, year {:?})",
            album.artist,
            album.album,
            album.tracks.len(),
            album.year
        );
    }

    Ok(())
}
