//! Cover-art URL validation.
//!
//! The catalog occasionally reports artwork URLs that 404 or serve an HTML
//! error page. Before a URL is surfaced on an album candidate it is fetched
//! and the body decoded as an image; anything short of a decodable image
//! body behind a non-error status discards the URL.

use std::time::Duration;
use tracing::debug;

use tagger_core::http::{HttpClient, HttpMethod, HttpRequest};

/// Fetches `url` and probes the body with an image decode.
///
/// Returns `true` only when the request succeeds with a non-error status and
/// the body decodes as an image. Network errors, error statuses, and decode
/// failures all yield `false`. Single attempt, no retries.
pub async fn is_valid_image_url(http_client: &dyn HttpClient, url: &str, timeout: Duration) -> bool {
    let request = HttpRequest::new(HttpMethod::Get, url).timeout(timeout);

    let response = match http_client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            debug!(url = %url, error = %e, "Artwork fetch failed");
            return false;
        }
    };

    if !response.is_success() {
        debug!(url = %url, status = response.status, "Artwork URL returned error status");
        return false;
    }

    match image::load_from_memory(&response.body) {
        Ok(_) => true,
        Err(e) => {
            debug!(url = %url, error = %e, "Artwork body did not decode as an image");
            false
        }
    }
}
