//! HTTP image source
//!
//! Fetches query images over HTTP with a bounded timeout and validates the
//! payload by sniffing the image magic bytes. Downstream code (the
//! embedding backend) only ever receives bytes that look like an image.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use visim_domain::error::{Error, Result};
use visim_domain::ports::providers::ImageSource;

use crate::constants::MAX_IMAGE_BYTES;

/// HTTP image source with timeout and format validation
pub struct HttpImageSource {
    http_client: Client,
    timeout: Duration,
    max_bytes: usize,
}

impl HttpImageSource {
    /// Create an HTTP image source
    ///
    /// # Arguments
    /// * `http_client` - Shared reqwest client
    /// * `timeout` - Per-request timeout
    pub fn new(http_client: Client, timeout: Duration) -> Self {
        Self {
            http_client,
            timeout,
            max_bytes: MAX_IMAGE_BYTES,
        }
    }

    /// Override the maximum accepted payload size
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http_client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::image_fetch(format!(
                        "Timed out after {:?} fetching {url}",
                        self.timeout
                    ))
                } else {
                    Error::image_fetch_with_source(format!("Request to {url} failed"), e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::image_fetch(format!(
                "Image host returned {status} for {url}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::image_fetch_with_source(format!("Failed reading body of {url}"), e))?;

        if bytes.len() > self.max_bytes {
            return Err(Error::image_fetch(format!(
                "Payload of {url} exceeds the {} byte limit",
                self.max_bytes
            )));
        }

        // Magic-byte sniff; full decoding is the embedding backend's job
        image::guess_format(&bytes).map_err(|_| {
            Error::image_decode(format!("Payload at {url} is not a recognized image format"))
        })?;

        debug!(url, bytes = bytes.len(), "fetched query image");
        Ok(bytes.to_vec())
    }

    fn source_name(&self) -> &str {
        "http"
    }
}
