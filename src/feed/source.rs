//! Retrieval of the raw feed text. The pipeline only ever sees a complete
//! body; there is no streaming or partial-read path, and retry policy is
//! deliberately left to whoever owns the source.

use crate::feed::error::FeedError;
use log::{info, warn};
use reqwest::Client;
use std::future::Future;

/// Supplies the raw delimited feed text, asynchronously.
///
/// The fetch is the only suspending operation in a pipeline run; everything
/// downstream of it is synchronous computation.
pub trait FeedSource {
    fn fetch(&self) -> impl Future<Output = Result<String, FeedError>> + Send;
}

/// Fetches the feed from a fixed HTTP(S) location, e.g. a published
/// spreadsheet CSV export.
pub struct HttpFeedSource {
    url: String,
    client: Client,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch(&self) -> impl Future<Output = Result<String, FeedError>> + Send {
        async move {
            info!("Downloading feed from {}", self.url);

            let response = self
                .client
                .get(&self.url)
                .send()
                .await
                .map_err(|e| FeedError::NetworkRequest(self.url.clone(), e))?;

            let response = match response.error_for_status() {
                Ok(resp) => resp,
                Err(e) => {
                    warn!("HTTP error for {}: {:?}", self.url, e);
                    return Err(if let Some(status) = e.status() {
                        FeedError::HttpStatus {
                            url: self.url.clone(),
                            status,
                            source: e,
                        }
                    } else {
                        FeedError::NetworkRequest(self.url.clone(), e)
                    });
                }
            };

            let body = response
                .text()
                .await
                .map_err(|e| FeedError::BodyRead(self.url.clone(), e))?;
            info!(
                "Successfully downloaded {} bytes of feed text from {}",
                body.len(),
                self.url
            );
            Ok(body)
        }
    }
}
