use std::time::Duration;

use iced::widget::image;

use super::models::SearchResponse;
use crate::config::Config;
use crate::error::ApiError;

/// Upper bound on any single request, so a dead connection cannot leave the
/// loader spinning forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Async client for the Pixabay REST API.
///
/// Cheap to clone; every fetch task takes its own copy and the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SearchClient {
    /// Build a client from the runtime configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(SearchClient {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }

    /// Fetch one page of image hits for `query`.
    ///
    /// `query` must be non-empty and `page`/`per_page` positive; the
    /// controller guards those before dispatching a request. Any transport
    /// failure or non-success status is an error, no retries.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResponse, ApiError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("image_type", "photo"),
                ("orientation", "horizontal"),
                ("safesearch", "true"),
            ])
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.json::<SearchResponse>().await?)
    }

    /// Download an image and wrap it in a widget handle.
    ///
    /// Used for both card thumbnails and the lightbox full-size view.
    pub async fn fetch_image(&self, url: &str) -> Result<image::Handle, ApiError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(image::Handle::from_bytes(bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config {
            api_key: Some("test-key".to_string()),
            ..Config::default()
        };
        let client = SearchClient::new(&config).unwrap();

        assert_eq!(client.base_url, config.base_url);
        assert_eq!(client.api_key, "test-key");
    }

    #[test]
    fn test_missing_key_defaults_to_empty() {
        let client = SearchClient::new(&Config::default()).unwrap();
        assert_eq!(client.api_key, "");
    }
}
