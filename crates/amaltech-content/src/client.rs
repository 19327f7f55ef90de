// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content API client implementation.

use std::time::Duration;

use amaltech_common_http::{retry, RetryConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace, warn};

use crate::error::ContentError;
use crate::provider::ContentProvider;
use crate::types::{Category, ContentItem, ContentType, Page};

const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";
const DEFAULT_PAGE_SIZE: u32 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_PAGES: u32 = 1000;

/// One page of a list read. `total` is honoured when the API sends it.
#[derive(Debug, Deserialize)]
struct ListPage {
	data: Vec<ContentItem>,
	#[serde(default)]
	total: Option<u64>,
}

/// Client for the site's content API.
///
/// Endpoints, relative to the base URL:
/// - `GET /{resource}?page={n}&limit={page_size}` → `{"data": [...], "total"?: n}`
/// - `GET /{resource}/slugs` → `["slug", ...]`
/// - `GET /{resource}/categories` → `[{"slug": ...}, ...]`
#[derive(Debug, Clone)]
pub struct HttpContentProvider {
	http_client: Client,
	base_url: String,
	page_size: u32,
	retry_config: RetryConfig,
}

impl HttpContentProvider {
	/// Creates a client for the content API at `base_url`.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self::with_timeout(base_url, REQUEST_TIMEOUT)
	}

	/// Creates a client with a custom per-request timeout.
	pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
		let http_client = Client::builder()
			.user_agent(user_agent())
			.timeout(timeout)
			.build()
			.expect("failed to build HTTP client");

		Self {
			http_client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			page_size: DEFAULT_PAGE_SIZE,
			retry_config: RetryConfig::query(),
		}
	}

	/// Sets how many items each page of a list read asks for.
	pub fn with_page_size(mut self, page_size: u32) -> Self {
		self.page_size = page_size.max(1);
		self
	}

	/// Sets a custom retry configuration.
	pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
		self.retry_config = config;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Reads every page of a list, stopping at the first short or empty page
	/// or once the reported total is reached.
	#[instrument(skip(self))]
	async fn fetch_list(&self, content_type: ContentType) -> Result<Page<ContentItem>, ContentError> {
		let url = format!("{}/{}", self.base_url, content_type.api_resource());
		let limit = self.page_size.to_string();
		let mut items = Vec::new();

		for page in 1..=MAX_PAGES {
			let page_number = page.to_string();
			let query = [("page", page_number.as_str()), ("limit", limit.as_str())];
			let batch: ListPage = retry(&self.retry_config, || self.get_json(&url, &query)).await?;

			let fetched = batch.data.len();
			items.extend(batch.data);
			let reached_total = batch.total.is_some_and(|total| items.len() as u64 >= total);

			if fetched < self.page_size as usize || reached_total {
				debug!(pages = page, items = items.len(), "Read full list");
				return Ok(Page::new(items));
			}
		}

		warn!(
			max_pages = MAX_PAGES,
			items = items.len(),
			"List still had full pages after the page limit; truncating"
		);
		Ok(Page::new(items))
	}

	#[instrument(skip(self))]
	async fn fetch_slugs(&self, content_type: ContentType) -> Result<Vec<String>, ContentError> {
		let url = format!("{}/{}/slugs", self.base_url, content_type.api_resource());
		retry(&self.retry_config, || self.get_json(&url, &[])).await
	}

	#[instrument(skip(self))]
	async fn fetch_categories(&self, content_type: ContentType) -> Result<Vec<Category>, ContentError> {
		let url = format!(
			"{}/{}/categories",
			self.base_url,
			content_type.api_resource()
		);
		retry(&self.retry_config, || self.get_json(&url, &[])).await
	}

	async fn get_json<T: DeserializeOwned>(
		&self,
		url: &str,
		query: &[(&str, &str)],
	) -> Result<T, ContentError> {
		debug!(url = %url, "Sending request to content API");

		let response = self
			.http_client
			.get(url)
			.query(query)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!(url = %url, "Request timed out");
					return ContentError::Timeout;
				}
				error!(error = %e, "Network error during content API request");
				ContentError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from content API");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!(status = status.as_u16(), body = %body, "Content API error");
			return Err(ContentError::Api {
				status: status.as_u16(),
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			ContentError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse content API response");
			ContentError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}

/// User-Agent sent with every content API request.
pub fn user_agent() -> String {
	format!("amaltech-site/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpContentProvider {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_URL)
	}
}

#[async_trait]
impl ContentProvider for HttpContentProvider {
	async fn solutions(&self) -> Result<Page<ContentItem>, ContentError> {
		self.fetch_list(ContentType::Solutions).await
	}

	async fn solution_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.fetch_slugs(ContentType::Solutions).await
	}

	async fn solution_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.fetch_categories(ContentType::Solutions).await
	}

	async fn products(&self) -> Result<Page<ContentItem>, ContentError> {
		self.fetch_list(ContentType::Products).await
	}

	async fn product_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.fetch_slugs(ContentType::Products).await
	}

	async fn product_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.fetch_categories(ContentType::Products).await
	}

	async fn newsroom_posts(&self) -> Result<Page<ContentItem>, ContentError> {
		self.fetch_list(ContentType::Newsroom).await
	}

	async fn newsroom_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.fetch_slugs(ContentType::Newsroom).await
	}

	async fn newsroom_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.fetch_categories(ContentType::Newsroom).await
	}

	async fn job_openings(&self) -> Result<Page<ContentItem>, ContentError> {
		self.fetch_list(ContentType::Careers).await
	}

	async fn job_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.fetch_slugs(ContentType::Careers).await
	}
}
