// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content API configuration.

use std::time::Duration;

use serde::Deserialize;

const DEFAULT_API_URL: &str = "http://localhost:4000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PAGE_SIZE: u32 = 100;
const DEFAULT_CACHE_STALE_SECS: u64 = 0;

/// Content API configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
	pub api_url: String,
	pub timeout_secs: u64,
	pub page_size: u32,
	/// Zero, the default, leaves reads uncached.
	pub cache_stale_secs: u64,
}

impl ContentConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	/// Stale time for cached reads, or `None` when caching is off.
	pub fn cache_stale_time(&self) -> Option<Duration> {
		(self.cache_stale_secs > 0).then(|| Duration::from_secs(self.cache_stale_secs))
	}
}

impl Default for ContentConfig {
	fn default() -> Self {
		ContentConfigLayer::default().finalize()
	}
}

/// Content configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfigLayer {
	#[serde(default)]
	pub api_url: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
	#[serde(default)]
	pub page_size: Option<u32>,
	#[serde(default)]
	pub cache_stale_secs: Option<u64>,
}

impl ContentConfigLayer {
	pub fn merge(&mut self, other: ContentConfigLayer) {
		if other.api_url.is_some() {
			self.api_url = other.api_url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
		if other.page_size.is_some() {
			self.page_size = other.page_size;
		}
		if other.cache_stale_secs.is_some() {
			self.cache_stale_secs = other.cache_stale_secs;
		}
	}

	pub fn finalize(self) -> ContentConfig {
		ContentConfig {
			api_url: self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
			page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			cache_stale_secs: self.cache_stale_secs.unwrap_or(DEFAULT_CACHE_STALE_SECS),
		}
	}
}
