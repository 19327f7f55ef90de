// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Public site configuration: canonical base URL, locales, top-level pages.

use amaltech_common_i18n::{LocaleSet, DEFAULT_LOCALE, DEFAULT_LOCALES};
use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://amaltech.com.ng";

/// Top-level pages listed in the sitemap for every locale. `""` is the
/// locale root.
pub const DEFAULT_STATIC_ROUTES: &[&str] = &[
	"",
	"/about",
	"/solutions",
	"/products",
	"/services",
	"/careers",
	"/newsroom",
	"/contact",
	"/start-a-project",
];

/// Site configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
	/// Canonical origin without a trailing slash.
	pub base_url: String,
	pub locales: LocaleSet,
	pub static_routes: Vec<String>,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			locales: LocaleSet::default(),
			static_routes: DEFAULT_STATIC_ROUTES.iter().map(|s| s.to_string()).collect(),
		}
	}
}

/// Site configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfigLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub locales: Option<Vec<String>>,
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub static_routes: Option<Vec<String>>,
}

impl SiteConfigLayer {
	pub fn merge(&mut self, other: SiteConfigLayer) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.locales.is_some() {
			self.locales = other.locales;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.static_routes.is_some() {
			self.static_routes = other.static_routes;
		}
	}

	pub fn finalize(self) -> Result<SiteConfig, ConfigError> {
		let base_url = self
			.base_url
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
			.trim_end_matches('/')
			.to_string();

		let parsed = Url::parse(&base_url).map_err(|e| ConfigError::InvalidValue {
			key: "site.base_url".to_string(),
			message: format!("'{base_url}' is not a valid URL: {e}"),
		})?;
		if parsed.scheme() != "http" && parsed.scheme() != "https" {
			return Err(ConfigError::InvalidValue {
				key: "site.base_url".to_string(),
				message: format!("'{base_url}' must use http or https"),
			});
		}

		let codes = self
			.locales
			.unwrap_or_else(|| DEFAULT_LOCALES.iter().map(|s| s.to_string()).collect());
		let default_locale = match self.default_locale {
			Some(code) => code,
			None if codes.iter().any(|c| c == DEFAULT_LOCALE) => DEFAULT_LOCALE.to_string(),
			None => codes.first().cloned().unwrap_or_default(),
		};
		let locales = LocaleSet::new(codes, default_locale)?;

		let static_routes = self
			.static_routes
			.unwrap_or_else(|| DEFAULT_STATIC_ROUTES.iter().map(|s| s.to_string()).collect());
		if let Some(bad) = static_routes
			.iter()
			.find(|r| !r.is_empty() && !r.starts_with('/'))
		{
			return Err(ConfigError::InvalidValue {
				key: "site.static_routes".to_string(),
				message: format!("'{bad}' must be empty or start with '/'"),
			});
		}

		Ok(SiteConfig {
			base_url,
			locales,
			static_routes,
		})
	}
}
