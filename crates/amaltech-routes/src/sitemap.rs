// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sitemap generation.
//!
//! Lists the top-level pages for every locale plus a detail page per slug and
//! an index page per category, then renders the sitemaps.org XML format:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://amaltech.com.ng/en</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use amaltech_common_i18n::LocaleSet;
use amaltech_content::{Category, ContentError, ContentProvider, ContentType, QueryKey};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, error, instrument};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Slug groups in output order.
const DETAIL_ORDER: [ContentType; 4] = [
	ContentType::Solutions,
	ContentType::Products,
	ContentType::Careers,
	ContentType::Newsroom,
];

/// Category groups in output order.
const CATEGORY_ORDER: [ContentType; 3] = [
	ContentType::Solutions,
	ContentType::Products,
	ContentType::Newsroom,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
	Daily,
	Weekly,
	Monthly,
}

impl ChangeFrequency {
	pub fn as_str(&self) -> &'static str {
		match self {
			ChangeFrequency::Daily => "daily",
			ChangeFrequency::Weekly => "weekly",
			ChangeFrequency::Monthly => "monthly",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
	pub url: String,
	pub last_modified: DateTime<Utc>,
	pub change_frequency: ChangeFrequency,
	pub priority: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
	#[error("failed to read {query} for sitemap: {source}")]
	Content {
		query: QueryKey,
		#[source]
		source: ContentError,
	},
}

/// Builds the sitemap for a site. Any failed read fails the whole build.
pub struct SitemapBuilder {
	provider: Arc<dyn ContentProvider>,
	base_url: String,
	locales: LocaleSet,
	static_routes: Vec<String>,
}

impl SitemapBuilder {
	/// `static_routes` are the top-level pages under each locale, `""` being
	/// the locale root.
	pub fn new(
		provider: Arc<dyn ContentProvider>,
		base_url: impl Into<String>,
		locales: LocaleSet,
		static_routes: Vec<String>,
	) -> Self {
		Self {
			provider,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			locales,
			static_routes,
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub async fn build(&self) -> Result<Vec<SitemapEntry>, SitemapError> {
		self.build_at(Utc::now()).await
	}

	/// Builds the sitemap with every entry stamped `last_modified`.
	#[instrument(skip(self))]
	pub async fn build_at(
		&self,
		last_modified: DateTime<Utc>,
	) -> Result<Vec<SitemapEntry>, SitemapError> {
		let entry = |url: String, change_frequency: ChangeFrequency, priority: f32| SitemapEntry {
			url,
			last_modified,
			change_frequency,
			priority,
		};

		let mut entries = Vec::new();
		for locale in self.locales.codes() {
			for route in &self.static_routes {
				let url = format!("{}/{}{}", self.base_url, locale, route);
				if route.is_empty() {
					entries.push(entry(url, ChangeFrequency::Daily, 1.0));
				} else {
					entries.push(entry(url, ChangeFrequency::Weekly, 0.8));
				}
			}
		}

		let (solutions, products, careers, newsroom) = tokio::try_join!(
			self.slugs(ContentType::Solutions),
			self.slugs(ContentType::Products),
			self.slugs(ContentType::Careers),
			self.slugs(ContentType::Newsroom),
		)?;
		let details = [solutions, products, careers, newsroom];

		let (solution_categories, product_categories, newsroom_categories) = tokio::try_join!(
			self.categories(ContentType::Solutions),
			self.categories(ContentType::Products),
			self.categories(ContentType::Newsroom),
		)?;
		let categories = [solution_categories, product_categories, newsroom_categories];

		for locale in self.locales.codes() {
			for (content_type, slugs) in DETAIL_ORDER.iter().zip(&details) {
				let (change_frequency, priority) = match content_type {
					ContentType::Careers => (ChangeFrequency::Daily, 0.6),
					_ => (ChangeFrequency::Monthly, 0.7),
				};
				for slug in slugs {
					let url = format!("{}/{}/{}/{}", self.base_url, locale, content_type, slug);
					entries.push(entry(url, change_frequency, priority));
				}
			}
		}

		for locale in self.locales.codes() {
			for (content_type, listing) in CATEGORY_ORDER.iter().zip(&categories) {
				for category in listing {
					let url = format!(
						"{}/{}/{}/{}",
						self.base_url, locale, content_type, category.slug
					);
					entries.push(entry(url, ChangeFrequency::Weekly, 0.8));
				}
			}
		}

		debug!(entries = entries.len(), "Built sitemap");
		Ok(entries)
	}

	async fn slugs(&self, content_type: ContentType) -> Result<Vec<String>, SitemapError> {
		self.provider
			.slugs(content_type)
			.await
			.map_err(|source| fetch_failed(QueryKey::slugs(content_type), source))
	}

	async fn categories(&self, content_type: ContentType) -> Result<Vec<Category>, SitemapError> {
		self.provider
			.categories(content_type)
			.await
			.map_err(|source| fetch_failed(QueryKey::categories(content_type), source))
	}
}

fn fetch_failed(query: QueryKey, source: ContentError) -> SitemapError {
	error!(query = %query, error = %source, "Sitemap build failed");
	SitemapError::Content { query, source }
}

/// Renders entries as a sitemaps.org `urlset` document.
pub fn to_xml(entries: &[SitemapEntry]) -> String {
	let mut xml = String::with_capacity(128 + entries.len() * 160);

	xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
	xml.push_str("<urlset xmlns=\"");
	xml.push_str(SITEMAP_NS);
	xml.push_str("\">\n");

	for entry in entries {
		xml.push_str("  <url>\n    <loc>");
		xml.push_str(&escape_xml(&entry.url));
		xml.push_str("</loc>\n    <lastmod>");
		xml.push_str(&entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true));
		xml.push_str("</lastmod>\n    <changefreq>");
		xml.push_str(entry.change_frequency.as_str());
		xml.push_str("</changefreq>\n    <priority>");
		xml.push_str(&format!("{:.1}", entry.priority));
		xml.push_str("</priority>\n  </url>\n");
	}

	xml.push_str("</urlset>\n");
	xml
}

fn escape_xml(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}

	Cow::Owned(
		s.replace('&', "&amp;")
			.replace('<', "&lt;")
			.replace('>', "&gt;")
			.replace('"', "&quot;")
			.replace('\'', "&apos;"),
	)
}
