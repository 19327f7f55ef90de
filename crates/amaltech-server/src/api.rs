// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router.

use std::sync::Arc;

use amaltech_common_i18n::LocaleSet;
use amaltech_content::{CachedContentProvider, ContentProvider, HttpContentProvider};
use amaltech_routes::{RobotsPolicy, RouteAggregator, SitemapBuilder};
use amaltech_site_config::{ContentConfig, ServiceConfig, SiteConfig};
use axum::{routing::get, Router};
use tracing::info;

use crate::routes;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
	pub locales: LocaleSet,
	pub aggregator: Arc<RouteAggregator>,
	pub sitemap: Arc<SitemapBuilder>,
	pub robots: Arc<RobotsPolicy>,
}

impl AppState {
	/// Wires the route and sitemap builders to `provider` for `site`.
	pub fn new(provider: Arc<dyn ContentProvider>, site: &SiteConfig) -> Self {
		Self {
			locales: site.locales.clone(),
			aggregator: Arc::new(RouteAggregator::new(
				Arc::clone(&provider),
				site.locales.clone(),
			)),
			sitemap: Arc::new(SitemapBuilder::new(
				provider,
				site.base_url.clone(),
				site.locales.clone(),
				site.static_routes.clone(),
			)),
			robots: Arc::new(RobotsPolicy::for_site(&site.base_url)),
		}
	}
}

/// Builds the state from configuration, talking to the configured content API.
pub fn create_app_state(config: &ServiceConfig) -> AppState {
	AppState::new(content_provider(&config.content), &config.site)
}

/// HTTP content provider for the configured content API.
pub fn content_provider(config: &ContentConfig) -> Arc<dyn ContentProvider> {
	let client = HttpContentProvider::with_timeout(config.api_url.clone(), config.timeout())
		.with_page_size(config.page_size);
	with_read_cache(client, config)
}

/// Puts `provider` behind the read cache when a stale time is configured.
/// Reads are uncached by default.
pub fn with_read_cache<P>(provider: P, config: &ContentConfig) -> Arc<dyn ContentProvider>
where
	P: ContentProvider + 'static,
{
	if let Some(stale_time) = config.cache_stale_time() {
		info!(
			api_url = %config.api_url,
			stale_secs = stale_time.as_secs(),
			"content cache enabled"
		);
		return Arc::new(CachedContentProvider::with_stale_time(provider, stale_time));
	}

	info!(api_url = %config.api_url, "content cache disabled");
	Arc::new(provider)
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/sitemap.xml", get(routes::seo::sitemap_xml))
		.route("/robots.txt", get(routes::seo::robots_txt))
		.route("/api/routes", get(routes::content::routes_for_requested_locale))
		.route("/api/routes/{locale}", get(routes::content::routes_for_locale))
		.route("/api/static-params", get(routes::content::static_params))
		.route("/api/resolve/{locale}", get(routes::content::resolve_root))
		.route("/api/resolve/{locale}/{*path}", get(routes::content::resolve_route))
		.with_state(state)
}
