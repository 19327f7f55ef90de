// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Router tests against an in-memory content provider.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use amaltech_content::{
	Category, ContentError, ContentItem, ContentProvider, ContentType, Page,
};
use amaltech_server::{create_router, with_read_cache, AppState};
use amaltech_site_config::{ContentConfig, SiteConfig};
use async_trait::async_trait;
use axum::{
	body::{to_bytes, Body},
	http::{header, Request, StatusCode},
	response::Response,
	Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// Serves a fixed catalog; listed content types fail with a 503.
#[derive(Default)]
struct FixtureProvider {
	failing: HashSet<ContentType>,
	solution_reads: Arc<AtomicU32>,
}

impl FixtureProvider {
	fn failing(content_types: &[ContentType]) -> Self {
		Self {
			failing: content_types.iter().copied().collect(),
			..Default::default()
		}
	}

	fn check(&self, content_type: ContentType) -> Result<(), ContentError> {
		if self.failing.contains(&content_type) {
			return Err(ContentError::Api {
				status: 503,
				message: "unavailable".to_string(),
			});
		}
		Ok(())
	}
}

#[async_trait]
impl ContentProvider for FixtureProvider {
	async fn solutions(&self) -> Result<Page<ContentItem>, ContentError> {
		self.solution_reads.fetch_add(1, Ordering::SeqCst);
		self.check(ContentType::Solutions)?;
		Ok(Page::new(vec![ContentItem::new("smart-farm", Some("iot"))]))
	}
	async fn solution_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.check(ContentType::Solutions)?;
		Ok(vec!["smart-farm".to_string()])
	}
	async fn solution_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.check(ContentType::Solutions)?;
		Ok(vec![Category::new("iot")])
	}
	async fn products(&self) -> Result<Page<ContentItem>, ContentError> {
		self.check(ContentType::Products)?;
		Ok(Page::new(vec![ContentItem::new("amal-pos", Some("retail"))]))
	}
	async fn product_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.check(ContentType::Products)?;
		Ok(vec!["amal-pos".to_string()])
	}
	async fn product_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.check(ContentType::Products)?;
		Ok(vec![Category::new("retail")])
	}
	async fn newsroom_posts(&self) -> Result<Page<ContentItem>, ContentError> {
		self.check(ContentType::Newsroom)?;
		Ok(Page::default())
	}
	async fn newsroom_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.check(ContentType::Newsroom)?;
		Ok(Vec::new())
	}
	async fn newsroom_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.check(ContentType::Newsroom)?;
		Ok(Vec::new())
	}
	async fn job_openings(&self) -> Result<Page<ContentItem>, ContentError> {
		self.check(ContentType::Careers)?;
		Ok(Page::new(vec![ContentItem::uncategorized("designer")]))
	}
	async fn job_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.check(ContentType::Careers)?;
		Ok(vec!["designer".to_string()])
	}
}

fn app(provider: FixtureProvider) -> Router {
	create_router(AppState::new(Arc::new(provider), &SiteConfig::default()))
}

async fn get(app: Router, uri: &str) -> Response {
	app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
		.await
		.unwrap()
}

async fn body_string(response: Response) -> String {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
	serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
	let response = get(app(FixtureProvider::default()), "/health").await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["status"], "ok");
	assert_eq!(body["version"], amaltech_server::VERSION);
}

#[tokio::test]
async fn sitemap_is_xml() {
	let response = get(app(FixtureProvider::default()), "/sitemap.xml").await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		response.headers()[header::CONTENT_TYPE],
		"application/xml; charset=utf-8"
	);

	let xml = body_string(response).await;
	assert!(xml.contains("<loc>https://amaltech.com.ng/en</loc>"));
	assert!(xml.contains("<loc>https://amaltech.com.ng/id/careers/designer</loc>"));
	assert!(xml.contains("<loc>https://amaltech.com.ng/en/products/retail</loc>"));
}

#[tokio::test]
async fn sitemap_content_failure_is_bad_gateway() {
	let response = get(
		app(FixtureProvider::failing(&[ContentType::Careers])),
		"/sitemap.xml",
	)
	.await;
	assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
	assert_eq!(body_json(response).await["error"], "upstream_error");
}

#[tokio::test]
async fn robots_points_at_sitemap() {
	let response = get(app(FixtureProvider::default()), "/robots.txt").await;
	assert_eq!(response.status(), StatusCode::OK);

	let robots = body_string(response).await;
	assert!(robots.starts_with("User-agent: *\n"));
	assert!(robots.contains("Disallow: /admin/\n"));
	assert!(robots.ends_with("Sitemap: https://amaltech.com.ng/sitemap.xml\n"));
}

#[tokio::test]
async fn routes_for_locale() {
	let response = get(app(FixtureProvider::default()), "/api/routes/id").await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["locale"], "id");
	assert_eq!(
		body["routes"],
		serde_json::json!([
			"/solutions/iot/smart-farm",
			"/products/retail/amal-pos",
			"/careers/designer"
		])
	);
	assert_eq!(body["errors"], serde_json::json!([]));
}

#[tokio::test]
async fn routes_for_unknown_locale_is_not_found() {
	let response = get(app(FixtureProvider::default()), "/api/routes/fr").await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(body_json(response).await["error"], "not_found");
}

#[tokio::test]
async fn routes_query_falls_back_to_default_locale() {
	let response = get(app(FixtureProvider::default()), "/api/routes?locale=fr").await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await["locale"], "en");

	let response = get(app(FixtureProvider::default()), "/api/routes?locale=id").await;
	assert_eq!(body_json(response).await["locale"], "id");

	let response = get(app(FixtureProvider::default()), "/api/routes").await;
	assert_eq!(body_json(response).await["locale"], "en");
}

#[tokio::test]
async fn failed_content_type_is_reported_not_fatal() {
	let response = get(
		app(FixtureProvider::failing(&[ContentType::Products])),
		"/api/routes/en",
	)
	.await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(
		body["routes"],
		serde_json::json!(["/solutions/iot/smart-farm", "/careers/designer"])
	);
	assert_eq!(body["errors"][0]["contentType"], "products");
	assert_eq!(body["errors"][0]["locale"], "en");
}

#[tokio::test]
async fn static_params_manifest() {
	let response = get(app(FixtureProvider::default()), "/api/static-params").await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	let params = body["params"].as_array().unwrap();
	assert_eq!(params.len(), 6);
	assert_eq!(
		params[0],
		serde_json::json!({"locale": "en", "path": ["solutions", "iot", "smart-farm"]})
	);
	assert_eq!(
		params[5],
		serde_json::json!({"locale": "id", "path": ["careers", "designer"]})
	);
}

#[tokio::test]
async fn resolve_route_normalizes_path() {
	let response = get(
		app(FixtureProvider::default()),
		"/api/resolve/en/solutions//iot/",
	)
	.await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["locale"], "en");
	assert_eq!(body["params"]["path"], "solutions/iot");
	assert_eq!(body["params"]["locale"], "en");
}

#[tokio::test]
async fn resolve_locale_root() {
	let response = get(app(FixtureProvider::default()), "/api/resolve/id").await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await["params"]["path"], "");
}

#[tokio::test]
async fn resolve_unknown_locale_is_not_found() {
	let response = get(app(FixtureProvider::default()), "/api/resolve/fr/about").await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn solution_reads_for_two_listings(content: &ContentConfig) -> u32 {
	let provider = FixtureProvider::default();
	let reads = Arc::clone(&provider.solution_reads);
	let app = create_router(AppState::new(
		with_read_cache(provider, content),
		&SiteConfig::default(),
	));

	for _ in 0..2 {
		let response = get(app.clone(), "/api/routes/en").await;
		assert_eq!(response.status(), StatusCode::OK);
	}
	reads.load(Ordering::SeqCst)
}

#[tokio::test]
async fn default_config_reads_content_on_every_request() {
	let reads = solution_reads_for_two_listings(&ContentConfig::default()).await;
	assert_eq!(reads, 2);
}

#[tokio::test]
async fn configured_stale_time_reuses_reads() {
	let content = ContentConfig {
		cache_stale_secs: 300,
		..ContentConfig::default()
	};
	let reads = solution_reads_for_two_listings(&content).await;
	assert_eq!(reads, 1);
}
