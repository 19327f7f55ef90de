// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;

use amaltech_content::{ContentItem, ContentType};
use serde::{Deserialize, Serialize};

pub const LOCALE_PARAM: &str = "locale";
pub const PATH_PARAM: &str = "path";

/// A request path resolved against a locale.
///
/// `params` always carries `locale` and `path`, where `path` is the pathname
/// with empty segments dropped and the rest joined by `/`. The original
/// pathname is kept untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
	locale: String,
	pathname: String,
	params: BTreeMap<String, String>,
}

impl Route {
	pub fn new(locale: impl Into<String>, pathname: impl Into<String>) -> Self {
		let locale = locale.into();
		let pathname = pathname.into();
		let path = pathname
			.split('/')
			.filter(|s| !s.is_empty())
			.collect::<Vec<_>>()
			.join("/");

		let mut params = BTreeMap::new();
		params.insert(LOCALE_PARAM.to_string(), locale.clone());
		params.insert(PATH_PARAM.to_string(), path);

		Self {
			locale,
			pathname,
			params,
		}
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn pathname(&self) -> &str {
		&self.pathname
	}

	pub fn params(&self) -> &BTreeMap<String, String> {
		&self.params
	}

	/// Canonical path, without leading or trailing slashes.
	pub fn path(&self) -> &str {
		self.params.get(PATH_PARAM).map(String::as_str).unwrap_or_default()
	}

	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.path().split('/').filter(|s| !s.is_empty())
	}

	/// The content type whose prefix is the first segment, if any.
	pub fn content_type(&self) -> Option<ContentType> {
		self.segments().next().and_then(ContentType::from_prefix)
	}
}

/// One page to pre-render: a locale plus the path segments under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticParam {
	pub locale: String,
	pub path: Vec<String>,
}

impl StaticParam {
	pub fn new(locale: impl Into<String>, path: Vec<String>) -> Self {
		Self {
			locale: locale.into(),
			path,
		}
	}

	/// Full site path including the locale, e.g. `/en/careers/designer`.
	pub fn url_path(&self) -> String {
		format!("/{}/{}", self.locale, self.path.join("/"))
	}
}

/// Path segments of the detail page for `item`: `[type, category, slug]`
/// for categorized types and `[careers, slug]` for job openings.
///
/// Returns `None` when a categorized item has no category.
pub fn content_path(content_type: ContentType, item: &ContentItem) -> Option<Vec<String>> {
	let mut path = vec![content_type.prefix().to_string()];
	if content_type.has_categories() {
		path.push(item.category.clone()?);
	}
	path.push(item.slug.clone());
	Some(path)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_collapses_empty_segments() {
		let route = Route::new("en", "/solutions//iot/");
		assert_eq!(route.path(), "solutions/iot");
		assert_eq!(route.pathname(), "/solutions//iot/");
		assert_eq!(route.params()["locale"], "en");
		assert_eq!(route.params().len(), 2);
	}

	#[test]
	fn test_empty_pathname() {
		let route = Route::new("id", "");
		assert_eq!(route.path(), "");
		assert_eq!(route.segments().count(), 0);
		assert_eq!(route.content_type(), None);

		assert_eq!(Route::new("id", "///").path(), "");
	}

	#[test]
	fn test_content_type_from_first_segment() {
		assert_eq!(
			Route::new("en", "/careers/designer").content_type(),
			Some(ContentType::Careers)
		);
		assert_eq!(Route::new("en", "/about").content_type(), None);
		assert_eq!(Route::new("en", "/jobs/designer").content_type(), None);
	}

	#[test]
	fn test_no_validation_of_locale() {
		let route = Route::new("", "products/x");
		assert_eq!(route.locale(), "");
		assert_eq!(route.params()["locale"], "");
		assert_eq!(route.path(), "products/x");
	}

	#[test]
	fn test_route_serializes_params() {
		let json = serde_json::to_value(Route::new("en", "/a/b")).unwrap();
		assert_eq!(json["params"]["path"], "a/b");
		assert_eq!(json["pathname"], "/a/b");
	}

	#[test]
	fn test_content_path() {
		let item = ContentItem::new("smart-farm", Some("iot"));
		assert_eq!(
			content_path(ContentType::Solutions, &item),
			Some(vec!["solutions".into(), "iot".into(), "smart-farm".into()])
		);

		let job = ContentItem::uncategorized("designer");
		assert_eq!(
			content_path(ContentType::Careers, &job),
			Some(vec!["careers".into(), "designer".into()])
		);
		assert_eq!(content_path(ContentType::Products, &job), None);
	}

	#[test]
	fn test_careers_path_ignores_category() {
		let job = ContentItem::new("designer", Some("creative"));
		assert_eq!(
			content_path(ContentType::Careers, &job),
			Some(vec!["careers".into(), "designer".into()])
		);
	}

	#[test]
	fn test_static_param_url_path() {
		let param = StaticParam::new("id", vec!["newsroom".into(), "news".into(), "launch".into()]);
		assert_eq!(param.url_path(), "/id/newsroom/news/launch");
	}

	proptest! {
		#[test]
		fn path_param_matches_non_empty_segments(
			segments in prop::collection::vec("[a-z0-9-]{0,6}", 0..8),
			leading in any::<bool>(),
			trailing in any::<bool>(),
		) {
			let mut pathname = segments.join("/");
			if leading {
				pathname.insert(0, '/');
			}
			if trailing {
				pathname.push('/');
			}

			let route = Route::new("en", pathname.clone());
			let expected: Vec<&str> = segments.iter().map(String::as_str).filter(|s| !s.is_empty()).collect();

			prop_assert_eq!(route.path(), expected.join("/"));
			prop_assert_eq!(route.segments().collect::<Vec<_>>(), expected);
			prop_assert_eq!(route.pathname(), pathname.as_str());
			prop_assert!(!route.path().contains("//"));
		}

		#[test]
		fn mapping_is_idempotent(pathname in "[a-z/]{0,24}") {
			let once = Route::new("en", pathname);
			let twice = Route::new("en", once.path());
			prop_assert_eq!(once.path(), twice.path());
		}
	}
}
