// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Route and static-param enumeration across content types and locales.

use std::sync::Arc;

use amaltech_common_i18n::LocaleSet;
use amaltech_content::{ContentItem, ContentProvider, ContentType};
use tracing::{debug, error, instrument, warn};

use crate::outcome::Partial;
use crate::route::{content_path, StaticParam};

/// Enumerates content pages by reading every list operation in order
/// solutions, products, newsroom, careers.
///
/// Both entry points are best-effort: a failed read is logged and recorded
/// in [`Partial::suppressed`] and never returned as an error.
pub struct RouteAggregator {
	provider: Arc<dyn ContentProvider>,
	locales: LocaleSet,
}

impl RouteAggregator {
	pub fn new(provider: Arc<dyn ContentProvider>, locales: LocaleSet) -> Self {
		Self { provider, locales }
	}

	pub fn locales(&self) -> &LocaleSet {
		&self.locales
	}

	/// Route strings (`/{type}/{category}/{slug}`, `/careers/{slug}`) for
	/// `locale`, in provider order.
	///
	/// The locale is only used as log and error context. It is not passed to
	/// the provider, so every locale gets the same routes. Whether the content
	/// API is meant to be locale-agnostic or this is a missing filter is
	/// unresolved; keep it as is until that is settled.
	#[instrument(skip(self))]
	pub async fn routes_by_language(&self, locale: &str) -> Partial<Vec<String>> {
		let mut outcome = Partial::new(Vec::new());

		for content_type in ContentType::ALL {
			match self.provider.list(content_type).await {
				Ok(page) => {
					let routes = page
						.data
						.iter()
						.filter_map(|item| item_path(content_type, item))
						.map(|path| format!("/{}", path.join("/")));
					outcome.value.extend(routes);
				}
				Err(e) => {
					error!(
						locale = %locale,
						content_type = %content_type,
						error = %e,
						"Failed to list content for routes"
					);
					outcome.suppress(locale, content_type, e);
				}
			}
		}

		debug!(
			locale = %locale,
			routes = outcome.value.len(),
			suppressed = outcome.suppressed.len(),
			"Collected routes"
		);
		outcome
	}

	/// One [`StaticParam`] per locale and content item, locale-major.
	///
	/// A failed read ends the current locale; what it already produced is
	/// kept and the next locale starts from the first content type again.
	#[instrument(skip(self))]
	pub async fn all_static_params(&self) -> Partial<Vec<StaticParam>> {
		let mut outcome = Partial::new(Vec::new());

		for locale in self.locales.codes() {
			for content_type in ContentType::ALL {
				match self.provider.list(content_type).await {
					Ok(page) => {
						let params = page
							.data
							.iter()
							.filter_map(|item| item_path(content_type, item))
							.map(|path| StaticParam::new(locale, path));
						outcome.value.extend(params);
					}
					Err(e) => {
						error!(
							locale = %locale,
							content_type = %content_type,
							error = %e,
							"Failed to list content for static params, skipping rest of locale"
						);
						outcome.suppress(locale, content_type, e);
						break;
					}
				}
			}
		}

		debug!(
			params = outcome.value.len(),
			suppressed = outcome.suppressed.len(),
			"Collected static params"
		);
		outcome
	}
}

fn item_path(content_type: ContentType, item: &ContentItem) -> Option<Vec<String>> {
	let path = content_path(content_type, item);
	if path.is_none() {
		warn!(
			content_type = %content_type,
			slug = %item.slug,
			"Skipping item without category"
		);
	}
	path
}
