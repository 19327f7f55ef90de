// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::error::ContentError;
use crate::types::{Category, ContentItem, ContentType, Page};

/// Read access to the site's content, one group of operations per type.
///
/// None of the operations take a locale: the content API serves the same
/// slugs for every locale and the locale only ever appears as a URL prefix.
#[async_trait]
pub trait ContentProvider: Send + Sync {
	async fn solutions(&self) -> Result<Page<ContentItem>, ContentError>;
	async fn solution_slugs(&self) -> Result<Vec<String>, ContentError>;
	async fn solution_categories(&self) -> Result<Vec<Category>, ContentError>;

	async fn products(&self) -> Result<Page<ContentItem>, ContentError>;
	async fn product_slugs(&self) -> Result<Vec<String>, ContentError>;
	async fn product_categories(&self) -> Result<Vec<Category>, ContentError>;

	async fn newsroom_posts(&self) -> Result<Page<ContentItem>, ContentError>;
	async fn newsroom_slugs(&self) -> Result<Vec<String>, ContentError>;
	async fn newsroom_categories(&self) -> Result<Vec<Category>, ContentError>;

	async fn job_openings(&self) -> Result<Page<ContentItem>, ContentError>;
	async fn job_slugs(&self) -> Result<Vec<String>, ContentError>;

	/// List operation for `content_type`.
	async fn list(&self, content_type: ContentType) -> Result<Page<ContentItem>, ContentError> {
		match content_type {
			ContentType::Solutions => self.solutions().await,
			ContentType::Products => self.products().await,
			ContentType::Newsroom => self.newsroom_posts().await,
			ContentType::Careers => self.job_openings().await,
		}
	}

	/// Slug listing for `content_type`.
	async fn slugs(&self, content_type: ContentType) -> Result<Vec<String>, ContentError> {
		match content_type {
			ContentType::Solutions => self.solution_slugs().await,
			ContentType::Products => self.product_slugs().await,
			ContentType::Newsroom => self.newsroom_slugs().await,
			ContentType::Careers => self.job_slugs().await,
		}
	}

	/// Category listing for `content_type`. Fails for careers.
	async fn categories(&self, content_type: ContentType) -> Result<Vec<Category>, ContentError> {
		match content_type {
			ContentType::Solutions => self.solution_categories().await,
			ContentType::Products => self.product_categories().await,
			ContentType::Newsroom => self.newsroom_categories().await,
			ContentType::Careers => Err(ContentError::NoCategories(ContentType::Careers)),
		}
	}
}
