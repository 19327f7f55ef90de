// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! In-memory content provider with scripted data and failures.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use amaltech_content::{
	Category, ContentError, ContentItem, ContentProvider, ContentType, Page, QueryKey,
};
use async_trait::async_trait;

#[derive(Default)]
pub struct ScriptedProvider {
	items: HashMap<ContentType, Vec<ContentItem>>,
	slugs: HashMap<ContentType, Vec<String>>,
	categories: HashMap<ContentType, Vec<Category>>,
	failing: HashSet<QueryKey>,
	calls: Mutex<Vec<QueryKey>>,
}

impl ScriptedProvider {
	pub fn new() -> Self {
		Self::default()
	}

	/// A small catalog covering every content type.
	pub fn catalog() -> Self {
		Self::new()
			.with_items(
				ContentType::Solutions,
				vec![
					ContentItem::new("smart-farm", Some("iot")),
					ContentItem::new("fleet-tracker", Some("logistics")),
				],
			)
			.with_items(
				ContentType::Products,
				vec![ContentItem::new("amal-pos", Some("retail"))],
			)
			.with_items(
				ContentType::Newsroom,
				vec![
					ContentItem::new("launch-day", Some("news")),
					ContentItem::new("q3-report", Some("reports")),
				],
			)
			.with_items(
				ContentType::Careers,
				vec![ContentItem::uncategorized("backend-engineer")],
			)
			.with_slugs(ContentType::Solutions, &["smart-farm", "fleet-tracker"])
			.with_slugs(ContentType::Products, &["amal-pos"])
			.with_slugs(ContentType::Newsroom, &["launch-day"])
			.with_slugs(ContentType::Careers, &["backend-engineer"])
			.with_categories(ContentType::Solutions, &["iot", "logistics"])
			.with_categories(ContentType::Products, &["retail"])
			.with_categories(ContentType::Newsroom, &["news"])
	}

	pub fn with_items(mut self, content_type: ContentType, items: Vec<ContentItem>) -> Self {
		self.items.insert(content_type, items);
		self
	}

	pub fn with_slugs(mut self, content_type: ContentType, slugs: &[&str]) -> Self {
		self.slugs
			.insert(content_type, slugs.iter().map(|s| s.to_string()).collect());
		self
	}

	pub fn with_categories(mut self, content_type: ContentType, slugs: &[&str]) -> Self {
		self.categories
			.insert(content_type, slugs.iter().map(|s| Category::new(*s)).collect());
		self
	}

	/// Makes every read of `key` fail with a 503.
	pub fn failing(mut self, key: QueryKey) -> Self {
		self.failing.insert(key);
		self
	}

	pub fn calls(&self) -> Vec<QueryKey> {
		self.calls.lock().unwrap().clone()
	}

	fn read<T: Clone + Default>(
		&self,
		key: QueryKey,
		source: &HashMap<ContentType, T>,
	) -> Result<T, ContentError> {
		self.calls.lock().unwrap().push(key);
		if self.failing.contains(&key) {
			return Err(ContentError::Api {
				status: 503,
				message: format!("{key} unavailable"),
			});
		}
		Ok(source.get(&key.content_type).cloned().unwrap_or_default())
	}

	fn list_of(&self, content_type: ContentType) -> Result<Page<ContentItem>, ContentError> {
		self.read(QueryKey::list(content_type), &self.items)
			.map(Page::new)
	}

	fn slugs_of(&self, content_type: ContentType) -> Result<Vec<String>, ContentError> {
		self.read(QueryKey::slugs(content_type), &self.slugs)
	}

	fn categories_of(&self, content_type: ContentType) -> Result<Vec<Category>, ContentError> {
		self.read(QueryKey::categories(content_type), &self.categories)
	}
}

#[async_trait]
impl ContentProvider for ScriptedProvider {
	async fn solutions(&self) -> Result<Page<ContentItem>, ContentError> {
		self.list_of(ContentType::Solutions)
	}
	async fn solution_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.slugs_of(ContentType::Solutions)
	}
	async fn solution_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.categories_of(ContentType::Solutions)
	}
	async fn products(&self) -> Result<Page<ContentItem>, ContentError> {
		self.list_of(ContentType::Products)
	}
	async fn product_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.slugs_of(ContentType::Products)
	}
	async fn product_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.categories_of(ContentType::Products)
	}
	async fn newsroom_posts(&self) -> Result<Page<ContentItem>, ContentError> {
		self.list_of(ContentType::Newsroom)
	}
	async fn newsroom_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.slugs_of(ContentType::Newsroom)
	}
	async fn newsroom_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.categories_of(ContentType::Newsroom)
	}
	async fn job_openings(&self) -> Result<Page<ContentItem>, ContentError> {
		self.list_of(ContentType::Careers)
	}
	async fn job_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.slugs_of(ContentType::Careers)
	}
}
