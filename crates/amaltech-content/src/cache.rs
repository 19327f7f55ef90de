// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Read-through cache in front of a [`ContentProvider`].
//!
//! Each read is keyed by its [`QueryKey`] and served from memory while it is
//! younger than the stale time. Failed reads are never stored, so the next
//! call goes back to the inner provider.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::error::ContentError;
use crate::provider::ContentProvider;
use crate::query_key::{QueryKey, QueryKind};
use crate::types::{Category, ContentItem, ContentType, Page};

/// How long a cached read is considered fresh.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);

struct Entry<T> {
	fetched_at: Instant,
	value: T,
}

type Slot<T> = Mutex<HashMap<QueryKey, Entry<T>>>;

pub struct CachedContentProvider<P> {
	inner: P,
	stale_time: Duration,
	lists: Slot<Page<ContentItem>>,
	slugs: Slot<Vec<String>>,
	categories: Slot<Vec<Category>>,
}

impl<P: ContentProvider> CachedContentProvider<P> {
	pub fn new(inner: P) -> Self {
		Self::with_stale_time(inner, DEFAULT_STALE_TIME)
	}

	pub fn with_stale_time(inner: P, stale_time: Duration) -> Self {
		Self {
			inner,
			stale_time,
			lists: Mutex::new(HashMap::new()),
			slugs: Mutex::new(HashMap::new()),
			categories: Mutex::new(HashMap::new()),
		}
	}

	pub fn inner(&self) -> &P {
		&self.inner
	}

	pub fn stale_time(&self) -> Duration {
		self.stale_time
	}

	/// Drops the cached value for `key`, if any.
	pub async fn invalidate(&self, key: QueryKey) {
		debug!(key = %key, "invalidating cached query");
		match key.kind {
			QueryKind::List => {
				self.lists.lock().await.remove(&key);
			}
			QueryKind::Slugs => {
				self.slugs.lock().await.remove(&key);
			}
			QueryKind::Categories => {
				self.categories.lock().await.remove(&key);
			}
		}
	}

	pub async fn invalidate_all(&self) {
		debug!("invalidating all cached queries");
		self.lists.lock().await.clear();
		self.slugs.lock().await.clear();
		self.categories.lock().await.clear();
	}

	async fn read_through<T, F, Fut>(
		&self,
		slot: &Slot<T>,
		key: QueryKey,
		fetch: F,
	) -> Result<T, ContentError>
	where
		T: Clone,
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<T, ContentError>>,
	{
		{
			let entries = slot.lock().await;
			if let Some(entry) = entries.get(&key) {
				if entry.fetched_at.elapsed() < self.stale_time {
					trace!(key = %key, "cache hit");
					return Ok(entry.value.clone());
				}
			}
		}

		debug!(key = %key, "cache miss");
		let value = fetch().await?;
		slot.lock().await.insert(
			key,
			Entry {
				fetched_at: Instant::now(),
				value: value.clone(),
			},
		);
		Ok(value)
	}

	async fn cached_list(&self, ty: ContentType) -> Result<Page<ContentItem>, ContentError> {
		self.read_through(&self.lists, QueryKey::list(ty), || self.inner.list(ty))
			.await
	}

	async fn cached_slugs(&self, ty: ContentType) -> Result<Vec<String>, ContentError> {
		self.read_through(&self.slugs, QueryKey::slugs(ty), || self.inner.slugs(ty))
			.await
	}

	async fn cached_categories(&self, ty: ContentType) -> Result<Vec<Category>, ContentError> {
		self.read_through(&self.categories, QueryKey::categories(ty), || {
			self.inner.categories(ty)
		})
		.await
	}
}

#[async_trait]
impl<P: ContentProvider> ContentProvider for CachedContentProvider<P> {
	async fn solutions(&self) -> Result<Page<ContentItem>, ContentError> {
		self.cached_list(ContentType::Solutions).await
	}

	async fn solution_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.cached_slugs(ContentType::Solutions).await
	}

	async fn solution_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.cached_categories(ContentType::Solutions).await
	}

	async fn products(&self) -> Result<Page<ContentItem>, ContentError> {
		self.cached_list(ContentType::Products).await
	}

	async fn product_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.cached_slugs(ContentType::Products).await
	}

	async fn product_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.cached_categories(ContentType::Products).await
	}

	async fn newsroom_posts(&self) -> Result<Page<ContentItem>, ContentError> {
		self.cached_list(ContentType::Newsroom).await
	}

	async fn newsroom_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.cached_slugs(ContentType::Newsroom).await
	}

	async fn newsroom_categories(&self) -> Result<Vec<Category>, ContentError> {
		self.cached_categories(ContentType::Newsroom).await
	}

	async fn job_openings(&self) -> Result<Page<ContentItem>, ContentError> {
		self.cached_list(ContentType::Careers).await
	}

	async fn job_slugs(&self) -> Result<Vec<String>, ContentError> {
		self.cached_slugs(ContentType::Careers).await
	}
}
