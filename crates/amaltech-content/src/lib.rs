// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content access for the Amaltech site.
//!
//! The site's catalog (solutions, products, newsroom posts, job openings)
//! lives behind a content API. This crate provides:
//! - [`ContentProvider`], the seam every route and sitemap consumer reads
//!   through
//! - [`HttpContentProvider`], a typed client for the content API with retry
//! - [`CachedContentProvider`], a read-through cache keyed by [`QueryKey`]

pub mod cache;
pub mod client;
pub mod error;
pub mod provider;
pub mod query_key;
pub mod types;

pub use amaltech_common_http::RetryConfig;
pub use cache::{CachedContentProvider, DEFAULT_STALE_TIME};
pub use client::{user_agent, HttpContentProvider};
pub use error::ContentError;
pub use provider::ContentProvider;
pub use query_key::{QueryKey, QueryKind};
pub use types::{Category, ContentItem, ContentType, Page};
