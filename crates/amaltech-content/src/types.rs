// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content model shared by the provider, routes and sitemap.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The kinds of content that get their own detail pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
	Solutions,
	Products,
	Newsroom,
	Careers,
}

impl ContentType {
	/// All content types in enumeration order.
	pub const ALL: [ContentType; 4] = [
		ContentType::Solutions,
		ContentType::Products,
		ContentType::Newsroom,
		ContentType::Careers,
	];

	/// First URL segment of every page of this type.
	pub fn prefix(&self) -> &'static str {
		match self {
			ContentType::Solutions => "solutions",
			ContentType::Products => "products",
			ContentType::Newsroom => "newsroom",
			ContentType::Careers => "careers",
		}
	}

	/// Resource name on the content API. Job openings live under `jobs`
	/// while their pages live under `careers`.
	pub fn api_resource(&self) -> &'static str {
		match self {
			ContentType::Careers => "jobs",
			other => other.prefix(),
		}
	}

	/// Careers is the only type whose items carry no category.
	pub fn has_categories(&self) -> bool {
		!matches!(self, ContentType::Careers)
	}

	pub fn from_prefix(prefix: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|t| t.prefix() == prefix)
	}
}

impl fmt::Display for ContentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.prefix())
	}
}

/// A single content entry as returned by a list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
	pub slug: String,
	#[serde(default, deserialize_with = "category_slug")]
	pub category: Option<String>,
}

impl ContentItem {
	pub fn new(slug: impl Into<String>, category: Option<&str>) -> Self {
		Self {
			slug: slug.into(),
			category: category.map(str::to_string),
		}
	}

	pub fn uncategorized(slug: impl Into<String>) -> Self {
		Self::new(slug, None)
	}
}

/// A category listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	pub slug: String,
}

impl Category {
	pub fn new(slug: impl Into<String>) -> Self {
		Self { slug: slug.into() }
	}
}

/// Envelope returned by list operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
	pub data: Vec<T>,
}

impl<T> Page<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self { data }
	}
}

impl<T> Default for Page<T> {
	fn default() -> Self {
		Self { data: Vec::new() }
	}
}

/// The content API sends a category either as its slug or as an embedded
/// object carrying the slug.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRef {
	Slug(String),
	Object { slug: String },
}

fn category_slug<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value: Option<CategoryRef> = Option::deserialize(deserializer)?;
	Ok(value.map(|c| match c {
		CategoryRef::Slug(slug) | CategoryRef::Object { slug } => slug,
	}))
}
