// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Namespaced keys for cached content reads.

use std::fmt;

use crate::types::ContentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
	List,
	Slugs,
	Categories,
}

impl QueryKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			QueryKind::List => "list",
			QueryKind::Slugs => "slugs",
			QueryKind::Categories => "categories",
		}
	}
}

/// Identifies one provider read. The string form is `{type}.{kind}`, e.g.
/// `solutions.slugs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey {
	pub content_type: ContentType,
	pub kind: QueryKind,
}

impl QueryKey {
	pub fn list(content_type: ContentType) -> Self {
		Self {
			content_type,
			kind: QueryKind::List,
		}
	}

	pub fn slugs(content_type: ContentType) -> Self {
		Self {
			content_type,
			kind: QueryKind::Slugs,
		}
	}

	pub fn categories(content_type: ContentType) -> Self {
		Self {
			content_type,
			kind: QueryKind::Categories,
		}
	}

	/// Every key a provider can be asked for. Careers has no categories key.
	pub fn all() -> Vec<QueryKey> {
		let mut keys = Vec::with_capacity(11);
		for ty in ContentType::ALL {
			keys.push(Self::list(ty));
			keys.push(Self::slugs(ty));
			if ty.has_categories() {
				keys.push(Self::categories(ty));
			}
		}
		keys
	}
}

impl fmt::Display for QueryKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.content_type, self.kind.as_str())
	}
}
