// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Best-effort results.

use amaltech_content::{ContentError, ContentType};

/// A provider failure that was logged and skipped instead of returned.
#[derive(Debug)]
pub struct SuppressedError {
	pub locale: String,
	pub content_type: ContentType,
	pub error: ContentError,
}

/// A value built from whatever succeeded, plus the failures left out of it.
#[derive(Debug)]
pub struct Partial<T> {
	pub value: T,
	pub suppressed: Vec<SuppressedError>,
}

impl<T> Partial<T> {
	pub fn new(value: T) -> Self {
		Self {
			value,
			suppressed: Vec::new(),
		}
	}

	pub fn suppress(&mut self, locale: &str, content_type: ContentType, error: ContentError) {
		self.suppressed.push(SuppressedError {
			locale: locale.to_string(),
			content_type,
			error,
		});
	}

	/// True when nothing was suppressed.
	pub fn is_complete(&self) -> bool {
		self.suppressed.is_empty()
	}

	pub fn into_value(self) -> T {
		self.value
	}
}

impl<T: Default> Default for Partial<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}
