// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The configured set of site locales.

use serde::Serialize;
use thiserror::Error;

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: &str = "en";

/// Locales the site is published in unless configured otherwise.
pub const DEFAULT_LOCALES: &[&str] = &["en", "id"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
	#[error("locale set is empty")]
	Empty,

	#[error("invalid locale code '{0}'")]
	Invalid(String),

	#[error("locale '{0}' listed more than once")]
	Duplicate(String),

	#[error("default locale '{0}' is not in the locale set")]
	UnknownDefault(String),
}

/// An ordered, non-empty set of locale codes plus the default among them.
///
/// Order is significant: every enumeration over locales (static params,
/// sitemap entries) walks the set in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSet {
	locales: Vec<String>,
	default: String,
}

impl LocaleSet {
	pub fn new<I, S>(locales: I, default: impl Into<String>) -> Result<Self, LocaleError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut codes: Vec<String> = Vec::new();
		for code in locales {
			let code = code.into();
			if !is_valid_code(&code) {
				return Err(LocaleError::Invalid(code));
			}
			if codes.contains(&code) {
				return Err(LocaleError::Duplicate(code));
			}
			codes.push(code);
		}

		if codes.is_empty() {
			return Err(LocaleError::Empty);
		}

		let default = default.into();
		if !codes.contains(&default) {
			return Err(LocaleError::UnknownDefault(default));
		}

		Ok(Self {
			locales: codes,
			default,
		})
	}

	pub fn codes(&self) -> impl Iterator<Item = &str> {
		self.locales.iter().map(String::as_str)
	}

	pub fn contains(&self, code: &str) -> bool {
		self.locales.iter().any(|l| l == code)
	}

	pub fn default_locale(&self) -> &str {
		&self.default
	}

	pub fn len(&self) -> usize {
		self.locales.len()
	}

	/// Never true for a set built through `new` or `default`.
	pub fn is_empty(&self) -> bool {
		self.locales.is_empty()
	}
}

impl Default for LocaleSet {
	fn default() -> Self {
		Self {
			locales: DEFAULT_LOCALES.iter().map(|s| s.to_string()).collect(),
			default: DEFAULT_LOCALE.to_string(),
		}
	}
}

/// Locale codes are used verbatim as URL segments: ASCII letters, digits and
/// `-`, starting with a letter.
fn is_valid_code(code: &str) -> bool {
	let mut chars = code.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {
			chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
		}
		_ => false,
	}
}
