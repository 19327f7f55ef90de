// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use tracing::debug;

use crate::locale::LocaleSet;

/// Resolve the effective locale for a request.
///
/// Returns the requested locale when it is part of the set, otherwise the
/// set's default locale.
///
/// # Example
///
/// ```
/// use amaltech_common_i18n::{resolve_locale, LocaleSet};
///
/// let locales = LocaleSet::default();
/// assert_eq!(resolve_locale(Some("id"), &locales), "id");
/// assert_eq!(resolve_locale(None, &locales), "en");
/// assert_eq!(resolve_locale(Some("invalid"), &locales), "en");
/// ```
pub fn resolve_locale<'a>(requested: Option<&str>, locales: &'a LocaleSet) -> &'a str {
	if let Some(locale) = requested {
		if let Some(code) = locales.codes().find(|c| *c == locale) {
			return code;
		}
		debug!(requested = %locale, "unsupported locale, using default");
	}

	locales.default_locale()
}
