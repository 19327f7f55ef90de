// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale support for the Amaltech site.
//!
//! The site is published under a small, explicit set of locales. The set is
//! built once from configuration and handed to every component that
//! enumerates pages, so there is exactly one place that decides which
//! locales exist.
//!
//! # Example
//!
//! ```
//! use amaltech_common_i18n::{resolve_locale, LocaleSet};
//!
//! let locales = LocaleSet::default();
//! assert_eq!(locales.codes().collect::<Vec<_>>(), vec!["en", "id"]);
//!
//! // Unknown locales fall back to the configured default
//! assert_eq!(resolve_locale(Some("fr"), &locales), "en");
//! ```

mod locale;
mod resolve;

pub use locale::{LocaleError, LocaleSet, DEFAULT_LOCALE, DEFAULT_LOCALES};
pub use resolve::resolve_locale;
