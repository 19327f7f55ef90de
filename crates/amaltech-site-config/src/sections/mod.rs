// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

pub mod content;
pub mod http;
pub mod logging;
pub mod site;

pub use content::{ContentConfig, ContentConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use site::{SiteConfig, SiteConfigLayer, DEFAULT_BASE_URL, DEFAULT_STATIC_ROUTES};
