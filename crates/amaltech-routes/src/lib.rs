// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Route enumeration for the Amaltech site.
//!
//! Everything here reads through a [`ContentProvider`](amaltech_content::ContentProvider)
//! and produces request-scoped values:
//! - [`Route`], the structured form of a locale plus request path
//! - [`RouteAggregator`], per-locale route lists and the static-param
//!   manifest, both best-effort via [`Partial`]
//! - [`SitemapBuilder`], the fail-fast sitemap and its XML rendering
//! - [`RobotsPolicy`], the `robots.txt` document pointing at the sitemap

pub mod aggregator;
pub mod outcome;
pub mod robots;
pub mod route;
pub mod sitemap;

pub use aggregator::RouteAggregator;
pub use outcome::{Partial, SuppressedError};
pub use robots::{RobotsPolicy, RobotsRule};
pub use route::{content_path, Route, StaticParam};
pub use sitemap::{to_xml, ChangeFrequency, SitemapBuilder, SitemapEntry, SitemapError};
