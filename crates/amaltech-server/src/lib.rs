// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Amaltech site server.
//!
//! Serves the sitemap, robots policy, per-locale route listing, static-param
//! manifest and route resolution over HTTP.

pub mod api;
pub mod error;
pub mod routes;

pub use api::{content_provider, create_app_state, create_router, with_read_cache, AppState};
pub use error::ServerError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
