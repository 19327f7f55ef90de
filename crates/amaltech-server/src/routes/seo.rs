// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sitemap and robots handlers.

use amaltech_routes::to_xml;
use axum::{extract::State, http::header, response::IntoResponse};

use crate::{api::AppState, error::ServerError};

/// GET /sitemap.xml - Full sitemap. Fails with 502 if any content read fails.
pub async fn sitemap_xml(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
	let entries = state.sitemap.build().await?;
	tracing::debug!(entries = entries.len(), "sitemap_xml: built sitemap");
	Ok((
		[(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
		to_xml(&entries),
	))
}

/// GET /robots.txt
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
	(
		[(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
		state.robots.render(),
	)
}
