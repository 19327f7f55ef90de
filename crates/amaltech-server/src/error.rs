// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use amaltech_routes::SitemapError;
use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Locale is not part of the configured set.
	#[error("Unsupported locale: {0}")]
	UnknownLocale(String),

	/// The content API failed while building the sitemap.
	#[error("Sitemap unavailable: {0}")]
	Sitemap(#[from] SitemapError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			ServerError::UnknownLocale(locale) => (
				StatusCode::NOT_FOUND,
				ErrorResponse {
					error: "not_found".to_string(),
					message: format!("Unsupported locale: {locale}"),
				},
			),
			ServerError::Sitemap(e) => {
				tracing::error!(error = %e, "sitemap build failed");
				(
					StatusCode::BAD_GATEWAY,
					ErrorResponse {
						error: "upstream_error".to_string(),
						message: "The content service could not be reached".to_string(),
					},
				)
			}
		};

		(status, Json(error_response)).into_response()
	}
}
