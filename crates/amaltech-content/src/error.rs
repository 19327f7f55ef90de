// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for content access.

use amaltech_common_http::RetryableError;
use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ContentType;

/// Errors that can occur when reading from a content provider.
#[derive(Debug, Error)]
pub enum ContentError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Content API returned an error status.
	#[error("Content API error: {status} - {message}")]
	Api { status: u16, message: String },

	/// Invalid or unparseable response from the content API.
	#[error("Invalid response from content API: {0}")]
	InvalidResponse(String),

	/// Category listing requested for a type that has no categories.
	#[error("{0} has no categories")]
	NoCategories(ContentType),

	/// Provider-specific failure not covered above.
	#[error("Content provider error: {0}")]
	Provider(String),
}

impl RetryableError for ContentError {
	fn is_retryable(&self) -> bool {
		match self {
			ContentError::Network(e) => e.is_retryable(),
			ContentError::Timeout => true,
			ContentError::Api { status, .. } => *status >= 500 || *status == 408 || *status == 429,
			ContentError::InvalidResponse(_) => false,
			ContentError::NoCategories(_) => false,
			ContentError::Provider(_) => false,
		}
	}

	fn status(&self) -> Option<StatusCode> {
		match self {
			ContentError::Api { status, .. } => StatusCode::from_u16(*status).ok(),
			ContentError::Network(e) => e.status(),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use amaltech_common_http::RetryConfig;

	fn api(status: u16) -> ContentError {
		ContentError::Api {
			status,
			message: String::new(),
		}
	}

	#[test]
	fn test_server_errors_are_retried_by_queries() {
		let cfg = RetryConfig::query();
		assert!(cfg.should_retry(&api(500), 0));
		assert!(cfg.should_retry(&api(503), 2));
		assert!(!cfg.should_retry(&api(503), 3));
	}

	#[test]
	fn test_not_found_is_final() {
		assert!(!RetryConfig::query().should_retry(&api(404), 0));
	}

	#[test]
	fn test_rate_limit_retried_twice() {
		let cfg = RetryConfig::query();
		assert!(cfg.should_retry(&api(429), 0));
		assert!(cfg.should_retry(&api(429), 1));
		assert!(!cfg.should_retry(&api(429), 2));
	}

	#[test]
	fn test_timeout_is_retryable() {
		assert!(ContentError::Timeout.is_retryable());
		assert!(ContentError::Timeout.status().is_none());
	}

	#[test]
	fn test_invalid_response_is_final() {
		let err = ContentError::InvalidResponse("bad json".to_string());
		assert!(!RetryConfig::query().should_retry(&err, 0));
	}

	#[test]
	fn test_display() {
		assert_eq!(
			ContentError::NoCategories(ContentType::Careers).to_string(),
			"careers has no categories"
		);
		assert_eq!(api(502).to_string(), "Content API error: 502 - ");
	}
}
