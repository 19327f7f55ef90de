// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Retry logic with exponential backoff for HTTP requests.
//!
//! Two policies are provided. [`RetryConfig::query`] is used for reads: up to
//! three retries, with 4xx responses treated as final except `408 Request
//! Timeout` and `429 Too Many Requests`, which get up to two retries.
//! [`RetryConfig::mutation`] is used for writes: up to two retries and never
//! on a 4xx.

use reqwest::StatusCode;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct RetryConfig {
	/// Retries allowed after the first attempt.
	pub max_retries: u32,
	/// Retries allowed when the failure is a 408 or 429. Zero disables
	/// retrying client errors entirely.
	pub throttled_retries: u32,
	pub base_delay: Duration,
	pub max_delay: Duration,
	pub backoff_factor: f64,
	pub jitter: bool,
}

impl RetryConfig {
	/// Policy for read operations.
	pub fn query() -> Self {
		Self {
			max_retries: 3,
			throttled_retries: 2,
			base_delay: Duration::from_secs(1),
			max_delay: Duration::from_secs(30),
			backoff_factor: 2.0,
			jitter: true,
		}
	}

	/// Policy for write operations.
	pub fn mutation() -> Self {
		Self {
			max_retries: 2,
			throttled_retries: 0,
			..Self::query()
		}
	}

	/// Whether a failure should be retried given how many retries already ran.
	pub fn should_retry<E: RetryableError + ?Sized>(&self, err: &E, retries: u32) -> bool {
		if let Some(status) = err.status() {
			if status.is_client_error() {
				return is_throttled(status)
					&& retries < self.throttled_retries.min(self.max_retries);
			}
		}

		err.is_retryable() && retries < self.max_retries
	}
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self::query()
	}
}

pub trait RetryableError {
	fn is_retryable(&self) -> bool;

	/// HTTP status attached to the failure, if the server answered at all.
	fn status(&self) -> Option<StatusCode> {
		None
	}
}

impl RetryableError for reqwest::Error {
	fn is_retryable(&self) -> bool {
		if self.is_timeout() || self.is_connect() {
			return true;
		}

		match reqwest::Error::status(self) {
			Some(status) => status.is_server_error() || is_throttled(status),
			None => false,
		}
	}

	fn status(&self) -> Option<StatusCode> {
		reqwest::Error::status(self)
	}
}

fn is_throttled(status: StatusCode) -> bool {
	status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::TOO_MANY_REQUESTS
}

fn calculate_delay(cfg: &RetryConfig, attempt: u32) -> Duration {
	let exponential_delay = cfg.base_delay.as_secs_f64() * cfg.backoff_factor.powi(attempt as i32);
	let max_delay = cfg.max_delay.as_secs_f64();
	let capped_delay = exponential_delay.min(max_delay);

	let final_delay = if cfg.jitter {
		let jitter_factor = 0.5 + fastrand::f64();
		(capped_delay * jitter_factor).min(max_delay)
	} else {
		capped_delay
	};

	Duration::from_secs_f64(final_delay)
}

pub async fn retry<F, Fut, T, E>(cfg: &RetryConfig, mut f: F) -> Result<T, E>
where
	F: FnMut() -> Fut,
	Fut: std::future::Future<Output = Result<T, E>>,
	E: RetryableError + std::fmt::Debug,
{
	let mut retries = 0;

	loop {
		match f().await {
			Ok(result) => return Ok(result),
			Err(err) => {
				if !cfg.should_retry(&err, retries) {
					warn!(
							error = ?err,
							attempt = retries + 1,
							max_retries = cfg.max_retries,
							"giving up after error"
					);
					return Err(err);
				}

				let delay = calculate_delay(cfg, retries);
				retries += 1;
				warn!(
						error = ?err,
						retry = retries,
						max_retries = cfg.max_retries,
						delay_ms = delay.as_millis(),
						"retrying after error"
				);

				tokio::time::sleep(delay).await;
			}
		}
	}
}
