// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Amaltech site services.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`AMALTECH_*`)
//!
//! # Usage
//!
//! ```ignore
//! use amaltech_site_config::load_config;
//!
//! let config = load_config()?;
//! println!("Sitemap base URL: {}", config.site.base_url);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServiceConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::{debug, info};

/// Fully resolved service configuration.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
	pub site: SiteConfig,
	pub content: ContentConfig,
	pub http: HttpConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`AMALTECH_*`)
/// 2. Config file (`/etc/amaltech/site.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServiceConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServiceConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<ServiceConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServiceConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServiceConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServiceConfigLayer) -> Result<ServiceConfig, ConfigError> {
	let site = layer.site.unwrap_or_default().finalize()?;
	let content = layer.content.unwrap_or_default().finalize();
	let http = layer.http.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&content)?;

	info!(
		base_url = %site.base_url,
		locales = ?site.locales.codes().collect::<Vec<_>>(),
		content_api = %content.api_url,
		cache_stale_secs = content.cache_stale_secs,
		host = %http.host,
		port = http.port,
		"Service configuration loaded"
	);

	Ok(ServiceConfig {
		site,
		content,
		http,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(content: &ContentConfig) -> Result<(), ConfigError> {
	if content.timeout_secs == 0 {
		return Err(ConfigError::Validation(
			"AMALTECH_CONTENT_TIMEOUT_SECS must be greater than zero".to_string(),
		));
	}
	if content.page_size == 0 {
		return Err(ConfigError::Validation(
			"AMALTECH_CONTENT_PAGE_SIZE must be greater than zero".to_string(),
		));
	}

	Ok(())
}
