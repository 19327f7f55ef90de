// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Amaltech site server binary.

use std::path::PathBuf;

use amaltech_routes::to_xml;
use amaltech_server::{
	create_app_state, create_router,
	routes::content::{StaticParamsResponse, SuppressedErrorResponse},
	VERSION,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Amaltech site server - sitemap, robots policy and route manifests.
#[derive(Parser, Debug)]
#[command(
	name = "amaltech-server",
	about = "Amaltech site route and sitemap server",
	version
)]
struct Args {
	/// Config file (defaults to /etc/amaltech/site.toml)
	#[arg(long, global = true, env = "AMALTECH_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run the HTTP server (default)
	Serve,
	/// Print the sitemap XML to stdout
	Sitemap,
	/// Print the static-param manifest JSON to stdout
	StaticParams,
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	let command = args.command.unwrap_or(Command::Serve);

	if let Command::Version = command {
		println!("amaltech-server {VERSION}");
		return Ok(());
	}

	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => amaltech_site_config::load_config_with_file(path),
		None => amaltech_site_config::load_config(),
	}
	.context("failed to load configuration")?;

	// stdout carries the sitemap and manifest output.
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let state = create_app_state(&config);

	match command {
		Command::Sitemap => {
			let entries = state
				.sitemap
				.build()
				.await
				.context("failed to build sitemap")?;
			print!("{}", to_xml(&entries));
		}
		Command::StaticParams => {
			let outcome = state.aggregator.all_static_params().await;
			if !outcome.is_complete() {
				tracing::warn!(
					suppressed = outcome.suppressed.len(),
					"static-param manifest is incomplete"
				);
			}
			let manifest = StaticParamsResponse {
				errors: outcome
					.suppressed
					.iter()
					.map(SuppressedErrorResponse::from)
					.collect(),
				params: outcome.value,
			};
			println!("{}", serde_json::to_string_pretty(&manifest)?);
		}
		Command::Serve => {
			tracing::info!(
				host = %config.http.host,
				port = config.http.port,
				base_url = %config.site.base_url,
				"starting amaltech-server"
			);

			let app = create_router(state).layer(TraceLayer::new_for_http());

			let addr = config.http.socket_addr();
			let listener = tokio::net::TcpListener::bind(&addr)
				.await
				.with_context(|| format!("failed to bind {addr}"))?;
			tracing::info!("listening on {}", addr);

			tokio::select! {
				result = axum::serve(listener, app) => {
					if let Err(e) = result {
						tracing::error!(error = %e, "Server error");
					}
				}
				_ = tokio::signal::ctrl_c() => {
					tracing::info!("Received shutdown signal");
				}
			}

			tracing::info!("Server shutdown complete");
		}
		Command::Version => {}
	}

	Ok(())
}
