// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Route listing, static-param manifest and route resolution handlers.

use amaltech_common_i18n::resolve_locale;
use amaltech_content::ContentType;
use amaltech_routes::{Route, StaticParam, SuppressedError};
use axum::{
	extract::{Path, Query, State},
	Json,
};
use serde::{Deserialize, Serialize};

use crate::{api::AppState, error::ServerError};

/// A content read that was skipped while building a best-effort response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressedErrorResponse {
	pub locale: String,
	pub content_type: ContentType,
	pub message: String,
}

impl From<&SuppressedError> for SuppressedErrorResponse {
	fn from(e: &SuppressedError) -> Self {
		Self {
			locale: e.locale.clone(),
			content_type: e.content_type,
			message: e.error.to_string(),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct RoutesResponse {
	pub locale: String,
	pub routes: Vec<String>,
	pub errors: Vec<SuppressedErrorResponse>,
}

#[derive(Debug, Serialize)]
pub struct StaticParamsResponse {
	pub params: Vec<StaticParam>,
	pub errors: Vec<SuppressedErrorResponse>,
}

#[derive(Debug, Deserialize)]
pub struct RoutesQuery {
	pub locale: Option<String>,
}

fn require_locale(state: &AppState, locale: &str) -> Result<(), ServerError> {
	if state.locales.contains(locale) {
		Ok(())
	} else {
		Err(ServerError::UnknownLocale(locale.to_string()))
	}
}

async fn routes_response(state: &AppState, locale: &str) -> RoutesResponse {
	let outcome = state.aggregator.routes_by_language(locale).await;
	RoutesResponse {
		locale: locale.to_string(),
		errors: outcome.suppressed.iter().map(Into::into).collect(),
		routes: outcome.value,
	}
}

/// GET /api/routes/{locale} - Content routes for a configured locale.
pub async fn routes_for_locale(
	State(state): State<AppState>,
	Path(locale): Path<String>,
) -> Result<Json<RoutesResponse>, ServerError> {
	require_locale(&state, &locale)?;
	Ok(Json(routes_response(&state, &locale).await))
}

/// GET /api/routes?locale= - Content routes, falling back to the default
/// locale when the requested one is missing or unsupported.
pub async fn routes_for_requested_locale(
	State(state): State<AppState>,
	Query(query): Query<RoutesQuery>,
) -> Json<RoutesResponse> {
	let locale = resolve_locale(query.locale.as_deref(), &state.locales).to_string();
	Json(routes_response(&state, &locale).await)
}

/// GET /api/static-params - Pages to pre-render for every locale.
pub async fn static_params(State(state): State<AppState>) -> Json<StaticParamsResponse> {
	let outcome = state.aggregator.all_static_params().await;
	Json(StaticParamsResponse {
		errors: outcome.suppressed.iter().map(Into::into).collect(),
		params: outcome.value,
	})
}

/// GET /api/resolve/{locale}/{*path}
pub async fn resolve_route(
	State(state): State<AppState>,
	Path((locale, path)): Path<(String, String)>,
) -> Result<Json<Route>, ServerError> {
	require_locale(&state, &locale)?;
	Ok(Json(Route::new(locale, path)))
}

/// GET /api/resolve/{locale} - The locale root.
pub async fn resolve_root(
	State(state): State<AppState>,
	Path(locale): Path<String>,
) -> Result<Json<Route>, ServerError> {
	require_locale(&state, &locale)?;
	Ok(Json(Route::new(locale, "")))
}
