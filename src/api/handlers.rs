//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{
    ErrorResponse, OptimizeRequest, ProfileRequest, SizingRequest, SizingResponse, VendorQuery,
};
use crate::error::SizingError;
use crate::load::EnergyProfile;
use crate::optimize::plan_within_budget;
use crate::sizing::{estimate_cost, size_system};
use crate::vendors::VendorRecord;

/// Maps a domain error to an HTTP status and JSON error body.
fn error_response(err: SizingError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        SizingError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        SizingError::InvalidConfig { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SizingError::DuplicateVendor { .. } => StatusCode::CONFLICT,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Derives an energy profile from submitted appliance entries.
///
/// `POST /profile` → 200 + `EnergyProfile` JSON, 400 on invalid input
pub async fn post_profile(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<ProfileRequest>,
) -> impl IntoResponse {
    EnergyProfile::from_entries(&req.entries)
        .map(Json)
        .map_err(error_response)
}

/// Derives profile, sizing spec, and cost estimate in one pass.
///
/// `POST /sizing` → 200 + `SizingResponse` JSON
pub async fn post_sizing(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SizingRequest>,
) -> impl IntoResponse {
    let autonomy = req
        .autonomy_days
        .unwrap_or(state.config.system.autonomy_days);
    let result = EnergyProfile::from_entries(&req.entries).and_then(|profile| {
        let spec = size_system(profile.daily_kwh, autonomy, &state.config)?;
        let cost = estimate_cost(&spec, &state.config);
        Ok(SizingResponse {
            profile,
            spec,
            cost,
        })
    });
    result.map(Json).map_err(error_response)
}

/// Fits the submitted appliance list against a budget.
///
/// `POST /optimize` → 200 + `BudgetPlan` JSON
pub async fn post_optimize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OptimizeRequest>,
) -> impl IntoResponse {
    plan_within_budget(&req.entries, req.budget, &state.config)
        .map(Json)
        .map_err(error_response)
}

/// Returns vendors matching the location and system-type filters.
///
/// `GET /vendors?location=lagos&system_type=residential` → 200 + JSON array
pub async fn get_vendors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VendorQuery>,
) -> Json<Vec<VendorRecord>> {
    let location = query.location.unwrap_or_default();
    let vendors = state.vendors.lock().unwrap_or_else(|e| e.into_inner());
    let records = vendors
        .find(&location, query.system_type)
        .into_iter()
        .cloned()
        .collect();
    Json(records)
}

/// Registers a new vendor.
///
/// `POST /vendors` → 201 on success, 409 on duplicate (name, location)
pub async fn post_vendor(
    State(state): State<Arc<AppState>>,
    Json(record): Json<VendorRecord>,
) -> impl IntoResponse {
    let mut vendors = state.vendors.lock().unwrap_or_else(|e| e.into_inner());
    match vendors.register(record.clone()) {
        Ok(()) => Ok((StatusCode::CREATED, Json(record))),
        Err(e) => Err(error_response(e)),
    }
}
