//! REST API over the calculator, sizer, optimizer, and vendor directory.
//!
//! Endpoints:
//! - `POST /profile` — appliance entries → energy profile
//! - `POST /sizing` — entries (+ optional autonomy override) → profile, spec, cost
//! - `POST /optimize` — entries + budget → budget plan
//! - `GET /vendors` — vendor lookup by location and system type
//! - `POST /vendors` — vendor registration

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::routing::{get, post};

use crate::config::SizingConfig;
use crate::vendors::VendorDirectory;

/// Application state shared across all request handlers.
///
/// The configuration is immutable for the life of the process. The vendor
/// directory is the only mutable shared resource; a single mutex around it
/// is sufficient since registration is append-only.
pub struct AppState {
    /// Sizing configuration used for every request.
    pub config: SizingConfig,
    /// Registered vendors.
    pub vendors: Mutex<VendorDirectory>,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/profile", post(handlers::post_profile))
        .route("/sizing", post(handlers::post_sizing))
        .route("/optimize", post(handlers::post_optimize))
        .route(
            "/vendors",
            get(handlers::get_vendors).post(handlers::post_vendor),
        )
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
