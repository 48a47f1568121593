//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::load::ApplianceEntry;
use crate::sizing::{CostEstimate, SolarSpec};
use crate::vendors::SystemType;

/// Request body for `POST /profile`.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    /// Appliance entries in submission order.
    pub entries: Vec<ApplianceEntry>,
}

/// Request body for `POST /sizing`.
#[derive(Debug, Deserialize)]
pub struct SizingRequest {
    /// Appliance entries in submission order.
    pub entries: Vec<ApplianceEntry>,
    /// Overrides the configured autonomy days when present.
    pub autonomy_days: Option<u32>,
}

/// Response body for `POST /sizing`: the full derivation chain.
#[derive(Debug, Serialize)]
pub struct SizingResponse {
    /// Derived energy profile.
    pub profile: crate::load::EnergyProfile,
    /// Recommended system sizing.
    pub spec: SolarSpec,
    /// Cost and payback estimate for the sized system.
    pub cost: CostEstimate,
}

/// Request body for `POST /optimize`.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    /// Appliance entries in submission order.
    pub entries: Vec<ApplianceEntry>,
    /// Budget to fit the load against.
    pub budget: f32,
}

/// Query parameters for `GET /vendors`.
#[derive(Debug, Deserialize)]
pub struct VendorQuery {
    /// Case-insensitive substring location filter; empty matches all.
    pub location: Option<String>,
    /// Restricts results to vendors supporting this system type.
    pub system_type: Option<SystemType>,
}

/// Error payload returned with non-2xx statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub error: String,
}
