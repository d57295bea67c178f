use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Connectivity report returned by `GET /test`.
///
/// Every field is a human readable status; the endpoint never fails, it describes
/// the failure instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticDto {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}
