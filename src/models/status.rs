use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ProductRecord;

pub const HEALTHY: &str = "healthy";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeMessage {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub environment: String,
}

/// Body of `GET /health`. `status` is always [`HEALTHY`]; a process that
/// can answer is alive.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: Option<String>,
    pub environment: String,
}

/// Body of `GET /api/products`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductList {
    pub data: Vec<ProductRecord>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

impl ProductList {
    pub fn new(data: Vec<ProductRecord>, timestamp: DateTime<Utc>) -> Self {
        Self {
            count: data.len(),
            data,
            timestamp,
        }
    }
}

/// Body of `GET /api/info`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInfo {
    pub application_name: String,
    pub version: Option<String>,
    pub environment: String,
    pub machine_name: String,
    pub os_version: String,
    pub processor_count: usize,
    pub working_set: i64,
    pub timestamp: DateTime<Utc>,
}
