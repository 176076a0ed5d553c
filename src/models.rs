use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "user-service";
pub const STATUS_RUNNING: &str = "running";
pub const STATUS_MESSAGE: &str = "User service is running";

#[derive(Debug, Deserialize, Serialize)]
pub struct StatusResponse {
    pub name: String,
    pub version: String,
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub uptime: String
}
