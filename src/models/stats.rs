use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard counters for the admin overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_messages: u64,
    pub unread_messages: u64,
    pub read_messages: u64,
    pub total_requests: u64,
    pub pending_requests: u64,
    pub completed_requests: u64,
    pub total_projects: u64,
    pub total_users: u64,
    /// Bytes held by the upload store
    pub storage_used: u64,
    /// Seconds since the server process started
    pub server_uptime: u64,
}
