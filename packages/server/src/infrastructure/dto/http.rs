//! DTOs for the HTTP API endpoints.

use serde::{Deserialize, Serialize};

/// Summary of one live room for `GET /api/rooms`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub count: usize,
}
