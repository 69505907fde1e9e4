use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lap {
    pub id: i64,
    pub activity_id: i64,
    pub recorded_at: String,
}

/// Persisted snapshot. The id counters only move forward, so ids are never
/// reused even after deletes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub next_activity_id: i64,
    pub next_lap_id: i64,
    pub activities: Vec<Activity>,
    pub laps: Vec<Lap>,
}

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Activity list row: the stored fields plus the live lap count, computed
/// at list time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub lap_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LapHistoryResponse {
    pub activity: Activity,
    pub laps: Vec<Lap>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
