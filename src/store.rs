use crate::models::{Activity, ActivitySummary, AppData, Lap};
use crate::storage::persist_data;
use chrono::Utc;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Typed outcomes of store operations. The API layer maps these onto
/// status codes; the store itself never touches HTTP.
#[derive(Debug)]
pub enum StoreError {
    InvalidInput(&'static str),
    Conflict(&'static str),
    NotFound(&'static str),
    Persistence(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidInput(message)
            | StoreError::Conflict(message)
            | StoreError::NotFound(message) => f.write_str(message),
            StoreError::Persistence(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for StoreError {}

/// Owns the activity/lap tables. Every operation runs under one mutex
/// guard, which serializes conflicting writes and makes the cascade delete
/// a single atomic unit. Mutations are written back to the snapshot file
/// before the guard is released, so readers never observe a state that was
/// not persisted first.
pub struct Store {
    data_path: Option<PathBuf>,
    data: Mutex<AppData>,
}

impl Store {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path: Some(data_path),
            data: Mutex::new(data),
        }
    }

    /// Backing with no disk behind it, for tests.
    pub fn in_memory() -> Self {
        Self {
            data_path: None,
            data: Mutex::new(AppData::default()),
        }
    }

    /// All activities, newest first, each with its live lap count.
    /// Activities created within the same second keep insertion order via
    /// the id tie-break.
    pub async fn list_activities(&self) -> Vec<ActivitySummary> {
        let data = self.data.lock().await;
        let mut rows: Vec<ActivitySummary> = data
            .activities
            .iter()
            .map(|activity| ActivitySummary {
                id: activity.id,
                name: activity.name.clone(),
                created_at: activity.created_at.clone(),
                lap_count: data
                    .laps
                    .iter()
                    .filter(|lap| lap.activity_id == activity.id)
                    .count() as u64,
            })
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows
    }

    pub async fn create_activity(&self, name: &str) -> Result<Activity, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidInput("Activity name is required"));
        }

        let mut data = self.data.lock().await;
        if data.activities.iter().any(|activity| activity.name == name) {
            return Err(StoreError::Conflict("Activity already exists"));
        }

        data.next_activity_id += 1;
        let activity = Activity {
            id: data.next_activity_id,
            name: name.to_string(),
            created_at: now_timestamp(),
        };
        data.activities.push(activity.clone());
        self.persist(&data).await?;

        Ok(activity)
    }

    /// Removes the activity and every lap it owns in one step.
    pub async fn delete_activity(&self, id: i64) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        let index = data
            .activities
            .iter()
            .position(|activity| activity.id == id)
            .ok_or(StoreError::NotFound("Activity not found"))?;

        data.activities.remove(index);
        data.laps.retain(|lap| lap.activity_id != id);
        self.persist(&data).await?;

        Ok(())
    }

    pub async fn record_lap(&self, activity_id: i64) -> Result<Lap, StoreError> {
        let mut data = self.data.lock().await;
        if !data
            .activities
            .iter()
            .any(|activity| activity.id == activity_id)
        {
            return Err(StoreError::NotFound("Activity not found"));
        }

        data.next_lap_id += 1;
        let lap = Lap {
            id: data.next_lap_id,
            activity_id,
            recorded_at: now_timestamp(),
        };
        data.laps.push(lap.clone());
        self.persist(&data).await?;

        Ok(lap)
    }

    /// The activity plus its laps, most recent first. Timestamps have
    /// whole-second granularity, so the id doubles as the secondary sort
    /// key to keep same-second laps in reverse insertion order.
    pub async fn list_laps(&self, activity_id: i64) -> Result<(Activity, Vec<Lap>), StoreError> {
        let data = self.data.lock().await;
        let activity = data
            .activities
            .iter()
            .find(|activity| activity.id == activity_id)
            .cloned()
            .ok_or(StoreError::NotFound("Activity not found"))?;

        let mut laps: Vec<Lap> = data
            .laps
            .iter()
            .filter(|lap| lap.activity_id == activity_id)
            .cloned()
            .collect();
        laps.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at).then(b.id.cmp(&a.id)));

        Ok((activity, laps))
    }

    /// Deletion is scoped to the owner: a lap id that exists under another
    /// activity reports NotFound and changes nothing.
    pub async fn delete_lap(&self, activity_id: i64, lap_id: i64) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        let index = data
            .laps
            .iter()
            .position(|lap| lap.id == lap_id && lap.activity_id == activity_id)
            .ok_or(StoreError::NotFound("Lap not found"))?;

        data.laps.remove(index);
        self.persist(&data).await?;

        Ok(())
    }

    async fn persist(&self, data: &AppData) -> Result<(), StoreError> {
        match &self.data_path {
            Some(path) => persist_data(path, data).await,
            None => Ok(()),
        }
    }
}

/// UTC wall-clock at whole-second granularity, no timezone marker.
/// Clients interpret these as UTC.
fn now_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
