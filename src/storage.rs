use crate::models::AppData;
use crate::store::StoreError;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/activities.json")
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => normalize(data),
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), StoreError> {
    let payload =
        serde_json::to_vec_pretty(data).map_err(|err| StoreError::Persistence(err.to_string()))?;
    fs::write(path, payload)
        .await
        .map_err(|err| StoreError::Persistence(err.to_string()))?;
    Ok(())
}

/// A hand-edited snapshot can have counters behind the stored ids; bump
/// them so fresh ids stay monotonic.
fn normalize(mut data: AppData) -> AppData {
    let max_activity_id = data
        .activities
        .iter()
        .map(|activity| activity.id)
        .max()
        .unwrap_or(0);
    let max_lap_id = data.laps.iter().map(|lap| lap.id).max().unwrap_or(0);
    data.next_activity_id = data.next_activity_id.max(max_activity_id);
    data.next_lap_id = data.next_lap_id.max(max_lap_id);
    data
}
