pub mod survey;
pub mod waitlist;

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::app_error::AppResult;

const MAX_JSON_LOG_LEN: usize = 200;

/// Flat-file persistence: one pretty-printed JSON array per record type,
/// read whole and rewritten whole on every write.
#[derive(Clone, Debug)]
pub struct JsonFilePersistence {
    waitlist_path: PathBuf,
    survey_path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(waitlist_path: impl Into<PathBuf>, survey_path: impl Into<PathBuf>) -> Self {
        Self {
            waitlist_path: waitlist_path.into(),
            survey_path: survey_path.into(),
        }
    }

    pub fn waitlist_path(&self) -> &Path {
        &self.waitlist_path
    }

    pub fn survey_path(&self) -> &Path {
        &self.survey_path
    }
}

/// Read the JSON array stored at `path`, element by element.
///
/// Elements are kept as raw JSON whatever their shape, so one odd record never
/// hides the rest. A missing file is the normal "nothing stored yet" state and
/// is not logged. Unreadable files, invalid JSON and a top level that is not
/// an array are logged and read as empty, so the next write replaces them.
pub async fn read_array(path: &Path) -> Vec<Value> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read data file, treating as empty");
            return Vec::new();
        }
    };

    let problem = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => return items,
        Ok(_) => "top level is not an array".to_string(),
        Err(err) => err.to_string(),
    };

    // Truncate raw JSON to prevent log bloat from large files
    let truncated: String = raw.chars().take(MAX_JSON_LOG_LEN).collect();
    tracing::warn!(
        path = %path.display(),
        error = %problem,
        raw = %truncated,
        "failed to parse data file, treating as empty"
    );
    Vec::new()
}

/// Serialize `items` as a 2-space indented JSON array and overwrite `path`.
pub async fn write_array(path: &Path, items: &[Value]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(items)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
