/// Loading the event set from YAML or JSON files.
///
/// Both formats share one shape:
///
/// ```yaml
/// events:
///   - 2024-02-05
///   - 2024-02-12
/// ```
use crate::event_index::EventIndex;
use crate::exceptions::CalendarError;
use crate::models::{CalendarDay, FromJson, FromYaml};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct EventFile {
    events: Vec<CalendarDay>,
}

fn read_file(file_path: &str) -> Result<String, CalendarError> {
    fs::read_to_string(file_path).map_err(|e| CalendarError::EventFile {
        path: file_path.to_string(),
        reason: e.to_string(),
    })
}

fn into_index(file_path: &str, file: EventFile) -> EventIndex {
    let raw_count = file.events.len();
    let index = EventIndex::new(file.events);
    log::info!(
        "Loaded {} event days from {} ({} duplicates dropped)",
        index.len(),
        file_path,
        raw_count - index.len()
    );
    index
}

impl FromYaml for EventIndex {
    type Error = CalendarError;
    fn from_yaml(file_path: &str) -> Result<Self, CalendarError> {
        let contents = read_file(file_path)?;
        let file: EventFile =
            serde_norway::from_str(&contents).map_err(|e| CalendarError::EventFile {
                path: file_path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(into_index(file_path, file))
    }
}

impl FromJson for EventIndex {
    type Error = CalendarError;
    fn from_json(file_path: &str) -> Result<Self, CalendarError> {
        let contents = read_file(file_path)?;
        let file: EventFile =
            serde_json::from_str(&contents).map_err(|e| CalendarError::EventFile {
                path: file_path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(into_index(file_path, file))
    }
}

/// Load an event file, picking the parser from the file extension
pub fn load_event_file(file_path: &str) -> Result<EventIndex, CalendarError> {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("yaml") | Some("yml") => EventIndex::from_yaml(file_path),
        Some("json") => EventIndex::from_json(file_path),
        _ => Err(CalendarError::EventFile {
            path: file_path.to_string(),
            reason: "expected a .yaml, .yml or .json file".to_string(),
        }),
    }
}
