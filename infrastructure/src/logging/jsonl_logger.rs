//! Append-only JSONL sink for [`GenerationEvent`]s.

use chrono::{DateTime, SecondsFormat, Utc};
use imagine_application::{GenerationEvent, GenerationEventLogger};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// One line of the log: the event's own fields plus a timestamp.
#[derive(Serialize)]
struct EventLine<'a> {
    #[serde(serialize_with = "rfc3339_millis")]
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    event: &'a GenerationEvent,
}

fn rfc3339_millis<S: serde::Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Appends one JSON object per event to a file shared by all sessions.
///
/// Each line is written with a single unbuffered `write_all`, so the file
/// holds whole lines even if the process is killed between events.
pub struct JsonlGenerationLogger {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlGenerationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(event: &GenerationEvent) -> serde_json::Result<Vec<u8>> {
        let mut line = serde_json::to_vec(&EventLine {
            timestamp: Utc::now(),
            event,
        })?;
        line.push(b'\n');
        Ok(line)
    }
}

impl GenerationEventLogger for JsonlGenerationLogger {
    fn log(&self, event: &GenerationEvent) {
        let line = match Self::encode(event) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not encode generation event: {}", e);
                return;
            }
        };

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = file.write_all(&line) {
            warn!("Could not append to {}: {}", self.path.display(), e);
        }
    }
}
