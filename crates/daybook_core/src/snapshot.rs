//! Versioned snapshot export and import.
//!
//! # Responsibility
//! - Serialize the full task/note state to a portable JSON snapshot.
//! - Replace the collections wholesale on import.
//!
//! # Invariants
//! - Import is all-or-nothing: malformed input leaves existing state
//!   untouched and is reported as an error.

use crate::model::note::Note;
use crate::model::task::Task;
use crate::repo::note_repo::NoteRepository;
use crate::repo::task_repo::TaskRepository;
use crate::store::BlobStore;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Snapshot format version written by [`export_snapshot`].
pub const SNAPSHOT_VERSION: u32 = 1;

/// Full-state snapshot envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
}

/// Import/export failure.
#[derive(Debug)]
pub enum SnapshotError {
    /// Input is unparseable or `tasks`/`notes` are not present as sequences.
    Parse(serde_json::Error),
    /// Snapshot was written by a newer format than this build supports.
    UnsupportedVersion { found: u32, supported: u32 },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid snapshot: {err}"),
            Self::UnsupportedVersion { found, supported } => write!(
                f,
                "snapshot version {found} is newer than supported {supported}"
            ),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Serializes the full state to pretty-printed snapshot JSON.
pub fn export_snapshot<S: BlobStore, N: BlobStore>(
    tasks: &TaskRepository<'_, S>,
    notes: &NoteRepository<'_, N>,
) -> Result<String, SnapshotError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        exported_at: Utc::now(),
        tasks: tasks.all().to_vec(),
        notes: notes.all().to_vec(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    info!(
        "event=snapshot_export module=snapshot status=ok tasks={} notes={}",
        snapshot.tasks.len(),
        snapshot.notes.len()
    );
    Ok(json)
}

/// Parses `json` and replaces both collections wholesale.
///
/// On any error the repositories are left exactly as they were.
pub fn import_snapshot<S: BlobStore, N: BlobStore>(
    json: &str,
    tasks: &mut TaskRepository<'_, S>,
    notes: &mut NoteRepository<'_, N>,
) -> Result<(), SnapshotError> {
    let snapshot: Snapshot = match serde_json::from_str(json) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("event=snapshot_import module=snapshot status=error error={err}");
            return Err(err.into());
        }
    };

    if snapshot.version > SNAPSHOT_VERSION {
        warn!(
            "event=snapshot_import module=snapshot status=error reason=unsupported_version found={}",
            snapshot.version
        );
        return Err(SnapshotError::UnsupportedVersion {
            found: snapshot.version,
            supported: SNAPSHOT_VERSION,
        });
    }

    info!(
        "event=snapshot_import module=snapshot status=ok tasks={} notes={}",
        snapshot.tasks.len(),
        snapshot.notes.len()
    );
    tasks.replace_all(snapshot.tasks);
    notes.replace_all(snapshot.notes);
    Ok(())
}
