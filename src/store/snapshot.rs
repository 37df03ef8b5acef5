//! Whole-graph snapshot save/load.
//!
//! A snapshot file is a small JSON wrapper: the association graph serialized
//! to a JSON string, plus the SHA-256 checksum of exactly that string. The
//! checksum is verified before the graph is deserialized, so a truncated or
//! hand-edited file is rejected instead of half-loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::checksum::calculate_checksum;
use super::error::{StoreError, StoreResult};
use crate::registry::Association;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    checksum: String,
    /// The association graph, serialized as an embedded JSON document so the
    /// checksum covers byte-identical content on both save and load.
    data: String,
}

/// Serialize the whole association graph and write it to `path`.
///
/// The parent directory must exist; the file is created or truncated.
pub fn save(association: &Association, path: &Path) -> StoreResult<()> {
    let data = serde_json::to_string(association).map_err(StoreError::Serialize)?;
    let snapshot = SnapshotFile {
        checksum: calculate_checksum(&data),
        data,
    };

    let content = serde_json::to_string_pretty(&snapshot).map_err(StoreError::Serialize)?;
    fs::write(path, content)?;

    log::info!(
        "Saved association snapshot to {} ({} events, {} members)",
        path.display(),
        association.events().len(),
        association.members().len()
    );
    Ok(())
}

/// Read a snapshot file, verify its checksum, and deserialize the graph.
pub fn load(path: &Path) -> StoreResult<Association> {
    let content = fs::read_to_string(path)?;
    let snapshot: SnapshotFile = serde_json::from_str(&content).map_err(StoreError::Parse)?;

    let computed = calculate_checksum(&snapshot.data);
    if computed != snapshot.checksum {
        return Err(StoreError::ChecksumMismatch {
            recorded: snapshot.checksum,
            computed,
        });
    }

    let association: Association =
        serde_json::from_str(&snapshot.data).map_err(StoreError::Parse)?;

    log::info!(
        "Loaded association snapshot from {} ({} events, {} members)",
        path.display(),
        association.events().len(),
        association.members().len()
    );
    Ok(association)
}
