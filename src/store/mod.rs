//! Snapshot persistence for the association graph.
//!
//! The registry core does not define a wire format of its own; this module
//! is the collaborator that serializes the whole [`Association`] object
//! graph - both event collections, every member record and every participant
//! set - to a single JSON snapshot file and back, losslessly.
//!
//! The module includes:
//! - `snapshot`: save/load of the full graph with an embedded checksum
//! - `checksum`: SHA-256 content hashing
//! - `config`: TOML configuration for the snapshot location
//! - `error`: error type shared by the above
//!
//! [`Association`]: crate::registry::Association

pub mod checksum;
pub mod config;
pub mod error;
pub mod snapshot;

pub use checksum::calculate_checksum;
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use snapshot::{load, save};
