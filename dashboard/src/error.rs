use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse snapshot {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Snapshot {path:?} is unusable: {reason}")]
    Schema { path: PathBuf, reason: String },
}
