#[derive(Debug, thiserror::Error)]
pub enum MedicineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("medicine not found: {0}")]
    NotFound(String),
    #[error("store query failed: {0}")]
    Store(String),
    #[error(
        "failed to read medicine data (path: {path}): {source}",
        path = path.display()
    )]
    DataLoad {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to deserialize medicine data: {0}")]
    Deserialization(serde_json::Error),
}

pub type MedicineResult<T> = std::result::Result<T, MedicineError>;
