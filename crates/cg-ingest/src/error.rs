use thiserror::Error;

/// Unrecoverable ingestion failures.  A malformed record is *not* an error:
/// it is skipped with a warning and counted in the report.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] cg_core::CoreError),
}

pub type IngestResult<T> = Result<T, IngestError>;
