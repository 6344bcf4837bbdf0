use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read alignment record: {0}")]
    Source(#[source] std::io::Error),

    #[error("Failed to write histogram output: {0}")]
    Output(#[source] std::io::Error),
}
