use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Bin key {0} is not representable as a 64-bit float")]
    NonNumericKey(String),
}
