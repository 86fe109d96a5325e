use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("Host API rejected the call: {api} - {message}")]
    Rejected { api: String, message: String },

    #[error("Invalid call parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
