use thiserror::Error;
use vmagent_contracts::ContractError;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("payload does not match the expected contract: {0}")]
    Contract(#[from] ContractError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("no usable protocol endpoint: {0}")]
    NotFound(String),
    #[error("operation '{0}' is not supported by this protocol")]
    Unsupported(&'static str),
}
