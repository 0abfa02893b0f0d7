use shared::error::InvalidSchemeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("invalid classification scheme: {0}")]
    InvalidScheme(#[from] InvalidSchemeError),
    #[error("layer view is already attached")]
    LayerViewAlreadyAttached,
    #[error("layer view failed to load: {0:#}")]
    LayerViewLoad(anyhow::Error),
}
