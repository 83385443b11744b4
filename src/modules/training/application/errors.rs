use thiserror::Error;

use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            ApplicationError::Domain(error) => Some(error),
            ApplicationError::Store(_) => None,
        }
    }
}
