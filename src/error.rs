use thiserror::Error;

use crate::access::{Role, Section};

#[derive(Debug, Error)]
pub enum CateringError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with this email already exists: {0}")]
    DuplicateEmail(String),

    #[error("Sign in required")]
    Unauthenticated,

    #[error("{role} may not open {section}; try {redirect}")]
    Forbidden {
        role: Role,
        section: Section,
        redirect: Section,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CateringError>;
