use thiserror::Error;

/// The central error type for circq.
///
/// Empty-container access is never an error; the queue and stack report it
/// through `Option`. These variants cover rejected input and bad setup.
#[derive(Error, Debug)]
pub enum CircqError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CircqError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_INVALID_ARGUMENT: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<CircqError>() {
        Some(CircqError::Config(_)) => EXIT_CONFIG_ERROR,
        Some(CircqError::InvalidArgument(_)) => EXIT_INVALID_ARGUMENT,
        Some(_) => EXIT_ERROR,
        None => {
            // Context-wrapped config failures from Config::load
            if e.chain()
                .any(|cause| cause.to_string().to_lowercase().contains("config"))
            {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_ERROR
            }
        }
    }
}
