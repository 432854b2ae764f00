use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IntegrationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String)
}

impl IntegrationError {
    pub fn non_positive_subdivisions(name: &str) -> IntegrationError {
        IntegrationError::InvalidArgument(format!("{} must be strictly positive", name))
    }

    pub fn odd_subdivisions(n: usize) -> IntegrationError {
        IntegrationError::InvalidArgument(format!("n must be even for Simpson's rule, got {}", n))
    }
}

/// Rejects an empty partition. `name` is only used for the message.
pub fn check_positive(name: &str, n: usize) -> Result<(), IntegrationError> {
    if n == 0 {
        log::debug!("rejecting {} = 0", name);
        return Err(IntegrationError::non_positive_subdivisions(name));
    }
    Ok(())
}
