use bookmail::{DeliveryError, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Validation(ValidationError),
    Delivery(DeliveryError),
    AlreadySubmitting,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::Validation(err) => write!(f, "{}", err),
            FormError::Delivery(err) => {
                write!(f, "Failed to send email: {}", err.text())
            }
            FormError::AlreadySubmitting => {
                write!(f, "A submission is already in progress")
            }
        }
    }
}

impl std::error::Error for FormError {}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        FormError::Validation(err)
    }
}

impl From<DeliveryError> for FormError {
    fn from(err: DeliveryError) -> Self {
        FormError::Delivery(err)
    }
}
