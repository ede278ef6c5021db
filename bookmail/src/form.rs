use crate::error::ValidationError;

/// Raw text of the contact form inputs, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub user_name: String,
    pub user_phone: String,
    pub user_email: String,
    pub book_name: String,
    pub book_quantity: String,
    pub message: String,
}

impl FormFields {
    pub fn is_empty(&self) -> bool {
        *self == FormFields::default()
    }

    pub fn to_submission(&self) -> Submission {
        Submission {
            name: non_empty(&self.user_name),
            phone: non_empty(&self.user_phone),
            email: non_empty(&self.user_email),
            book_name: non_empty(&self.book_name),
            book_quantity: numeric(&self.book_quantity),
            message: non_empty(&self.message),
        }
    }
}

/// One attempt to send the contact/order form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub book_name: Option<String>,
    pub book_quantity: Option<String>,
    pub message: Option<String>,
}

impl Submission {
    pub fn has_contact(&self) -> bool {
        self.phone.is_some() || self.email.is_some()
    }

    /// Contact is checked before the book name, the first failing rule
    /// is returned.
    pub fn validate(self) -> Result<ValidSubmission, ValidationError> {
        if !self.has_contact() {
            return Err(ValidationError::MissingContact);
        }
        if self.book_name.is_none() {
            return Err(ValidationError::MissingBookName);
        }
        Ok(ValidSubmission { inner: self })
    }
}

/// A submission that passed [`Submission::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    inner: Submission,
}

impl ValidSubmission {
    pub fn submission(&self) -> &Submission {
        &self.inner
    }

    pub fn book_name(&self) -> &str {
        self.inner.book_name.as_deref().unwrap_or_default()
    }
}

// blank input counts as absent, anything else is kept as typed
fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// a number input reports an empty value for text it cannot parse
fn numeric(value: &str) -> Option<String> {
    let value = value.trim();
    value
        .parse::<f64>()
        .ok()
        .filter(|quantity| quantity.is_finite())
        .map(|_| value.to_string())
}
