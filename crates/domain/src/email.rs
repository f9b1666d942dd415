use derive_more::{AsRef, Display};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(email: &str) -> Result<Self, EmailError> {
        let trimmed_email = email.trim();

        if trimmed_email.is_empty() {
            return Err(EmailError::Empty);
        }

        match trimmed_email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Email(trimmed_email.to_string()))
            }
            _ => Err(EmailError::Invalid(trimmed_email.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EmailError {
    #[error("Email must not be empty")]
    Empty,
    #[error("Invalid email address: {0}")]
    Invalid(String),
}
