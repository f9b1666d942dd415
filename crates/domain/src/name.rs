use derive_more::{AsRef, Display};

/// Display label of an exercise, person or plan.
///
/// Runs of whitespace are collapsed into a single space.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MAX_LEN: usize = 64;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ");

        match normalized.chars().count() {
            0 => Err(NameError::Empty),
            len if len > Self::MAX_LEN => Err(NameError::TooLong(len)),
            _ => Ok(Self(normalized)),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
