use derive_more::{AsRef, Deref, Display};

pub const MAX_NAME_LENGTH: usize = 100;

#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > MAX_NAME_LENGTH {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Cuts the name down to the maximum length instead of rejecting it.
    pub fn truncated(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();
        match trimmed_name.char_indices().nth(MAX_NAME_LENGTH) {
            Some((end, _)) => Name::new(&trimmed_name[..end]),
            None => Name::new(trimmed_name),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Name::new(&name).map_err(serde::de::Error::custom)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 100 characters or fewer ({0} > 100)")]
    TooLong(usize),
}
