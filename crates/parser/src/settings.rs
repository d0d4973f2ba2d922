use vocalift_domain::{Reps, Weight};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Applied when a weight was spoken without repetitions.
    pub default_reps: Reps,
    pub default_weight: Weight,
    pub separators: Vec<char>,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings = serde_json::from_str::<Settings>(json)?;

        if settings.separators.is_empty() {
            return Err(SettingsError::NoSeparators);
        }

        if settings
            .separators
            .iter()
            .any(|c| c.is_ascii_digit() || c.is_alphabetic())
        {
            return Err(SettingsError::InvalidSeparator);
        }

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_reps: Reps::new(10).unwrap_or_default(),
            default_weight: Weight::default(),
            separators: vec!['.', '!', '?', ';', '\n'],
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("at least one segment separator is required")]
    NoSeparators,
    #[error("letters and digits cannot be used as segment separators")]
    InvalidSeparator,
}
