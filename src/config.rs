use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const EEG_FIELDS_KEY: &str = "eegFields";

const EPOC_CHANNELS: [&str; 14] = [
    "AF3", "F7", "F3", "FC5", "T7", "P7", "O1", "O2", "P8", "T8", "FC6", "F4", "F8", "AF4",
];

/// Headset settings the EEG tables are filtered with.
///
/// Read from the `emotiv` JSON document; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmotivConfig {
    #[serde(rename = "eegFields")]
    pub eeg_fields: Vec<String>,
}

impl Default for EmotivConfig {
    fn default() -> Self {
        Self {
            eeg_fields: EPOC_CHANNELS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl EmotivConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        match key {
            EEG_FIELDS_KEY => Some(self.eeg_fields.as_slice()),
            _ => None,
        }
    }
}
