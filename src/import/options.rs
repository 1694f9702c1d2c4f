//! Import settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::util::Result;

/// Settings for one import run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Display name of the created mode.
    pub mode_display_name: String,
    /// Animator parameter carrying the left hand gesture.
    pub left_parameter: String,
    /// Animator parameter carrying the right hand gesture.
    pub right_parameter: String,
    /// Save the menu as a copy instead of overwriting it.
    pub save_as_copy: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            mode_display_name: "FX".to_string(),
            left_parameter: "GestureLeft".to_string(),
            right_parameter: "GestureRight".to_string(),
            save_as_copy: false,
        }
    }
}

impl ImportOptions {
    /// Load options from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ImportOptions::default();
        assert_eq!(options.mode_display_name, "FX");
        assert_eq!(options.left_parameter, "GestureLeft");
        assert_eq!(options.right_parameter, "GestureRight");
        assert!(!options.save_as_copy);
    }

    #[test]
    fn test_partial_json() {
        let options: ImportOptions = serde_json::from_str(r#"{"mode_display_name": "Face"}"#).unwrap();
        assert_eq!(options.mode_display_name, "Face");
        assert_eq!(options.left_parameter, "GestureLeft");
    }

    #[test]
    fn test_load_file() -> crate::util::Result<()> {
        let temp = tempfile::NamedTempFile::new()?;
        std::fs::write(temp.path(), r#"{"save_as_copy": true}"#)?;
        let options = ImportOptions::load(temp.path())?;
        assert!(options.save_as_copy);
        assert_eq!(options.mode_display_name, "FX");
        Ok(())
    }
}
