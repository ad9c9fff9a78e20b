//! Validation and loading for `ContentOptions`

use std::path::Path;

use crate::errors::{ContentError, ContentResult};

use super::types::ContentOptions;

impl ContentOptions {
    /// Check every option against its accepted range
    ///
    /// # Errors
    ///
    /// - `InvalidHeadingRange` unless `1 <= min_heading_level <= max_heading_level <= 6`
    /// - `InvalidOptions` for a zero preview length or input limit, or a bold
    ///   tag that is not a plain ASCII element name
    pub fn validate(&self) -> ContentResult<()> {
        let (min, max) = (self.min_heading_level, self.max_heading_level);
        if min == 0 || max > 6 || min > max {
            return Err(ContentError::InvalidHeadingRange { min, max });
        }

        if self.preview_max_chars == 0 {
            return Err(ContentError::InvalidOptions(
                "previewMaxChars must be greater than zero".to_string(),
            ));
        }

        if self.max_input_bytes == 0 {
            return Err(ContentError::InvalidOptions(
                "maxInputBytes must be greater than zero".to_string(),
            ));
        }

        let tag = self.bold_tag.as_str();
        if tag.is_empty()
            || !tag.starts_with(|c: char| c.is_ascii_alphabetic())
            || !tag.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ContentError::InvalidOptions(format!(
                "boldTag '{tag}' is not a valid element name"
            )));
        }

        Ok(())
    }

    /// Parse options from JSON, filling omitted fields with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the options are invalid.
    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or holds
    /// invalid options.
    pub fn from_json_file(path: impl AsRef<Path>) -> ContentResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }
}
