//! Fluent builder for `ContentOptions`
//!
//! Every field has a usable default, so unlike a typestate builder there are
//! no required steps; validation happens once in `build()`.

use crate::errors::ContentResult;

use super::types::ContentOptions;

#[derive(Debug, Clone, Default)]
pub struct ContentOptionsBuilder {
    pub(crate) options: ContentOptions,
}

impl ContentOptions {
    /// Create a builder for configuring `ContentOptions` with a fluent interface
    #[must_use]
    pub fn builder() -> ContentOptionsBuilder {
        ContentOptionsBuilder::default()
    }
}

impl ContentOptionsBuilder {
    #[must_use]
    pub fn preview_max_chars(mut self, max_chars: usize) -> Self {
        self.options.preview_max_chars = max_chars;
        self
    }

    /// Set the inclusive range of heading levels listed in the TOC
    #[must_use]
    pub fn heading_levels(mut self, min: u8, max: u8) -> Self {
        self.options.min_heading_level = min;
        self.options.max_heading_level = max;
        self
    }

    #[must_use]
    pub fn max_input_bytes(mut self, max_bytes: usize) -> Self {
        self.options.max_input_bytes = max_bytes;
        self
    }

    /// Replace the bionic skip list
    #[must_use]
    pub fn bionic_skip_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.bionic_skip_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Add one element to the bionic skip list
    #[must_use]
    pub fn skip_bionic_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.options.is_bionic_skip_tag(&tag) {
            self.options.bionic_skip_tags.push(tag);
        }
        self
    }

    #[must_use]
    pub fn bold_tag(mut self, tag: impl Into<String>) -> Self {
        self.options.bold_tag = tag.into();
        self
    }

    /// Validate and return the options
    ///
    /// # Errors
    ///
    /// Returns an error if any option is outside its accepted range
    /// (see [`ContentOptions::validate`]).
    pub fn build(self) -> ContentResult<ContentOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
