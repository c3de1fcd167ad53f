//! Configuration settings for a parse session.
//!
//! Configuration can be loaded from environment variables or constructed
//! programmatically.

use std::env;

use html::BuilderOptions;

/// Runtime configuration for the parse pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Treat tokenizer diagnostics as fatal instead of recording them
    pub strict_tokenizer: bool,
    /// Tag name whose text content is parsed as a style block when it closes
    pub style_tag: String,
    /// Maximum number of diagnostics kept in the parse report
    pub max_diagnostics: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strict_tokenizer: false,
            style_tag: "style".to_owned(),
            max_diagnostics: 256,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `TRELLIS_STRICT_TOKENIZER`: Set to "1" to make tokenizer diagnostics fatal
    /// - `TRELLIS_STYLE_TAG`: Style-carrying tag name (default: `style`)
    /// - `TRELLIS_MAX_DIAGNOSTICS`: Diagnostics kept in the report (default: 256)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source, falling back to
    /// the defaults for missing or malformed values.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let strict_tokenizer = var("TRELLIS_STRICT_TOKENIZER").as_deref() == Some("1");
        let style_tag = var("TRELLIS_STYLE_TAG")
            .map(|tag| tag.trim().to_ascii_lowercase())
            .filter(|tag| !tag.is_empty())
            .unwrap_or(defaults.style_tag);
        let max_diagnostics = var("TRELLIS_MAX_DIAGNOSTICS")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(defaults.max_diagnostics);
        Self {
            strict_tokenizer,
            style_tag,
            max_diagnostics,
        }
    }

    /// Tree-builder switches derived from this configuration.
    #[inline]
    pub const fn builder_options(&self) -> BuilderOptions {
        BuilderOptions {
            strict: self.strict_tokenizer,
            max_diagnostics: self.max_diagnostics,
        }
    }
}
