//! Layout and output settings
//!
//! Every field has a default, so a settings file only needs the values it changes:
//!
//! ```toml
//! default_count = 20
//! output_dir = "out"
//!
//! [page]
//! width = 215.9
//! height = 279.4
//! margin = 12.7
//!
//! [fonts]
//! fallback_pt = 6.5
//! breakpoints = [
//!     { max_dimension = 3, size_pt = 12.0 },
//!     { max_dimension = 4, size_pt = 10.0 },
//! ]
//! ```

use crate::generator::{MAX_CARDS, MIN_CARDS};
use crate::layout::{DEFAULT_CELL_PADDING, FontSizeTable, PageGeometry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or validating a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Page, typography and output settings shared by both renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physical page size and margin, in millimetres
    pub page: PageGeometry,
    /// Space reserved for the card title between the top margin and the grid
    pub title_band: f32,
    /// Horizontal padding inside each cell
    pub cell_padding: f32,
    /// Cell font sizes by grid rank
    pub fonts: FontSizeTable,
    pub title_font_pt: f32,
    pub caption_font_pt: f32,
    /// Card count used when none is requested
    pub default_count: usize,
    pub output_dir: PathBuf,
    /// Ask the browser to open its print dialog when the print view loads
    pub auto_print: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page: PageGeometry::A4,
            title_band: 10.0,
            cell_padding: DEFAULT_CELL_PADDING,
            fonts: FontSizeTable::default(),
            title_font_pt: 16.0,
            caption_font_pt: 8.0,
            default_count: 10,
            output_dir: PathBuf::from("."),
            auto_print: false,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML,
    /// or describes an unusable page.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from `path` if given, defaults otherwise
    ///
    /// # Errors
    /// See [`Settings::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Parse settings from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed TOML and
    /// `ConfigError::Invalid` if validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Distance from the page (or slot) top to the top of the grid
    #[must_use]
    pub fn grid_top(&self) -> f32 {
        self.page.margin + self.title_band
    }

    /// Check that the page leaves room for a grid
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let page = &self.page;
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if page.width <= 0.0 || page.height <= 0.0 {
            return invalid(format!(
                "page size must be positive, got {}x{}mm",
                page.width, page.height
            ));
        }
        if page.margin < 0.0 || self.title_band < 0.0 || self.cell_padding < 0.0 {
            return invalid("margins and padding cannot be negative".to_string());
        }
        if page.content_width() <= 0.0 {
            return invalid(format!(
                "margin {}mm leaves no room on a {}mm wide page",
                page.margin, page.width
            ));
        }
        // Compact mode halves the page height, so the grid must fit in half a page
        if self.grid_top() + page.margin >= page.height / 2.0 {
            return invalid(format!(
                "margins and title band leave no room for a grid on half of a {}mm page",
                page.height
            ));
        }
        if self.title_font_pt <= 0.0
            || self.caption_font_pt <= 0.0
            || self.fonts.fallback_pt <= 0.0
            || self.fonts.breakpoints.iter().any(|bp| bp.size_pt <= 0.0)
        {
            return invalid("font sizes must be positive".to_string());
        }
        if !(MIN_CARDS..=MAX_CARDS).contains(&self.default_count) {
            return invalid(format!(
                "default_count must be between {MIN_CARDS} and {MAX_CARDS}, got {}",
                self.default_count
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!((settings.grid_top() - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let settings = Settings::from_toml_str(
            r#"
            default_count = 20
            output_dir = "out"

            [page]
            width = 215.9
            height = 279.4
            "#,
        )
        .unwrap();

        assert_eq!(settings.default_count, 20);
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert!((settings.page.width - 215.9).abs() < 1e-4);
        // Unspecified fields keep their defaults
        assert!((settings.page.margin - 15.0).abs() < f32::EPSILON);
        assert_eq!(settings.fonts, FontSizeTable::default());
    }

    #[test]
    fn font_table_from_toml() {
        let settings = Settings::from_toml_str(
            r"
            [fonts]
            fallback_pt = 6.5
            breakpoints = [{ max_dimension = 4, size_pt = 10.0 }]
            ",
        )
        .unwrap();
        assert_eq!(settings.fonts.breakpoints.len(), 1);
        assert!((settings.fonts.fallback_pt - 6.5).abs() < f32::EPSILON);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Settings::from_toml_str("page = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn oversized_margin_is_rejected() {
        let err = Settings::from_toml_str("[page]\nmargin = 120.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn non_positive_font_sizes_are_rejected() {
        for toml in [
            "title_font_pt = 0.0",
            "caption_font_pt = -4.0",
            "[fonts]\nfallback_pt = 0.0",
        ] {
            assert!(
                matches!(Settings::from_toml_str(toml), Err(ConfigError::Invalid(_))),
                "accepted {toml}"
            );
        }
    }

    #[test]
    fn out_of_range_default_count_is_rejected() {
        assert!(matches!(
            Settings::from_toml_str("default_count = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "auto_print = true").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.auto_print);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Settings::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }
}
