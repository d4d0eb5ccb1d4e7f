//! Error types for font construction, layout and rendering

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Invalid input detected while building font metrics
///
/// These are only ever raised at construction time (or when the default
/// character is changed), never while laying out text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The same character appears twice in the glyph list
    #[error("Duplicate glyph for character {0:?}")]
    DuplicateGlyph(char),

    /// A glyph or kerning id is not a valid Unicode scalar value
    #[error("Code point {0:#x} is not a valid character")]
    InvalidCodePoint(u32),

    /// The configured default character has no glyph in the font
    #[error("Default character {0:?} does not exist in the font")]
    MissingDefaultCharacter(char),
}

/// Errors that can occur during font operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FontError {
    /// Font metrics could not be built from the supplied description
    #[error("Invalid font configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Text contains a character with no glyph and no usable fallback
    #[error("Text contains character {0:?} that cannot be resolved by this font")]
    UnresolvedCharacter(char),

    /// A public entry point received an unusable argument
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

impl FontError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised while drawing text through a [`GlyphRenderer`](crate::render::GlyphRenderer)
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Layout failed before anything was handed to the backend
    #[error(transparent)]
    Font(#[from] FontError),

    /// The rendering backend rejected a draw command
    #[error("Rendering backend error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}
