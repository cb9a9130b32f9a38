use thiserror::Error;

/// Errors originating from the core types and the quantization pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Degenerate input: zero-size image, zero target width, bad pixel buffer.
    #[error("Entrée invalide : {0}")]
    InvalidInput(String),

    /// Out-of-domain configuration value (negative brightness, NaN contrast, ...).
    #[error("Configuration invalide : {0}")]
    InvalidConfiguration(String),

    /// Font name not known to the text renderer.
    #[error("Police inconnue : {name}")]
    UnknownFont {
        /// Requested font name.
        name: String,
    },

    /// Failure reported by the text rendering backend.
    #[error("Rendu texte impossible : {0}")]
    Render(String),
}

impl CoreError {
    /// Shorthand used by the dimension checks.
    ///
    /// # Example
    /// ```
    /// use ag_core::CoreError;
    /// let err = CoreError::invalid_dimensions(0, 10);
    /// assert!(matches!(err, CoreError::InvalidInput(_)));
    /// assert!(err.to_string().contains("0×10"));
    /// ```
    #[must_use]
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidInput(format!("dimensions invalides {width}×{height}"))
    }
}
