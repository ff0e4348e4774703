//! Error types for Signature Studio

use thiserror::Error;

/// Main error type for signature generation and export
#[derive(Error, Debug)]
pub enum SignatureError {
    /// Contact record failed validation (empty or missing field)
    #[error("Invalid contact record: {0}")]
    InvalidContact(String),

    /// Contact file could not be parsed as TOML
    #[error("Contact file error: {0}")]
    ContactFormat(#[from] toml::de::Error),

    /// SVG document could not be parsed
    #[error("SVG error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    /// Rasterization failed (pixmap allocation or pixel transfer)
    #[error("Raster error: {0}")]
    Raster(String),

    /// PNG encoding failed
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SignatureError
pub type SignatureResult<T> = Result<T, SignatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SignatureError::InvalidContact("email is empty".to_string());
        assert_eq!(format!("{}", err), "Invalid contact record: email is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sig_err: SignatureError = io_err.into();
        assert!(matches!(sig_err, SignatureError::Io(_)));
    }
}
