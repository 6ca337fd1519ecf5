use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalystError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Product not found: {0}")]
    MissingProduct(String),

    #[error("Malformed product data: {0}")]
    MalformedData(String),

    #[error("No barcode detected in image")]
    NoBarcodeDetected,

    #[error("Invalid barcode format: '{0}' (expected 8-13 digits)")]
    InvalidFormat(String),

    #[error("Decoder '{decoder}' failed: {message}")]
    Decoder { decoder: String, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl AnalystError {
    /// Failures the user can act on (re-scan, type the code, try another product).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalystError::MissingProduct(_)
                | AnalystError::MalformedData(_)
                | AnalystError::NoBarcodeDetected
                | AnalystError::InvalidFormat(_)
        )
    }

    /// Next step to suggest for a recoverable failure.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AnalystError::MissingProduct(_) => {
                Some("Product not found in database. Try another barcode.")
            }
            AnalystError::MalformedData(_) => {
                Some("The database entry for this product is unreadable. Try a different product.")
            }
            AnalystError::NoBarcodeDetected => {
                Some("Try again with a clearer image or enter the barcode manually.")
            }
            AnalystError::InvalidFormat(_) => {
                Some("Enter the 8-13 digits printed under the barcode.")
            }
            _ => None,
        }
    }
}

impl From<ureq::Error> for AnalystError {
    fn from(err: ureq::Error) -> Self {
        AnalystError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalystError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        assert!(AnalystError::MissingProduct("123".to_string()).is_recoverable());
        assert!(AnalystError::NoBarcodeDetected.is_recoverable());
        assert!(AnalystError::InvalidFormat("abc".to_string()).is_recoverable());
        assert!(!AnalystError::InvalidInput("negative sugar".to_string()).is_recoverable());
        assert!(!AnalystError::Http("timeout".to_string()).is_recoverable());
    }

    #[test]
    fn test_hint_only_for_recoverable() {
        assert!(AnalystError::NoBarcodeDetected.hint().is_some());
        assert!(AnalystError::Logging("x".to_string()).hint().is_none());
    }
}
