use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::barcode::decoder::{BarcodeDecoder, TesseractDecoder, ZbarDecoder};
use crate::barcode::validation::validate_barcode;
use crate::config::BarcodeConfig;
use crate::error::{AnalystError, Result};

/// Tries decoders in order until one yields a valid barcode.
pub struct BarcodeResolver {
    decoders: Vec<Box<dyn BarcodeDecoder>>,
}

impl BarcodeResolver {
    pub fn new(decoders: Vec<Box<dyn BarcodeDecoder>>) -> Self {
        Self { decoders }
    }

    /// ZBar first, then Tesseract OCR unless the fallback is disabled.
    pub fn from_config(config: &BarcodeConfig) -> Self {
        let mut decoders: Vec<Box<dyn BarcodeDecoder>> =
            vec![Box::new(ZbarDecoder::new(config.zbar_command.clone()))];
        if config.enable_ocr_fallback {
            decoders.push(Box::new(TesseractDecoder::new(
                config.tesseract_command.clone(),
            )));
        }
        Self::new(decoders)
    }

    /// Names of decoders whose capability check passes.
    pub fn available_decoders(&self) -> Vec<&str> {
        self.decoders
            .iter()
            .filter(|d| d.is_available())
            .map(|d| d.name())
            .collect()
    }

    /// Resolve a barcode from an image file.
    ///
    /// Unavailable decoders are skipped and failing ones are logged; the
    /// next decoder is tried in both cases. When none produces a valid code
    /// the result is `NoBarcodeDetected`.
    pub fn resolve(&self, image: &Path) -> Result<String> {
        if !image.is_file() {
            return Err(AnalystError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("image not found: {}", image.display()),
            )));
        }

        for decoder in &self.decoders {
            if !decoder.is_available() {
                debug!(decoder = decoder.name(), "decoder unavailable, skipping");
                continue;
            }

            match decoder.decode(image) {
                Ok(Some(raw)) => match validate_barcode(&raw) {
                    Ok(code) => {
                        info!(decoder = decoder.name(), code = %code, "barcode detected");
                        return Ok(code);
                    }
                    Err(_) => {
                        warn!(
                            decoder = decoder.name(),
                            raw = %raw,
                            "decoded text is not a product barcode"
                        );
                    }
                },
                Ok(None) => debug!(decoder = decoder.name(), "no barcode found"),
                Err(e) => warn!(decoder = decoder.name(), error = %e, "decoder failed"),
            }
        }

        Err(AnalystError::NoBarcodeDetected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::NamedTempFile;

    enum Outcome {
        Found(&'static str),
        Nothing,
        Fails,
    }

    struct FakeDecoder {
        name: &'static str,
        available: bool,
        outcome: Outcome,
        calls: Rc<Cell<u32>>,
    }

    impl FakeDecoder {
        fn boxed(
            name: &'static str,
            available: bool,
            outcome: Outcome,
        ) -> (Box<dyn BarcodeDecoder>, Rc<Cell<u32>>) {
            let calls = Rc::new(Cell::new(0));
            let decoder = FakeDecoder {
                name,
                available,
                outcome,
                calls: Rc::clone(&calls),
            };
            (Box::new(decoder), calls)
        }
    }

    impl BarcodeDecoder for FakeDecoder {
        fn name(&self) -> &str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn decode(&self, _image: &Path) -> Result<Option<String>> {
            self.calls.set(self.calls.get() + 1);
            match self.outcome {
                Outcome::Found(code) => Ok(Some(code.to_string())),
                Outcome::Nothing => Ok(None),
                Outcome::Fails => Err(AnalystError::Decoder {
                    decoder: self.name.to_string(),
                    message: "boom".to_string(),
                }),
            }
        }
    }

    fn image() -> NamedTempFile {
        NamedTempFile::new().unwrap()
    }

    #[test]
    fn test_primary_wins_and_fallback_not_called() {
        let (primary, _) = FakeDecoder::boxed("primary", true, Outcome::Found("5449000000996"));
        let (fallback, fallback_calls) =
            FakeDecoder::boxed("ocr", true, Outcome::Found("12345678"));
        let resolver = BarcodeResolver::new(vec![primary, fallback]);

        let img = image();
        assert_eq!(resolver.resolve(img.path()).unwrap(), "5449000000996");
        assert_eq!(fallback_calls.get(), 0);
    }

    #[test]
    fn test_unavailable_primary_skipped() {
        let (primary, primary_calls) =
            FakeDecoder::boxed("primary", false, Outcome::Found("5449000000996"));
        let (fallback, _) = FakeDecoder::boxed("ocr", true, Outcome::Found("12345678"));
        let resolver = BarcodeResolver::new(vec![primary, fallback]);

        let img = image();
        assert_eq!(resolver.resolve(img.path()).unwrap(), "12345678");
        assert_eq!(primary_calls.get(), 0);
        assert_eq!(resolver.available_decoders(), vec!["ocr"]);
    }

    #[test]
    fn test_failing_primary_falls_back() {
        let (primary, _) = FakeDecoder::boxed("primary", true, Outcome::Fails);
        let (fallback, _) = FakeDecoder::boxed("ocr", true, Outcome::Found("737628064502"));
        let resolver = BarcodeResolver::new(vec![primary, fallback]);

        let img = image();
        assert_eq!(resolver.resolve(img.path()).unwrap(), "737628064502");
    }

    #[test]
    fn test_invalid_decoded_text_falls_back() {
        let (primary, _) =
            FakeDecoder::boxed("primary", true, Outcome::Found("https://example.com"));
        let (fallback, _) = FakeDecoder::boxed("ocr", true, Outcome::Found("73762806"));
        let resolver = BarcodeResolver::new(vec![primary, fallback]);

        let img = image();
        assert_eq!(resolver.resolve(img.path()).unwrap(), "73762806");
    }

    #[test]
    fn test_all_fail_is_no_barcode_detected() {
        let (primary, _) = FakeDecoder::boxed("primary", true, Outcome::Nothing);
        let (fallback, _) = FakeDecoder::boxed("ocr", true, Outcome::Fails);
        let resolver = BarcodeResolver::new(vec![primary, fallback]);

        let img = image();
        assert!(matches!(
            resolver.resolve(img.path()),
            Err(AnalystError::NoBarcodeDetected)
        ));
    }

    #[test]
    fn test_no_decoders_is_no_barcode_detected() {
        let resolver = BarcodeResolver::new(Vec::new());
        let img = image();
        assert!(matches!(
            resolver.resolve(img.path()),
            Err(AnalystError::NoBarcodeDetected)
        ));
    }

    #[test]
    fn test_missing_image_is_io_error() {
        let resolver = BarcodeResolver::new(Vec::new());
        assert!(matches!(
            resolver.resolve(Path::new("/no/such/image.png")),
            Err(AnalystError::Io(_))
        ));
    }

    #[test]
    fn test_from_config_respects_ocr_flag() {
        let config = BarcodeConfig {
            zbar_command: "definitely-not-zbarimg".to_string(),
            tesseract_command: "definitely-not-tesseract".to_string(),
            enable_ocr_fallback: false,
        };
        let resolver = BarcodeResolver::from_config(&config);
        assert_eq!(resolver.decoders.len(), 1);
        assert!(resolver.available_decoders().is_empty());
    }
}
