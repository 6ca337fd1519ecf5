//! Barcode acquisition: manual entry validation and image decoding.
//!
//! Image decoding is delegated to external tools. The resolver tries a
//! dedicated scanner first and falls back to OCR.

pub mod decoder;
pub mod resolver;
pub mod validation;

pub use decoder::{BarcodeDecoder, TesseractDecoder, ZbarDecoder, command_available};
pub use resolver::BarcodeResolver;
pub use validation::{MAX_BARCODE_LEN, MIN_BARCODE_LEN, extract_barcode_digits, validate_barcode};
