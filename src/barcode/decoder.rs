use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::barcode::validation::{extract_barcode_digits, validate_barcode};
use crate::error::{AnalystError, Result};

/// A way of turning an image file into a barcode string.
pub trait BarcodeDecoder {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Whether the capability is installed and usable right now.
    fn is_available(&self) -> bool;

    /// Decode `image`. `Ok(None)` means the decoder ran but found no code.
    fn decode(&self, image: &Path) -> Result<Option<String>>;
}

/// True if `command --version` can be spawned.
pub fn command_available(command: &str) -> bool {
    Command::new(command)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

fn run(decoder: &str, command: &mut Command) -> Result<Output> {
    debug!(decoder, command = ?command, "running decoder");
    command.output().map_err(|e| AnalystError::Decoder {
        decoder: decoder.to_string(),
        message: e.to_string(),
    })
}

/// Dedicated barcode scanner backed by ZBar's `zbarimg`.
#[derive(Debug, Clone)]
pub struct ZbarDecoder {
    command: String,
}

/// `zbarimg` exits with 4 when the image holds no symbol.
const ZBAR_NO_SYMBOLS: i32 = 4;

impl ZbarDecoder {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for ZbarDecoder {
    fn default() -> Self {
        Self::new("zbarimg")
    }
}

impl BarcodeDecoder for ZbarDecoder {
    fn name(&self) -> &str {
        "zbar"
    }

    fn is_available(&self) -> bool {
        command_available(&self.command)
    }

    fn decode(&self, image: &Path) -> Result<Option<String>> {
        let output = run(
            self.name(),
            Command::new(&self.command)
                .args(["--quiet", "--raw"])
                .arg(image),
        )?;

        if output.status.code() == Some(ZBAR_NO_SYMBOLS) {
            return Ok(None);
        }
        if !output.status.success() {
            return Err(AnalystError::Decoder {
                decoder: self.name().to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // One symbol per line; QR codes and other non-product symbols are skipped.
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().find_map(|line| validate_barcode(line).ok()))
    }
}

/// OCR fallback: reads the digits printed under the bars with Tesseract.
#[derive(Debug, Clone)]
pub struct TesseractDecoder {
    command: String,
}

impl TesseractDecoder {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for TesseractDecoder {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

impl BarcodeDecoder for TesseractDecoder {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn is_available(&self) -> bool {
        command_available(&self.command)
    }

    fn decode(&self, image: &Path) -> Result<Option<String>> {
        let output = run(
            self.name(),
            Command::new(&self.command)
                .arg(image)
                .arg("stdout")
                .args(["--oem", "3", "--psm", "6"])
                .args(["-c", "tessedit_char_whitelist=0123456789"]),
        )?;

        if !output.status.success() {
            return Err(AnalystError::Decoder {
                decoder: self.name().to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(extract_barcode_digits(&String::from_utf8_lossy(&output.stdout)))
    }
}
