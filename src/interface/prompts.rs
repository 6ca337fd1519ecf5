use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};

use crate::barcode::validate_barcode;
use crate::error::{AnalystError, Result};

/// How the user wants to provide the next barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    ImageFile,
    Manual,
    Quit,
}

/// Ask how the barcode should be read.
pub fn prompt_input_method() -> Result<InputMethod> {
    let options = ["Scan an image file", "Enter barcode manually", "Quit"];

    let selection = Select::new()
        .with_prompt("How do you want to provide the barcode?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => InputMethod::ImageFile,
        1 => InputMethod::Manual,
        _ => InputMethod::Quit,
    })
}

/// Prompt for a barcode until it is 8-13 digits.
pub fn prompt_barcode() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Barcode number (e.g. 737628064502)")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            validate_barcode(input)
                .map(|_| ())
                .map_err(|_| "Invalid barcode format. Use 8-13 digits.".to_string())
        })
        .interact_text()?;

    validate_barcode(&input)
}

/// Prompt for the path of an image containing a barcode.
pub fn prompt_image_path() -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("Path to an image of the barcode (png/jpg)")
        .interact_text()?;

    let path = PathBuf::from(input.trim());
    if !path.is_file() {
        return Err(AnalystError::InvalidInput(format!(
            "No image file at {}",
            path.display()
        )));
    }
    Ok(path)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
