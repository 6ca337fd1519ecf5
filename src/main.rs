use clap::Parser;
use std::path::Path;

use nutrition_analyst_rs::analysis::{analyze_product, analyze_raw};
use nutrition_analyst_rs::barcode::{BarcodeResolver, validate_barcode};
use nutrition_analyst_rs::cli::{Cli, Command};
use nutrition_analyst_rs::config::Config;
use nutrition_analyst_rs::error::{AnalystError, Result};
use nutrition_analyst_rs::interface::{
    InputMethod, build_report, display_analysis, display_citations, display_thresholds,
    print_json, prompt_barcode, prompt_image_path, prompt_input_method, prompt_yes_no,
    read_barcodes, write_report,
};
use nutrition_analyst_rs::logging::init_tracing;
use nutrition_analyst_rs::models::ProductAnalysis;
use nutrition_analyst_rs::source::{OpenFoodFactsClient, load_response};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("{}", hint);
        }
        std::process::exit(if e.is_recoverable() { 2 } else { 1 });
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(timeout) = cli.timeout {
        if timeout == 0 {
            return Err(AnalystError::InvalidInput(
                "--timeout must be greater than 0".to_string(),
            ));
        }
        config.api.timeout_secs = timeout;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_tracing(&config.logging)?;

    let json = cli.json;
    match cli.command.unwrap_or_default() {
        Command::Scan {
            barcode: Some(barcode),
        } => cmd_scan(&config, &barcode, json),
        Command::Scan { barcode: None } => cmd_interactive(&config, json),
        Command::Image { path } => cmd_image(&config, &path, json),
        Command::Score { file, barcode } => cmd_score(&file, barcode.as_deref(), json),
        Command::Batch { input, output } => cmd_batch(&config, &input, &output, json),
        Command::Thresholds => {
            display_thresholds();
            Ok(())
        }
        Command::Citations => {
            display_citations();
            Ok(())
        }
    }
}

fn show(analysis: &ProductAnalysis, json: bool) -> Result<()> {
    if json {
        print_json(analysis)
    } else {
        display_analysis(analysis);
        Ok(())
    }
}

/// Analyze a single barcode given on the command line.
fn cmd_scan(config: &Config, barcode: &str, json: bool) -> Result<()> {
    let source = OpenFoodFactsClient::new(&config.api);
    let analysis = analyze_product(&source, barcode)?;
    show(&analysis, json)
}

/// Resolve a barcode from an image, then analyze it.
fn cmd_image(config: &Config, path: &Path, json: bool) -> Result<()> {
    let resolver = BarcodeResolver::from_config(&config.barcode);
    if resolver.available_decoders().is_empty() {
        eprintln!("No barcode decoder found. Install zbar (zbarimg) or tesseract.");
    }

    let barcode = resolver.resolve(path)?;
    if !json {
        println!("Barcode detected: {}", barcode);
    }
    cmd_scan(config, &barcode, json)
}

/// Score a saved API response offline.
fn cmd_score(file: &Path, barcode: Option<&str>, json: bool) -> Result<()> {
    let raw = load_response(file)?;
    let barcode = match barcode {
        Some(code) => validate_barcode(code)?,
        None => raw
            .get("code")
            .and_then(|c| c.as_str())
            .unwrap_or("unknown")
            .to_string(),
    };
    let analysis = analyze_raw(&raw, &barcode)?;
    show(&analysis, json)
}

/// Analyze a CSV list of barcodes and write a report.
fn cmd_batch(config: &Config, input: &Path, output: &Path, json: bool) -> Result<()> {
    let barcodes = read_barcodes(input)?;
    if barcodes.is_empty() {
        println!("No barcodes found in {}", input.display());
        return Ok(());
    }

    let source = OpenFoodFactsClient::new(&config.api);
    let rows = build_report(&source, &barcodes);
    write_report(&rows, output)?;

    if json {
        return print_json(&rows);
    }

    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    println!(
        "Analyzed {} barcodes ({} failed). Report written to {}",
        rows.len(),
        failed,
        output.display()
    );
    Ok(())
}

/// Interactive loop: choose input method, analyze, repeat.
///
/// Recoverable failures fall back to manual entry or another attempt.
fn cmd_interactive(config: &Config, json: bool) -> Result<()> {
    let source = OpenFoodFactsClient::new(&config.api);
    let resolver = BarcodeResolver::from_config(&config.barcode);

    println!("Nutrition Analyst");
    println!("Scoring based on WHO, FDA and UK Food Standards Agency guidelines");
    println!();

    loop {
        let barcode = match prompt_input_method()? {
            InputMethod::Quit => break,
            InputMethod::Manual => prompt_barcode()?,
            InputMethod::ImageFile => {
                let path = match prompt_image_path() {
                    Ok(path) => path,
                    Err(AnalystError::InvalidInput(msg)) => {
                        eprintln!("{}", msg);
                        continue;
                    }
                    Err(e) => return Err(e),
                };
                match resolver.resolve(&path) {
                    Ok(code) => {
                        println!("Barcode detected: {}", code);
                        code
                    }
                    Err(e) if e.is_recoverable() => {
                        eprintln!("{}", e);
                        if let Some(hint) = e.hint() {
                            eprintln!("{}", hint);
                        }
                        prompt_barcode()?
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        if !json {
            println!("Fetching product data for {}...", barcode);
        }
        match analyze_product(&source, &barcode) {
            Ok(analysis) => show(&analysis, json)?,
            Err(e) => {
                eprintln!("Error: {}", e);
                if let Some(hint) = e.hint() {
                    eprintln!("{}", hint);
                }
            }
        }

        if !prompt_yes_no("Scan another product?", true)? {
            break;
        }
    }

    Ok(())
}
