pub mod prompts;
pub mod render;
pub mod report;

pub use prompts::{
    InputMethod, prompt_barcode, prompt_image_path, prompt_input_method, prompt_yes_no,
};
pub use render::{
    display_analysis, display_citations, display_nutrition, display_thresholds, named_explanation,
    print_json,
};
pub use report::{ReportRow, build_report, read_barcodes, write_report};
