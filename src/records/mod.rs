mod builder;

pub use builder::{build, build_analysis_input, coerce_number, nutriment_key};
