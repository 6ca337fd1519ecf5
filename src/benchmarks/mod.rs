//! Reference data for scoring: threshold rules, citations and daily values.
//!
//! Everything here is immutable, process-wide data. Changing a threshold is a
//! data change that must be traceable to its citation.

pub mod citations;
pub mod table;

pub use citations::{
    Citation, DailyReference, ReferenceKind, all_citations, citation, citations, daily_reference,
    daily_reference_sources, daily_share, nova_group_name, nutriscore_band_info,
};
pub use table::{BenchmarkEntry, BonusTier, Direction, Rule, entry_for, thresholds};
