pub mod aggregate;
pub mod dataset;
pub mod dates;
pub mod format;
pub mod loader;
pub mod parse;
pub mod types;

pub use aggregate::{
    Aggregates, DataQualityReport, compute_by_country_snapshots, compute_global_totals,
    peak_total, rank_snapshot, rank_values,
};
pub use dataset::{DateAxis, Dataset, RawRow};
pub use dates::{date_extent, display_date_label, format_date, parse_date_label};
pub use format::{format_cases, format_count};
pub use loader::{LoadOptions, load_csv_path, load_csv_reader};
pub use parse::{CellValue, parse_cell, parse_count};
pub use types::{CountryValue, DateSnapshot, GlobalTotalPoint, Margins, Viewport};
