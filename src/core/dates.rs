use chrono::NaiveDate;

use crate::core::dataset::DateAxis;

// Two-digit years first: `%Y` would read "20" as year 20 AD.
const LABEL_FORMATS: [&str; 3] = ["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

/// Parses a date column header such as `1/22/20`, `1/22/2020` or `2020-01-22`.
#[must_use]
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    LABEL_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(label, format).ok())
}

/// Display form used in tooltips and callouts, e.g. `Jan 22, 2020`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Formats a label when it parses as a date, otherwise returns it verbatim.
#[must_use]
pub fn display_date_label(label: &str) -> String {
    parse_date_label(label).map_or_else(|| label.to_owned(), format_date)
}

/// First and last parsed dates of the axis; `None` unless every label parses.
#[must_use]
pub fn date_extent(axis: &DateAxis) -> Option<(NaiveDate, NaiveDate)> {
    let mut extent: Option<(NaiveDate, NaiveDate)> = None;
    for label in axis.labels() {
        let date = parse_date_label(label)?;
        extent = Some(match extent {
            Some((min, max)) => (min.min(date), max.max(date)),
            None => (date, date),
        });
    }
    extent
}
