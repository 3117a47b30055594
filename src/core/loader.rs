//! CSV ingest for wide time-series files.
//!
//! Expected layout: one header row, a few leading descriptor columns (one of
//! them naming the country), then one column per date in chronological order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::dataset::{DateAxis, Dataset, RawRow};
use crate::error::{SceneError, SceneResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    #[serde(default = "default_country_column")]
    pub country_column: String,
    /// Columns before the first date column.
    #[serde(default = "default_leading_columns")]
    pub leading_columns: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            country_column: default_country_column(),
            leading_columns: default_leading_columns(),
        }
    }
}

fn default_country_column() -> String {
    "Country/Region".to_owned()
}

fn default_leading_columns() -> usize {
    4
}

pub fn load_csv_path(path: impl AsRef<Path>, options: &LoadOptions) -> SceneResult<Dataset> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading csv");
    let file = File::open(path)?;
    load_csv_reader(file, options)
}

pub fn load_csv_reader<R: Read>(reader: R, options: &LoadOptions) -> SceneResult<Dataset> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let country_index = headers
        .iter()
        .position(|name| name == options.country_column)
        .ok_or_else(|| SceneError::MissingColumn(options.country_column.clone()))?;
    if country_index >= options.leading_columns {
        return Err(SceneError::InvalidData(format!(
            "country column `{}` sits at index {country_index}, inside the date columns",
            options.country_column
        )));
    }

    let axis = DateAxis::new(headers.iter().skip(options.leading_columns))?;
    if axis.is_empty() {
        return Err(SceneError::NoData(format!(
            "no date columns after the first {} columns",
            options.leading_columns
        )));
    }

    let mut rows = Vec::new();
    let mut blank_records = 0usize;
    let mut countryless_records = 0usize;
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        if record.iter().all(str::is_empty) {
            blank_records += 1;
            continue;
        }
        let Some(country) = record.get(country_index) else {
            countryless_records += 1;
            warn!(
                line = ?record.position().map(|p| p.line()),
                "record ends before the country column; skipped"
            );
            continue;
        };
        // Cells past the date axis are kept so assembly can count and drop them.
        let cells = record
            .iter()
            .skip(options.leading_columns)
            .map(|cell| Some(cell.to_owned()))
            .collect();
        rows.push(RawRow {
            country: country.to_owned(),
            cells,
        });
    }

    if blank_records > 0 {
        warn!(blank_records, "blank records skipped");
    }
    debug!(rows = rows.len(), dates = axis.len(), "csv parsed");
    Ok(Dataset::new(axis, rows)?.with_skipped_records(blank_records + countryless_records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Province/State,Country/Region,Lat,Long,1/22/20,1/23/20
,Afghanistan,33.0,65.0,0,1
Ontario,Canada,51.2,-85.3,2,
";

    #[test]
    fn reads_dates_after_leading_columns() {
        let dataset = load_csv_reader(SAMPLE.as_bytes(), &LoadOptions::default()).expect("load");
        assert_eq!(dataset.axis().labels(), ["1/22/20", "1/23/20"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.rows()[1].country, "Canada");
        assert_eq!(dataset.rows()[1].cell(1), Some(""));
    }

    #[test]
    fn trailing_cells_and_blank_records_are_counted() {
        let csv = "\
Province/State,Country/Region,Lat,Long,d1,d2
,A,0,0,3,4,999,888
,,,,,
,B,0,0,1,2
";
        let dataset = load_csv_reader(csv.as_bytes(), &LoadOptions::default()).expect("load");
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.extra_cells(), 2);
        assert_eq!(dataset.skipped_records(), 1);
        assert_eq!(dataset.rows()[0].cells.len(), 2);
        assert_eq!(dataset.rows()[0].cell(1), Some("4"));
    }

    #[test]
    fn missing_country_column_is_reported() {
        let options = LoadOptions {
            country_column: "Nation".to_owned(),
            ..LoadOptions::default()
        };
        let err = load_csv_reader(SAMPLE.as_bytes(), &options).expect_err("missing column");
        assert!(matches!(err, SceneError::MissingColumn(name) if name == "Nation"));
    }
}
