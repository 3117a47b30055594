use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SceneError, SceneResult};

/// Ordered, distinct date labels shared by every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAxis {
    labels: Vec<String>,
}

impl DateAxis {
    /// Builds an axis, rejecting duplicate labels.
    pub fn new<I, S>(labels: I) -> SceneResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(SceneError::InvalidData(format!(
                    "duplicate date label `{label}`"
                )));
            }
        }
        Ok(Self { labels })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|candidate| candidate == label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One country-region with its raw cell text per date column.
///
/// `None` marks a field the source record did not have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub country: String,
    pub cells: Vec<Option<String>>,
}

impl RawRow {
    #[must_use]
    pub fn new<I, S>(country: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            country: country.into(),
            cells: cells.into_iter().map(|cell| Some(cell.into())).collect(),
        }
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|cell| cell.as_deref())
    }
}

/// Loaded rows aligned to a date axis.
///
/// Construction pads short rows with missing cells and drops cells past the
/// axis, so every row carries exactly one cell per date. Dropped cells and
/// records the loader skipped are counted for the quality report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    axis: DateAxis,
    rows: Vec<RawRow>,
    #[serde(default)]
    extra_cells: usize,
    #[serde(default)]
    skipped_records: usize,
}

impl Dataset {
    pub fn new(axis: DateAxis, rows: Vec<RawRow>) -> SceneResult<Self> {
        if axis.is_empty() {
            return Err(SceneError::NoData("dataset has no date columns".to_owned()));
        }
        if rows.is_empty() {
            return Err(SceneError::NoData("dataset has no rows".to_owned()));
        }

        let width = axis.len();
        let mut padded_rows = 0usize;
        let mut truncated_rows = 0usize;
        let mut extra_cells = 0usize;
        let rows: Vec<RawRow> = rows
            .into_iter()
            .map(|mut row| {
                if row.cells.len() < width {
                    padded_rows += 1;
                    row.cells.resize(width, None);
                } else if row.cells.len() > width {
                    truncated_rows += 1;
                    extra_cells += row.cells.len() - width;
                    row.cells.truncate(width);
                }
                row
            })
            .collect();

        if padded_rows > 0 {
            warn!(padded_rows, width, "rows shorter than date axis; missing cells count as zero");
        }
        if truncated_rows > 0 {
            warn!(
                truncated_rows,
                extra_cells,
                width,
                "rows longer than date axis; extra cells dropped"
            );
        }
        debug!(rows = rows.len(), dates = width, "dataset assembled");

        Ok(Self {
            axis,
            rows,
            extra_cells,
            skipped_records: 0,
        })
    }

    /// Records the number of source records dropped before assembly.
    #[must_use]
    pub fn with_skipped_records(mut self, skipped_records: usize) -> Self {
        self.skipped_records = skipped_records;
        self
    }

    /// Cells past the date axis that were dropped during assembly.
    #[must_use]
    pub fn extra_cells(&self) -> usize {
        self.extra_cells
    }

    #[must_use]
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    #[must_use]
    pub fn axis(&self) -> &DateAxis {
        &self.axis
    }

    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn date_count(&self) -> usize {
        self.axis.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_rejects_duplicate_labels() {
        let err = DateAxis::new(["1/1/20", "1/2/20", "1/1/20"]).expect_err("duplicate");
        assert!(matches!(err, SceneError::InvalidData(_)));
    }

    #[test]
    fn dataset_aligns_rows_to_axis_width() {
        let axis = DateAxis::new(["d1", "d2", "d3"]).expect("axis");
        let dataset = Dataset::new(
            axis,
            vec![
                RawRow::new("Short", ["1"]),
                RawRow::new("Long", ["1", "2", "3", "4"]),
            ],
        )
        .expect("dataset");

        for row in dataset.rows() {
            assert_eq!(row.cells.len(), 3);
        }
        assert_eq!(dataset.rows()[0].cell(1), None);
        assert_eq!(dataset.rows()[1].cell(2), Some("3"));
        assert_eq!(dataset.extra_cells(), 1);
    }

    #[test]
    fn empty_inputs_fail_fast() {
        let axis = DateAxis::new(["d1"]).expect("axis");
        assert!(matches!(
            Dataset::new(axis, Vec::new()),
            Err(SceneError::NoData(_))
        ));

        let empty_axis = DateAxis::new(Vec::<String>::new()).expect("axis");
        assert!(matches!(
            Dataset::new(empty_axis, vec![RawRow::new("A", Vec::<String>::new())]),
            Err(SceneError::NoData(_))
        ));
    }
}
