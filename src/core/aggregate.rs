use std::cmp::Reverse;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "parallel-aggregation")]
use rayon::prelude::*;

use crate::core::dataset::{DateAxis, Dataset, RawRow};
use crate::core::parse::{CellValue, parse_cell};
use crate::core::types::{CountryValue, DateSnapshot, GlobalTotalPoint};
use crate::error::{SceneError, SceneResult};

/// Sums each date column across all rows, in axis order.
///
/// Cells that are missing or not numeric contribute zero.
#[must_use]
pub fn compute_global_totals(rows: &[RawRow], axis: &DateAxis) -> Vec<GlobalTotalPoint> {
    axis.labels()
        .iter()
        .enumerate()
        .map(|(index, date)| {
            let total: f64 = rows
                .iter()
                .map(|row| parse_cell(row.cell(index)).or_zero())
                .sum();
            GlobalTotalPoint::new(date.clone(), total)
        })
        .collect()
}

/// Materializes one snapshot per date holding every row's value in row order.
#[must_use]
pub fn compute_by_country_snapshots(rows: &[RawRow], axis: &DateAxis) -> Vec<DateSnapshot> {
    let build = |(index, date): (usize, &String)| DateSnapshot {
        date: date.clone(),
        values: rows
            .iter()
            .map(|row| {
                CountryValue::new(row.country.clone(), parse_cell(row.cell(index)).or_zero())
            })
            .collect(),
    };

    #[cfg(feature = "parallel-aggregation")]
    {
        axis.labels().par_iter().enumerate().map(build).collect()
    }

    #[cfg(not(feature = "parallel-aggregation"))]
    {
        axis.labels().iter().enumerate().map(build).collect()
    }
}

/// Top `limit` strictly positive entries, descending by value.
///
/// The sort is stable, so countries with equal values keep row order.
#[must_use]
pub fn rank_snapshot(snapshot: &DateSnapshot, limit: usize) -> Vec<CountryValue> {
    rank_values(&snapshot.values, limit)
}

#[must_use]
pub fn rank_values(values: &[CountryValue], limit: usize) -> Vec<CountryValue> {
    let mut ranked: Vec<CountryValue> = values
        .iter()
        .filter(|entry| entry.value > 0.0)
        .cloned()
        .collect();
    ranked.sort_by_key(|entry| Reverse(OrderedFloat(entry.value)));
    ranked.truncate(limit);
    ranked
}

/// First point holding the largest total.
#[must_use]
pub fn peak_total(totals: &[GlobalTotalPoint]) -> Option<&GlobalTotalPoint> {
    totals.iter().fold(None, |best, point| match best {
        Some(current) if point.total <= current.total => Some(current),
        _ => Some(point),
    })
}

/// Source problems absorbed while loading and aggregating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataQualityReport {
    pub missing_cells: usize,
    pub invalid_cells: usize,
    /// Cells past the last date column, dropped.
    #[serde(default)]
    pub extra_cells: usize,
    /// Blank or country-less records the loader skipped.
    #[serde(default)]
    pub skipped_records: usize,
    /// Per-date count of non-numeric cells, in axis order; clean dates are omitted.
    pub invalid_by_date: IndexMap<String, usize>,
}

impl DataQualityReport {
    #[must_use]
    pub fn scan(dataset: &Dataset) -> Self {
        let mut report = Self {
            extra_cells: dataset.extra_cells(),
            skipped_records: dataset.skipped_records(),
            ..Self::default()
        };
        for (index, date) in dataset.axis().labels().iter().enumerate() {
            let mut invalid_here = 0usize;
            for row in dataset.rows() {
                match parse_cell(row.cell(index)) {
                    CellValue::Number(_) => {}
                    CellValue::Empty => report.missing_cells += 1,
                    CellValue::Invalid => invalid_here += 1,
                }
            }
            if invalid_here > 0 {
                report.invalid_cells += invalid_here;
                report.invalid_by_date.insert(date.clone(), invalid_here);
            }
        }
        report
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_cells == 0
            && self.invalid_cells == 0
            && self.extra_cells == 0
            && self.skipped_records == 0
    }
}

/// Derived views computed once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    axis: DateAxis,
    global_totals: Vec<GlobalTotalPoint>,
    snapshots: Vec<DateSnapshot>,
    quality: DataQualityReport,
}

impl Aggregates {
    #[must_use]
    pub fn compute(dataset: &Dataset) -> Self {
        let axis = dataset.axis().clone();
        let global_totals = compute_global_totals(dataset.rows(), &axis);
        let snapshots = compute_by_country_snapshots(dataset.rows(), &axis);
        let quality = DataQualityReport::scan(dataset);

        if !quality.is_clean() {
            warn!(
                missing_cells = quality.missing_cells,
                invalid_cells = quality.invalid_cells,
                affected_dates = quality.invalid_by_date.len(),
                extra_cells = quality.extra_cells,
                skipped_records = quality.skipped_records,
                "data quality issues absorbed; missing and non-numeric cells count as zero"
            );
        }
        debug!(
            dates = axis.len(),
            rows = dataset.row_count(),
            "aggregates computed"
        );

        Self {
            axis,
            global_totals,
            snapshots,
            quality,
        }
    }

    #[must_use]
    pub fn axis(&self) -> &DateAxis {
        &self.axis
    }

    #[must_use]
    pub fn global_totals(&self) -> &[GlobalTotalPoint] {
        &self.global_totals
    }

    #[must_use]
    pub fn snapshots(&self) -> &[DateSnapshot] {
        &self.snapshots
    }

    #[must_use]
    pub fn quality(&self) -> &DataQualityReport {
        &self.quality
    }

    #[must_use]
    pub fn date_count(&self) -> usize {
        self.axis.len()
    }

    #[must_use]
    pub fn snapshot(&self, date_index: usize) -> Option<&DateSnapshot> {
        self.snapshots.get(date_index)
    }

    #[must_use]
    pub fn snapshot_for(&self, date: &str) -> Option<&DateSnapshot> {
        self.axis
            .position(date)
            .and_then(|index| self.snapshots.get(index))
    }

    /// Fails when there is nothing a scene could draw.
    pub fn ensure_loaded(&self) -> SceneResult<()> {
        if self.axis.is_empty() || self.snapshots.iter().all(DateSnapshot::is_empty) {
            return Err(SceneError::NoData(
                "aggregates hold no dates or no rows".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_keeps_first_of_equal_maxima() {
        let totals = vec![
            GlobalTotalPoint::new("a", 1.0),
            GlobalTotalPoint::new("b", 9.0),
            GlobalTotalPoint::new("c", 9.0),
        ];
        assert_eq!(peak_total(&totals).map(|p| p.date.as_str()), Some("b"));
        assert!(peak_total(&[]).is_none());
    }

    #[test]
    fn quality_scan_tracks_invalid_cells_per_date() {
        let axis = DateAxis::new(["d1", "d2"]).expect("axis");
        let dataset = Dataset::new(
            axis,
            vec![
                RawRow::new("A", ["x", ""]),
                RawRow::new("B", ["1", "oops"]),
                RawRow::new("C", ["2"]),
            ],
        )
        .expect("dataset");

        let report = DataQualityReport::scan(&dataset);
        assert_eq!(report.invalid_cells, 2);
        assert_eq!(report.missing_cells, 2);
        assert_eq!(report.invalid_by_date.get("d1"), Some(&1));
        assert_eq!(report.invalid_by_date.get("d2"), Some(&1));
        assert!(!report.is_clean());
    }
}
