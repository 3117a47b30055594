use proptest::prelude::*;
use scrolly_rs::core::{
    Aggregates, DateAxis, Dataset, RawRow, compute_global_totals, rank_snapshot,
};

fn dataset_from(values: &[Vec<i32>], dates: usize) -> Dataset {
    let axis = DateAxis::new((0..dates).map(|d| format!("d{d}"))).expect("axis");
    let rows = values
        .iter()
        .enumerate()
        .map(|(i, row)| RawRow::new(format!("country-{i}"), row.iter().map(i32::to_string)))
        .collect();
    Dataset::new(axis, rows).expect("dataset")
}

fn grid() -> impl Strategy<Value = (usize, Vec<Vec<i32>>)> {
    (1usize..12).prop_flat_map(|dates| {
        (
            Just(dates),
            prop::collection::vec(prop::collection::vec(-50i32..5_000, dates), 1..40),
        )
    })
}

proptest! {
    #[test]
    fn ranking_respects_limit_positivity_and_order(
        (dates, values) in grid(),
        limit in 0usize..25
    ) {
        let aggregates = Aggregates::compute(&dataset_from(&values, dates));
        for snapshot in aggregates.snapshots() {
            let ranked = rank_snapshot(snapshot, limit);
            prop_assert!(ranked.len() <= limit);
            prop_assert!(ranked.iter().all(|entry| entry.value > 0.0));
            prop_assert!(ranked.windows(2).all(|pair| pair[0].value >= pair[1].value));
            prop_assert_eq!(&ranked, &rank_snapshot(snapshot, limit));
        }
    }

    #[test]
    fn totals_equal_column_sums((dates, values) in grid()) {
        let dataset = dataset_from(&values, dates);
        let totals = compute_global_totals(dataset.rows(), dataset.axis());
        prop_assert_eq!(totals.len(), dates);
        for (d, point) in totals.iter().enumerate() {
            let expected: i64 = values.iter().map(|row| i64::from(row[d])).sum();
            prop_assert_eq!(point.total, expected as f64);
        }
    }

    #[test]
    fn each_snapshot_has_one_value_per_row((dates, values) in grid()) {
        let aggregates = Aggregates::compute(&dataset_from(&values, dates));
        prop_assert_eq!(aggregates.snapshots().len(), dates);
        for snapshot in aggregates.snapshots() {
            prop_assert_eq!(snapshot.len(), values.len());
        }
    }
}
