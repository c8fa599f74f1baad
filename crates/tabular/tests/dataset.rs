//! End-to-end tests for transpose, split, select, sampling, and sorting,
//! exercised through every storage mode.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use tabular::{Dataset, DatasetMode, Row, SplitValue, Value, ValueType};

const INTS: [i64; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
const REALS: [f64; 10] = [1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9];
const LABELS: [&str; 10] = ["A", "B", "A", "B", "C", "D", "C", "D", "E", "F"];

fn fixture(mode: DatasetMode) -> Dataset {
    let mut ds = Dataset::with_schema(
        mode,
        &[ValueType::Integer, ValueType::Real, ValueType::Text],
        &["int", "real", "label"],
    );
    for x in 0..INTS.len() {
        ds.push_row(Row::from_values(vec![
            Value::Integer(INTS[x]),
            Value::Real(REALS[x]),
            Value::from(LABELS[x]),
        ]));
    }
    ds
}

/// Integer column values, whatever mode the dataset is in.
fn int_column(ds: &mut Dataset) -> Vec<i64> {
    ds.column(0)
        .map(|col| {
            col.values()
                .iter()
                .flatten()
                .map(Value::to_integer)
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn numeric_split_at_threshold() {
    for mode in [DatasetMode::Rows, DatasetMode::Columns, DatasetMode::Matrix] {
        let mut ds = fixture(mode);
        let (mut less, mut greater) = ds.split_rows_by_numeric(0, 4.5).unwrap();

        assert_eq!(ds.mode(), mode, "source mode restored for {mode:?}");
        assert_eq!(less.mode(), mode);
        assert_eq!(greater.mode(), mode);
        assert_eq!(int_column(&mut less), vec![0, 1, 2, 3, 4]);
        assert_eq!(int_column(&mut greater), vec![5, 6, 7, 8, 9]);
    }
}

#[test]
fn numeric_split_on_reals() {
    let mut ds = fixture(DatasetMode::Matrix);
    let (less, greater) = ds.split_rows_by_numeric(1, 1.8).unwrap();

    assert_eq!(less.n_rows(), 8);
    assert_eq!(greater.n_rows(), 2);
    assert_eq!(greater.rows()[0].int_at(0), Some(8));
    assert_eq!(greater.rows()[1].int_at(0), Some(9));
}

#[test]
fn categorical_split_membership() {
    let mut ds = fixture(DatasetMode::Matrix);
    let (mut split_in, mut split_ex) = ds.split_rows_by_categorical(2, &["A", "D"]).unwrap();

    assert_eq!(int_column(&mut split_in), vec![0, 2, 5, 7]);
    assert_eq!(int_column(&mut split_ex), vec![1, 3, 4, 6, 8, 9]);
}

#[test]
fn split_by_value_dispatches() {
    let mut ds = fixture(DatasetMode::Matrix);

    let (less, _) = ds.split_rows_by_value(0, SplitValue::Numeric(4.5)).unwrap();
    assert_eq!(less.n_rows(), 5);

    let (found, _) = ds
        .split_rows_by_value(2, SplitValue::Categorical(&["E", "F"]))
        .unwrap();
    assert_eq!(found.n_rows(), 2);

    assert!(ds.split_rows_by_value(2, SplitValue::Numeric(1.0)).is_err());
}

#[test]
fn partition_is_complete_and_disjoint() {
    let mut ds = fixture(DatasetMode::Matrix);
    let (mut less, mut greater) = ds.split_rows_by_numeric(1, 1.45).unwrap();

    assert_eq!(less.n_rows() + greater.n_rows(), 10);

    let mut all = int_column(&mut less);
    all.extend(int_column(&mut greater));
    all.sort_unstable();
    assert_eq!(all, (0..10).collect::<Vec<i64>>());
}

#[test]
fn transpose_round_trip_preserves_cells() {
    let original = fixture(DatasetMode::Matrix);
    let mut ds = original.clone();
    ds.transpose_to_rows();
    ds.transpose_to_columns();
    assert_eq!(ds, original);

    let mut ds = fixture(DatasetMode::Rows);
    ds.transpose_to_columns();
    ds.transpose_to_rows();
    assert_eq!(ds, fixture(DatasetMode::Rows));
    assert_eq!(ds.rows()[9].text_at(2), "F");
}

#[test]
fn select_rows_where_matches_text() {
    let mut ds = fixture(DatasetMode::Matrix);
    let selected = ds.select_rows_where(0, "9");

    assert_eq!(selected.n_rows(), 1);
    assert_eq!(selected.rows()[0].text_at(2), "F");
}

#[test]
fn select_columns_by_index_skips_out_of_range() {
    let mut ds = fixture(DatasetMode::Matrix);
    let selected = ds.select_columns_by_index(&[2, 17, 0]);

    assert_eq!(selected.column_names(), vec!["label", "int"]);
    assert_eq!(selected.n_rows(), 10);
    assert_eq!(selected.rows()[4].text_at(0), "C");
    assert_eq!(selected.rows()[4].int_at(1), Some(4));
}

#[test]
fn sampling_without_replacement_partitions_rows() {
    let mut ds = fixture(DatasetMode::Matrix);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let (picked, unpicked, picked_idx, unpicked_idx) = ds.random_pick_rows(&mut rng, 6, false);

    assert_eq!(picked.n_rows(), 6);
    assert_eq!(unpicked.n_rows(), 4);

    let mut all: Vec<usize> = picked_idx.iter().chain(&unpicked_idx).copied().collect();
    all.sort_unstable();
    assert_eq!(all, (0..10).collect::<Vec<usize>>());

    for (r, &idx) in picked_idx.iter().enumerate() {
        assert_eq!(picked.rows()[r].int_at(0), Some(idx as i64));
    }
}

#[test]
fn sampling_with_replacement_allows_duplicates() {
    let mut ds = fixture(DatasetMode::Matrix);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let (picked, _, picked_idx, _) = ds.random_pick_rows(&mut rng, 20, true);

    assert_eq!(picked.n_rows(), 20);
    assert_eq!(picked_idx.len(), 20);
}

#[test]
fn column_sampling_respects_exclusions() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
    for _ in 0..5 {
        let mut ds = fixture(DatasetMode::Matrix);
        let (picked, _, picked_idx, unpicked_idx) = ds.random_pick_columns(&mut rng, 3, false, &[1]);

        assert_eq!(picked.n_columns(), 2);
        assert!(!picked_idx.contains(&1));
        assert!(unpicked_idx.contains(&1));
        assert!(picked.column_names().iter().all(|&name| name != "real"));
    }
}

#[test]
fn schema_clone_then_repopulate() {
    let ds = fixture(DatasetMode::Matrix);
    let mut clone = ds.clone_schema();

    assert_eq!(clone.n_rows(), 0);
    assert_eq!(clone.column_names(), vec!["int", "real", "label"]);

    clone.push_row(Row::from_values(vec![
        Value::Integer(99),
        Value::Real(9.9),
        Value::from("Z"),
    ]));
    assert_eq!(clone.n_rows(), 1);
    assert_eq!(clone.columns()[2].len(), 1);
}

#[test]
fn group_rows_by_label() {
    let ds = fixture(DatasetMode::Rows);
    let groups = ds.rows().group_by_value(2);

    assert_eq!(groups.len(), 6);
    assert_eq!(groups[0].key, "A");
    assert_eq!(groups[0].rows.len(), 2);

    let minority = groups.minority().unwrap();
    assert_eq!(minority.key, "E");
    assert_eq!(minority.rows.len(), 1);
}

#[test]
fn indirect_sort_reorders_whole_dataset() {
    let mut ds = fixture(DatasetMode::Matrix);

    // Descending by integer column: negate the keys, sort ascending.
    let mut keys: Vec<f64> = ds.columns()[0].to_float_vec().iter().map(|v| -v).collect();
    let perm = tabular::indirect_sort(&mut keys);
    ds.sort_columns_by_index(&perm);

    assert_eq!(
        ds.columns()[0].to_text_vec(),
        vec!["9", "8", "7", "6", "5", "4", "3", "2", "1", "0"]
    );
    assert_eq!(ds.rows()[0].text_at(2), "F");
    assert_eq!(ds.rows()[9].text_at(2), "A");
}
