//! Dataset wrapper that designates one column as the class attribute.

use crate::column::Column;
use crate::dataset::Dataset;

/// A dataset with a designated class (target) column.
///
/// Tracks per-label counts and the majority and minority labels. The counts
/// align by position with [`ClassDataset::class_value_space`] and are only
/// current after [`ClassDataset::count_value_spaces`] or
/// [`ClassDataset::recount_major_minor`] has run.
#[derive(Debug, Clone, Default)]
pub struct ClassDataset {
    dataset: Dataset,
    class_index: usize,
    counts: Vec<usize>,
    major: String,
    minor: String,
}

impl ClassDataset {
    /// Wraps `dataset`, designating the column at `class_index` as the
    /// class attribute.
    pub fn new(dataset: Dataset, class_index: usize) -> ClassDataset {
        ClassDataset {
            dataset,
            class_index,
            ..ClassDataset::default()
        }
    }

    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[inline]
    pub fn dataset_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }

    #[inline]
    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn set_class_index(&mut self, class_index: usize) {
        self.class_index = class_index;
    }

    /// Number of rows in the underlying dataset.
    #[inline]
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Value space of the class column, empty when the class index does not
    /// name a column.
    pub fn class_value_space(&self) -> Vec<String> {
        self.dataset
            .columns()
            .get(self.class_index)
            .map_or_else(Vec::new, |col| col.value_space().to_vec())
    }

    /// The class column. Row-major data transposes to column-major first,
    /// as in [`Dataset::column`].
    pub fn class_column(&mut self) -> Option<&Column> {
        let idx = self.class_index;
        self.dataset.column(idx)
    }

    /// Rendered class values, in row order.
    pub fn class_as_texts(&mut self) -> Vec<String> {
        self.class_column()
            .map_or_else(Vec::new, Column::to_text_vec)
    }

    /// Counts how many class values match each value-space label, ASCII
    /// case-insensitively.
    pub fn count_value_spaces(&mut self) {
        let labels = self.class_as_texts();
        self.counts = self
            .class_value_space()
            .iter()
            .map(|token| {
                labels
                    .iter()
                    .filter(|label| label.eq_ignore_ascii_case(token))
                    .count()
            })
            .collect();
    }

    /// Recounts the value space and updates the majority and minority
    /// labels. Ties keep the label listed first in the value space.
    pub fn recount_major_minor(&mut self) {
        self.count_value_spaces();

        let vs = self.class_value_space();
        let mut max_idx: Option<usize> = None;
        let mut min_idx: Option<usize> = None;
        for (i, &n) in self.counts.iter().enumerate() {
            if max_idx.map_or(true, |m| n > self.counts[m]) {
                max_idx = Some(i);
            }
            if min_idx.map_or(true, |m| n < self.counts[m]) {
                min_idx = Some(i);
            }
        }

        if let Some(m) = max_idx {
            self.major = vs[m].clone();
        }
        if let Some(m) = min_idx {
            self.minor = vs[m].clone();
        }
    }

    /// Per-label counts from the last recount.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[inline]
    pub fn majority_class(&self) -> &str {
        &self.major
    }

    pub fn set_majority_class(&mut self, label: &str) {
        self.major = label.to_owned();
    }

    #[inline]
    pub fn minority_class(&self) -> &str {
        &self.minor
    }

    pub fn set_minority_class(&mut self, label: &str) {
        self.minor = label.to_owned();
    }

    /// The single class value shared by every row, or `None` when the
    /// class values differ or the dataset is empty.
    pub fn single_class(&mut self) -> Option<String> {
        let labels = self.class_as_texts();
        let first = labels.first()?;
        if labels.iter().all(|label| label == first) {
            Some(first.clone())
        } else {
            None
        }
    }

    /// A class dataset with the same schema, class designation, and
    /// majority/minority labels, and no data or counts.
    pub fn clone_schema(&self) -> ClassDataset {
        ClassDataset {
            dataset: self.dataset.clone_schema(),
            class_index: self.class_index,
            major: self.major.clone(),
            minor: self.minor.clone(),
            ..ClassDataset::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetMode;
    use crate::row::Row;
    use crate::value::{Value, ValueType};

    fn labeled() -> ClassDataset {
        let mut ds = Dataset::new(DatasetMode::Matrix);
        ds.add_column(ValueType::Integer, "id", &[]);
        ds.add_column(ValueType::Text, "class", &["+", "-"]);
        for (id, class) in [(1, "+"), (2, "-"), (3, "+"), (4, "+")] {
            ds.push_row(Row::from_values(vec![
                Value::Integer(id),
                Value::from(class),
            ]));
        }
        ClassDataset::new(ds, 1)
    }

    #[test]
    fn majority_and_minority() {
        let mut cs = labeled();
        cs.recount_major_minor();

        assert_eq!(cs.counts(), &[3, 1]);
        assert_eq!(cs.majority_class(), "+");
        assert_eq!(cs.minority_class(), "-");
        assert_eq!(cs.len(), 4);
    }

    #[test]
    fn single_class_detection() {
        let mut cs = labeled();
        assert_eq!(cs.single_class(), None);

        let mut ds = Dataset::new(DatasetMode::Matrix);
        ds.add_column(ValueType::Text, "class", &["x"]);
        for _ in 0..3 {
            ds.push_row(Row::from_values(vec![Value::from("x")]));
        }
        let mut uniform = ClassDataset::new(ds, 0);
        assert_eq!(uniform.single_class(), Some("x".to_owned()));

        let mut empty = ClassDataset::new(Dataset::new(DatasetMode::Matrix), 0);
        assert_eq!(empty.single_class(), None);
    }

    #[test]
    fn value_space_handles_bad_index() {
        let cs = ClassDataset::new(Dataset::new(DatasetMode::Matrix), 7);
        assert!(cs.class_value_space().is_empty());
    }

    #[test]
    fn schema_clone_keeps_class_designation() {
        let mut cs = labeled();
        cs.recount_major_minor();
        let clone = cs.clone_schema();

        assert_eq!(clone.class_index(), 1);
        assert!(clone.is_empty());
        assert!(clone.counts().is_empty());
        assert_eq!(clone.majority_class(), "+");
        assert_eq!(clone.class_value_space(), vec!["+", "-"]);
    }
}
