//! Row-major storage: single rows, row collections, and keyed row groups.

use std::ops::Deref;

use rand::Rng;

use crate::sampling;
use crate::value::{Value, ValueType};

/// One tuple of cells, positionally aligned with a dataset's columns.
///
/// A cell is `None` when the slot has never been written, which is distinct
/// from holding a missing-value sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub(crate) cells: Vec<Option<Value>>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Row {
        Row::default()
    }

    /// Creates a row of `len` empty cells.
    pub fn with_len(len: usize) -> Row {
        Row {
            cells: vec![None; len],
        }
    }

    /// Builds a fully populated row.
    pub fn from_values(values: Vec<Value>) -> Row {
        Row {
            cells: values.into_iter().map(Some).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Appends a value.
    pub fn push(&mut self, value: Value) {
        self.cells.push(Some(value));
    }

    /// Appends a raw cell, possibly empty.
    pub fn push_cell(&mut self, cell: Option<Value>) {
        self.cells.push(cell);
    }

    /// The value at `idx`, if the slot exists and is populated.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.cells.get(idx).and_then(Option::as_ref)
    }

    /// Raw view of the cell storage.
    #[inline]
    pub fn cells(&self) -> &[Option<Value>] {
        &self.cells
    }

    /// Overwrites the cell at `idx`. Out-of-range indices are ignored.
    pub fn set_cell(&mut self, idx: usize, cell: Option<Value>) {
        if let Some(slot) = self.cells.get_mut(idx) {
            *slot = cell;
        }
    }

    /// Integer view of the value at `idx`.
    pub fn int_at(&self, idx: usize) -> Option<i64> {
        self.get(idx).map(Value::to_integer)
    }

    /// Rendered text of the cell at `idx`; empty and out-of-range slots
    /// render empty.
    pub fn text_at(&self, idx: usize) -> String {
        self.get(idx).map(ToString::to_string).unwrap_or_default()
    }

    /// True when `idx` is out of range or the slot is empty.
    pub fn is_empty_at(&self, idx: usize) -> bool {
        idx >= self.cells.len() || self.cells[idx].is_none()
    }

    /// The scalar types of the cells, in order. Empty cells read as text.
    pub fn types(&self) -> Vec<ValueType> {
        self.cells
            .iter()
            .map(|c| c.as_ref().map_or(ValueType::Text, Value::value_type))
            .collect()
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Row {
        Row {
            cells: iter.into_iter().map(Some).collect(),
        }
    }
}

/// A sequence of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rows(pub(crate) Vec<Row>);

impl Rows {
    pub fn new() -> Rows {
        Rows::default()
    }

    /// Appends a row.
    pub fn push(&mut self, row: Row) {
        self.0.push(row);
    }

    /// Drops every row.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Removes and returns the first row.
    pub fn pop_front(&mut self) -> Option<Row> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    /// Like [`Rows::pop_front`], wrapping the result in a collection of its
    /// own (empty when there was nothing left to pop).
    pub fn pop_front_as_rows(&mut self) -> Rows {
        let mut rows = Rows::new();
        if let Some(row) = self.pop_front() {
            rows.push(row);
        }
        rows
    }

    /// Removes the row at `idx`, shifting the remainder left.
    pub fn remove(&mut self, idx: usize) -> Option<Row> {
        if idx < self.0.len() {
            Some(self.0.remove(idx))
        } else {
            None
        }
    }

    /// Position of the first row equal to `row`.
    pub fn position(&self, row: &Row) -> Option<usize> {
        self.0.iter().position(|r| r == row)
    }

    /// Positions of every row of `other` inside `self`, or `None` as soon
    /// as one of them is absent.
    pub fn contains_all(&self, other: &Rows) -> Option<Vec<usize>> {
        other.iter().map(|row| self.position(row)).collect()
    }

    /// Groups rows by the rendered text of the cell at `col_idx`, keeping
    /// first-seen key order.
    pub fn group_by_value(&self, col_idx: usize) -> RowGroups {
        let mut groups = RowGroups::default();
        for row in &self.0 {
            groups.add_row(row.text_at(col_idx), row.clone());
        }
        groups
    }

    /// Copies of the rows whose cell at `col_idx` renders equal to `text`.
    pub fn select_where(&self, col_idx: usize, text: &str) -> Rows {
        Rows(
            self.0
                .iter()
                .filter(|row| row.text_at(col_idx) == text)
                .cloned()
                .collect(),
        )
    }

    /// Draws `n` rows uniformly. Without replacement `n` clamps to the row
    /// count. Returns the picked and unpicked rows together with their
    /// original indices; unpicked rows keep their original order.
    pub fn random_pick<R: Rng>(
        &self,
        rng: &mut R,
        n: usize,
        with_replacement: bool,
    ) -> (Rows, Rows, Vec<usize>, Vec<usize>) {
        let (picked_idx, unpicked_idx) =
            sampling::random_pick(rng, self.0.len(), n, with_replacement, &[]);
        let picked = Rows(picked_idx.iter().map(|&i| self.0[i].clone()).collect());
        let unpicked = Rows(unpicked_idx.iter().map(|&i| self.0[i].clone()).collect());
        (picked, unpicked, picked_idx, unpicked_idx)
    }
}

impl Deref for Rows {
    type Target = [Row];

    fn deref(&self) -> &[Row] {
        &self.0
    }
}

impl From<Vec<Row>> for Rows {
    fn from(rows: Vec<Row>) -> Rows {
        Rows(rows)
    }
}

impl FromIterator<Row> for Rows {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Rows {
        Rows(iter.into_iter().collect())
    }
}

/// One key's worth of grouped rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowGroup {
    pub key: String,
    pub rows: Rows,
}

/// Rows grouped by a shared key, in first-seen key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowGroups(Vec<RowGroup>);

impl RowGroups {
    /// Adds `row` to the group for `key`, opening a new group when the key
    /// is unseen.
    pub fn add_row(&mut self, key: String, row: Row) {
        for group in &mut self.0 {
            if group.key == key {
                group.rows.push(row);
                return;
            }
        }
        let mut rows = Rows::new();
        rows.push(row);
        self.0.push(RowGroup { key, rows });
    }

    /// The group holding the fewest rows; the earliest one on ties.
    pub fn minority(&self) -> Option<&RowGroup> {
        self.0
            .iter()
            .reduce(|min, g| if g.rows.len() < min.rows.len() { g } else { min })
    }
}

impl Deref for RowGroups {
    type Target = [RowGroup];

    fn deref(&self) -> &[RowGroup] {
        &self.0
    }
}
