//! Column-major storage: typed columns and the column collection.

use std::ops::Deref;

use rand::Rng;

use crate::error::DatasetError;
use crate::sampling;
use crate::value::{Value, ValueType, MISSING_REAL};

/// A named, typed sequence of cells.
///
/// The value space lists the values the column may legally take (categorical
/// splits and class counting read it); it is metadata, not enforced on
/// writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) value_type: ValueType,
    pub(crate) flag: u32,
    pub(crate) value_space: Vec<String>,
    pub(crate) values: Vec<Option<Value>>,
}

impl Column {
    /// Creates an empty column.
    pub fn new(value_type: ValueType, name: &str) -> Column {
        Column {
            name: name.to_owned(),
            value_type,
            ..Column::default()
        }
    }

    /// Creates an empty column with a declared value space.
    pub fn with_value_space(value_type: ValueType, name: &str, value_space: &[&str]) -> Column {
        Column {
            name: name.to_owned(),
            value_type,
            value_space: value_space.iter().map(|s| (*s).to_owned()).collect(),
            ..Column::default()
        }
    }

    /// Builds a column by parsing raw text entries as `value_type`.
    ///
    /// # Errors
    ///
    /// Fails with [`DatasetError::ScalarParseFailure`] on the first entry
    /// that does not parse.
    pub fn with_texts(
        value_type: ValueType,
        name: &str,
        texts: &[&str],
    ) -> Result<Column, DatasetError> {
        let mut col = Column::new(value_type, name);
        col.values.reserve(texts.len());
        for text in texts {
            col.values.push(Some(Value::parse(text, value_type)?));
        }
        Ok(col)
    }

    /// Builds an integer column from native values.
    pub fn with_integers(name: &str, values: &[i64]) -> Column {
        Column {
            name: name.to_owned(),
            value_type: ValueType::Integer,
            values: values.iter().map(|&v| Some(Value::Integer(v))).collect(),
            ..Column::default()
        }
    }

    /// Builds a real column from native values.
    pub fn with_reals(name: &str, values: &[f64]) -> Column {
        Column {
            name: name.to_owned(),
            value_type: ValueType::Real,
            values: values.iter().map(|&v| Some(Value::Real(v))).collect(),
            ..Column::default()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn set_value_type(&mut self, value_type: ValueType) {
        self.value_type = value_type;
    }

    #[inline]
    pub fn flag(&self) -> u32 {
        self.flag
    }

    pub fn set_flag(&mut self, flag: u32) {
        self.flag = flag;
    }

    #[inline]
    pub fn value_space(&self) -> &[String] {
        &self.value_space
    }

    pub fn set_value_space(&mut self, value_space: &[&str]) {
        self.value_space = value_space.iter().map(|s| (*s).to_owned()).collect();
    }

    /// Raw view of the cell storage.
    #[inline]
    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A column with the same name, type, and value space, and no values.
    pub fn clone_schema(&self) -> Column {
        Column {
            name: self.name.clone(),
            value_type: self.value_type,
            flag: 0,
            value_space: self.value_space.clone(),
            values: Vec::new(),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Appends a value.
    pub fn push(&mut self, value: Value) {
        self.values.push(Some(value));
    }

    /// Appends a raw cell, possibly empty.
    pub fn push_cell(&mut self, cell: Option<Value>) {
        self.values.push(cell);
    }

    /// Appends a batch of raw cells.
    pub fn push_cells(&mut self, cells: Vec<Option<Value>>) {
        self.values.extend(cells);
    }

    /// Clears values and flag, keeping name, type, and value space.
    pub fn reset(&mut self) {
        self.flag = 0;
        self.values.clear();
    }

    /// Overwrites every cell with the type's zero value.
    pub fn clear_values(&mut self) {
        let zero = match self.value_type {
            ValueType::Text => Value::Text(String::new()),
            ValueType::Integer => Value::Integer(0),
            ValueType::Real => Value::Real(0.0),
        };
        for cell in &mut self.values {
            *cell = Some(zero.clone());
        }
    }

    /// Overwrites cells in place by parsing `texts`.
    ///
    /// An empty column first allocates `texts.len()` empty slots; then the
    /// first `min(self.len(), texts.len())` positions are written. Entries
    /// that fail to parse leave their cell unchanged.
    pub fn set_values(&mut self, texts: &[&str]) {
        if self.values.is_empty() {
            self.values = vec![None; texts.len()];
        }
        let n = self.values.len().min(texts.len());
        for x in 0..n {
            if let Ok(value) = Value::parse(texts[x], self.value_type) {
                self.values[x] = Some(value);
            }
        }
    }

    /// Reorders values so position `i` holds the value previously at
    /// `sorted_idx[i]`.
    ///
    /// # Panics
    ///
    /// When an index in `sorted_idx` is out of range.
    pub fn sort_values_by_index(&mut self, sorted_idx: &[usize]) {
        self.values = crate::sort::sort_by_index(&self.values, sorted_idx);
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Float view of the column. Text parses with the lossy missing-value
    /// policy; empty cells map to [`MISSING_REAL`].
    pub fn to_float_vec(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|c| c.as_ref().map_or(MISSING_REAL, Value::to_float))
            .collect()
    }

    /// Rendered text view of the column; empty cells render empty.
    pub fn to_text_vec(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|c| c.as_ref().map_or_else(String::new, ToString::to_string))
            .collect()
    }
}

/// The column collection of a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns(pub(crate) Vec<Column>);

impl Columns {
    pub fn new() -> Columns {
        Columns::default()
    }

    /// One default-named column per type.
    pub fn from_types(types: &[ValueType]) -> Columns {
        Columns(types.iter().map(|&t| Column::new(t, "")).collect())
    }

    /// Appends a column.
    pub fn push(&mut self, column: Column) {
        self.0.push(column);
    }

    /// Resets every column: values and flags go, schema stays.
    pub fn reset(&mut self) {
        for col in &mut self.0 {
            col.reset();
        }
    }

    /// Shortest and longest column lengths, `(0, 0)` with no columns.
    pub fn min_max_len(&self) -> (usize, usize) {
        if self.0.is_empty() {
            return (0, 0);
        }
        self.0
            .iter()
            .fold((usize::MAX, 0), |(lo, hi), col| {
                (lo.min(col.len()), hi.max(col.len()))
            })
    }

    /// Draws `n` columns uniformly, never drawing indices in `exclude`.
    /// Without replacement `n` clamps to the number of pickable columns.
    /// Unpicked columns keep their original order.
    pub fn random_pick<R: Rng>(
        &self,
        rng: &mut R,
        n: usize,
        with_replacement: bool,
        exclude: &[usize],
    ) -> (Columns, Columns, Vec<usize>, Vec<usize>) {
        let (picked_idx, unpicked_idx) =
            sampling::random_pick(rng, self.0.len(), n, with_replacement, exclude);
        let picked = Columns(picked_idx.iter().map(|&i| self.0[i].clone()).collect());
        let unpicked = Columns(unpicked_idx.iter().map(|&i| self.0[i].clone()).collect());
        (picked, unpicked, picked_idx, unpicked_idx)
    }
}

impl Deref for Columns {
    type Target = [Column];

    fn deref(&self) -> &[Column] {
        &self.0
    }
}

impl From<Vec<Column>> for Columns {
    fn from(columns: Vec<Column>) -> Columns {
        Columns(columns)
    }
}

impl FromIterator<Column> for Columns {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Columns {
        Columns(iter.into_iter().collect())
    }
}
