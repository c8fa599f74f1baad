//! Mode-aware dataset container with dual row/column storage.
//!
//! [`Dataset`] owns a row collection and a column collection and keeps them
//! positionally consistent under every mutation. Its [`DatasetMode`] decides
//! which representation is authoritative: row-major, column-major, or both at
//! once. The two representations are never aliased views of one buffer;
//! every operation that must keep both current writes to both explicitly.

use log::trace;
use ndarray::{Array2, ArrayView2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::column::{Column, Columns};
use crate::error::DatasetError;
use crate::row::{Row, Rows};
use crate::value::{Value, ValueType, MISSING_REAL};

/// Storage layout of a [`Dataset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetMode {
    /// Row-major only; the column collection holds schema but no values.
    Rows,
    /// Column-major only; the row collection stays empty.
    Columns,
    /// Both representations populated and kept in sync.
    #[default]
    Matrix,
}

/// Split argument for [`Dataset::split_rows_by_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitValue<'a> {
    /// Threshold for a numeric column; rows with value below it go left.
    Numeric(f64),
    /// Label set for a text column; rows matching any label go left.
    Categorical(&'a [&'a str]),
}

/// The in-memory table.
///
/// # Example
///
/// ```
/// use tabular::{Dataset, DatasetMode, Row, Value, ValueType};
///
/// let mut ds = Dataset::with_schema(
///     DatasetMode::Matrix,
///     &[ValueType::Integer, ValueType::Text],
///     &["id", "label"],
/// );
/// ds.push_row(Row::from_values(vec![Value::Integer(1), Value::from("spam")]));
/// ds.push_row(Row::from_values(vec![Value::Integer(2), Value::from("ham")]));
///
/// assert_eq!(ds.n_rows(), 2);
/// assert_eq!(ds.n_columns(), 2);
/// assert_eq!(ds.column_names(), vec!["id", "label"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    mode: DatasetMode,
    columns: Columns,
    rows: Rows,
}

impl Dataset {
    /// Creates an empty dataset in `mode`.
    pub fn new(mode: DatasetMode) -> Dataset {
        let mut ds = Dataset::default();
        ds.set_mode(mode);
        ds
    }

    /// Creates an empty dataset with a column schema.
    ///
    /// Surplus names beyond `types.len()` are dropped; missing names leave
    /// columns unnamed.
    pub fn with_schema(mode: DatasetMode, types: &[ValueType], names: &[&str]) -> Dataset {
        let mut ds = Dataset::default();
        ds.columns = Columns::from_types(types);
        ds.set_column_names(names);
        ds.set_mode(mode);
        ds
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn mode(&self) -> DatasetMode {
        self.mode
    }

    /// Number of columns. Row-major data without a materialized schema
    /// reports the first row's width.
    pub fn n_columns(&self) -> usize {
        if !self.columns.is_empty() {
            return self.columns.len();
        }
        match self.mode {
            DatasetMode::Rows => self.rows.first().map_or(0, Row::len),
            _ => 0,
        }
    }

    /// Number of rows, read from whichever representation the mode keeps
    /// populated.
    pub fn n_rows(&self) -> usize {
        match self.mode {
            DatasetMode::Columns => self.columns.first().map_or(0, Column::len),
            _ => self.rows.len(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n_rows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw view of the row collection.
    #[inline]
    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Raw view of the column collection.
    #[inline]
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Renames the first `min(n_columns, names.len())` columns. With no
    /// columns yet, allocates unnamed text columns to hold the names.
    pub fn set_column_names(&mut self, names: &[&str]) {
        if names.is_empty() {
            return;
        }
        if self.columns.is_empty() {
            self.columns = Columns(vec![Column::default(); names.len()]);
        }
        let n = self.columns.len().min(names.len());
        for x in 0..n {
            self.columns.0[x].set_name(names[x]);
        }
    }

    pub fn column_types(&self) -> Vec<ValueType> {
        self.columns.iter().map(Column::value_type).collect()
    }

    /// Replaces the whole schema with empty columns of `types`.
    pub fn set_column_types(&mut self, types: &[ValueType]) {
        self.columns = Columns::from_types(types);
    }

    /// Type of the column at `idx`.
    ///
    /// # Errors
    ///
    /// [`DatasetError::ColumnIndexOutOfRange`] when `idx` does not name a
    /// column.
    pub fn column_type_at(&self, idx: usize) -> Result<ValueType, DatasetError> {
        match self.columns.get(idx) {
            Some(col) => Ok(col.value_type()),
            None => Err(DatasetError::ColumnIndexOutOfRange {
                index: idx,
                len: self.columns.len(),
            }),
        }
    }

    /// Types of the columns selected by `indices`, in selection order.
    ///
    /// # Errors
    ///
    /// [`DatasetError::ColumnLengthMismatch`] when an entry does not name a
    /// column.
    pub fn column_types_at(&self, indices: &[usize]) -> Result<Vec<ValueType>, DatasetError> {
        let len = self.columns.len();
        indices
            .iter()
            .map(|&idx| {
                self.columns
                    .get(idx)
                    .map(Column::value_type)
                    .ok_or(DatasetError::ColumnLengthMismatch { index: idx, len })
            })
            .collect()
    }

    /// Index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name() == name)
    }

    /// The column at `idx`. Row-major data transposes to column-major
    /// first, and the dataset stays in column mode afterwards.
    pub fn column(&mut self, idx: usize) -> Option<&Column> {
        if self.mode == DatasetMode::Rows {
            self.transpose_to_columns();
        }
        self.columns.get(idx)
    }

    /// The first column named `name`. Transposes like [`Dataset::column`].
    pub fn column_by_name(&mut self, name: &str) -> Option<&Column> {
        if self.mode == DatasetMode::Rows {
            self.transpose_to_columns();
        }
        self.columns.iter().find(|col| col.name() == name)
    }

    /// The rows, transposing out of column mode first if needed.
    pub fn data_as_rows(&mut self) -> &Rows {
        if self.mode == DatasetMode::Columns {
            self.transpose_to_rows();
        }
        &self.rows
    }

    /// The columns, transposing out of row mode first if needed.
    pub fn data_as_columns(&mut self) -> &Columns {
        if self.mode == DatasetMode::Rows {
            self.transpose_to_columns();
        }
        &self.columns
    }

    /// A dataset with the same mode and column schema, and no data.
    pub fn clone_schema(&self) -> Dataset {
        let mut clone = Dataset::new(self.mode);
        clone.columns = self.columns.iter().map(Column::clone_schema).collect();
        clone
    }

    /// Drops all values from both representations, keeping mode and schema.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.columns.reset();
    }

    // =========================================================================
    // Mode & transpose
    // =========================================================================

    /// Switches the storage mode, clearing whichever representation the new
    /// mode makes authoritative.
    pub fn set_mode(&mut self, mode: DatasetMode) {
        match mode {
            DatasetMode::Rows => self.rows.clear(),
            DatasetMode::Columns => self.columns.reset(),
            DatasetMode::Matrix => {
                self.rows.clear();
                self.columns.reset();
            }
        }
        self.mode = mode;
    }

    /// Copies row data into the column collection.
    ///
    /// No-op with zero rows. Without a schema, column count and types are
    /// inferred from the first row. Rows wider than the schema are clamped
    /// to the schema width. In column or matrix mode, columns that already
    /// hold data mean the table is already transposed and nothing happens.
    /// A row-major dataset switches to column mode and drops its rows;
    /// matrix mode keeps both representations.
    pub fn transpose_to_columns(&mut self) {
        if self.n_rows() == 0 {
            return;
        }

        if self.columns.is_empty() {
            let types = self.rows.0[0].types();
            self.columns = Columns::from_types(&types);
        }

        let orgmode = self.mode;

        match orgmode {
            DatasetMode::Rows => {}
            DatasetMode::Columns | DatasetMode::Matrix => {
                if self.columns.first().is_some_and(|col| !col.is_empty()) {
                    return;
                }
            }
        }

        let width = self.rows.0[0].len().min(self.columns.len());

        if orgmode == DatasetMode::Rows {
            self.set_mode(DatasetMode::Columns);
        }

        for row in &self.rows.0 {
            for (c, cell) in row.cells().iter().take(width).enumerate() {
                self.columns.0[c].push_cell(cell.clone());
            }
        }

        if orgmode == DatasetMode::Rows {
            self.rows.clear();
        }
    }

    /// Rebuilds the row collection from column data.
    ///
    /// No-op in row mode. The row count is the shortest column length, so
    /// unevenly populated columns never produce ragged rows. A column-major
    /// dataset switches to row mode and drops its column values (schema
    /// stays); matrix mode keeps both representations.
    pub fn transpose_to_rows(&mut self) {
        let orgmode = self.mode;

        if orgmode == DatasetMode::Rows {
            return;
        }

        if orgmode == DatasetMode::Columns {
            self.set_mode(DatasetMode::Rows);
        }

        let (rowlen, _) = self.columns.min_max_len();

        let mut rows = Rows::new();
        for r in 0..rowlen {
            let mut row = Row::new();
            for col in &self.columns.0 {
                row.push_cell(col.values()[r].clone());
            }
            rows.push(row);
        }
        self.rows = rows;

        if orgmode == DatasetMode::Columns {
            self.columns.reset();
        }
    }

    // =========================================================================
    // Push & merge
    // =========================================================================

    /// Appends a row into whichever representations the mode keeps.
    pub fn push_row(&mut self, row: Row) {
        match self.mode {
            DatasetMode::Rows => self.rows.push(row),
            DatasetMode::Columns => self.push_row_to_columns(&row),
            DatasetMode::Matrix => {
                self.push_row_to_columns(&row);
                self.rows.push(row);
            }
        }
    }

    /// Decomposes `row` into the column collection by position. Infers the
    /// schema from the row if none exists; clamps to the shorter width.
    fn push_row_to_columns(&mut self, row: &Row) {
        if row.is_empty() {
            return;
        }

        if self.columns.is_empty() {
            self.columns = Columns::from_types(&row.types());
        }

        let n = row.len().min(self.columns.len());
        for (c, cell) in row.cells().iter().take(n).enumerate() {
            self.columns.0[c].push_cell(cell.clone());
        }
    }

    /// Appends a column, merging by name.
    ///
    /// A column whose name already exists has its values appended to the
    /// existing column (column and matrix mode; in matrix mode the rows are
    /// left untouched) or used to fill the existing rows' empty slots at
    /// that index (row mode), with surplus values opening new rows that are
    /// empty everywhere else. A new name is appended as a new column; in
    /// row and matrix mode its values also fan out across the rows.
    pub fn push_column(&mut self, mut col: Column) {
        let existing = self.column_index(col.name());

        match (self.mode, existing) {
            (DatasetMode::Rows, Some(idx)) => self.fill_rows_with_column(idx, col),
            (DatasetMode::Rows, None) => {
                self.push_column_to_rows(&col);
                col.reset();
                self.columns.push(col);
            }
            (DatasetMode::Columns, Some(idx)) | (DatasetMode::Matrix, Some(idx)) => {
                self.columns.0[idx].push_cells(col.values);
            }
            (DatasetMode::Columns, None) => self.columns.push(col),
            (DatasetMode::Matrix, None) => {
                self.push_column_to_rows(&col);
                self.columns.push(col);
            }
        }
    }

    /// Writes `col`'s values into the rows' empty slots at `col_idx`, top
    /// to bottom. Values left over after every row is filled open new rows
    /// holding only the slot at `col_idx`.
    fn fill_rows_with_column(&mut self, col_idx: usize, col: Column) {
        let cells = col.values;
        let mut v = 0;

        for row in &mut self.rows.0 {
            if v >= cells.len() {
                break;
            }
            if row.is_empty_at(col_idx) {
                if row.cells.len() <= col_idx {
                    row.cells.resize(col_idx + 1, None);
                }
                row.cells[col_idx] = cells[v].clone();
                v += 1;
            }
        }

        let width = self.n_columns();
        while v < cells.len() {
            let mut row = Row::with_len(width);
            row.set_cell(col_idx, cells[v].clone());
            self.rows.push(row);
            v += 1;
        }
    }

    /// Fans `col`'s values out across the rows, one value per row from the
    /// top. With no rows yet, each value opens a single-cell row.
    fn push_column_to_rows(&mut self, col: &Column) {
        let colsize = col.len();
        if colsize == 0 {
            return;
        }

        let mut nrow = self.n_rows();
        if nrow == 0 {
            self.rows.0 = vec![Row::new(); colsize];
            nrow = colsize;
        }

        let minrow = nrow.min(colsize);
        for x in 0..minrow {
            self.rows.0[x].push_cell(col.values()[x].clone());
        }
    }

    /// Creates an empty column and appends it via [`Dataset::push_column`].
    pub fn add_column(&mut self, value_type: ValueType, name: &str, value_space: &[&str]) {
        self.push_column(Column::with_value_space(value_type, name, value_space));
    }

    /// Appends every column of `other`, merging by name.
    pub fn merge_columns(&mut self, mut other: Dataset) {
        if other.mode == DatasetMode::Rows {
            other.transpose_to_columns();
        }
        for col in other.columns.0 {
            self.push_column(col);
        }
    }

    /// Appends every row of `other`.
    pub fn merge_rows(&mut self, mut other: Dataset) {
        if other.mode == DatasetMode::Columns {
            other.transpose_to_rows();
        }
        for row in other.rows.0 {
            self.push_row(row);
        }
    }

    // =========================================================================
    // Split & select
    // =========================================================================

    /// Type of the split column, without transposing. Row-major data
    /// without a schema falls back to the first row's cell type.
    fn column_type_for_split(&self, col_idx: usize) -> Result<ValueType, DatasetError> {
        if col_idx >= self.n_columns() {
            return Err(DatasetError::ColumnIndexOutOfRange {
                index: col_idx,
                len: self.n_columns(),
            });
        }
        if let Some(col) = self.columns.get(col_idx) {
            return Ok(col.value_type());
        }
        Ok(self
            .rows
            .first()
            .and_then(|row| row.get(col_idx))
            .map_or(ValueType::Text, Value::value_type))
    }

    /// Partitions the rows around a numeric threshold.
    ///
    /// Rows whose value at `col_idx` converts below `threshold` land in the
    /// first returned dataset, all others in the second. Empty cells
    /// convert to negative infinity and therefore land in the first. The
    /// partition keeps the original relative order, and the dataset's mode
    /// is restored before returning.
    ///
    /// # Errors
    ///
    /// [`DatasetError::ColumnIndexOutOfRange`] or
    /// [`DatasetError::InvalidColumnType`] when `col_idx` does not name a
    /// numeric column. On error the dataset is left untouched.
    pub fn split_rows_by_numeric(
        &mut self,
        col_idx: usize,
        threshold: f64,
    ) -> Result<(Dataset, Dataset), DatasetError> {
        let coltype = self.column_type_for_split(col_idx)?;
        if !coltype.is_numeric() {
            return Err(DatasetError::InvalidColumnType {
                expected: "integer or real",
                got: coltype,
            });
        }

        let orgmode = self.mode;
        if orgmode == DatasetMode::Columns {
            self.transpose_to_rows();
        }

        trace!("splitting column {col_idx} at {threshold}");

        let mut split_less = self.clone_schema();
        let mut split_greater = self.clone_schema();

        for row in &self.rows.0 {
            let key = row.get(col_idx).map_or(MISSING_REAL, Value::to_float);
            if key < threshold {
                split_less.push_row(row.clone());
            } else {
                split_greater.push_row(row.clone());
            }
        }

        trace!(
            "split sizes: {} below, {} at or above",
            split_less.n_rows(),
            split_greater.n_rows()
        );

        match orgmode {
            DatasetMode::Columns => {
                self.transpose_to_columns();
                split_less.transpose_to_columns();
                split_greater.transpose_to_columns();
            }
            DatasetMode::Matrix => {
                split_less.transpose_to_columns();
                split_greater.transpose_to_columns();
            }
            DatasetMode::Rows => {}
        }

        Ok((split_less, split_greater))
    }

    /// Partitions the rows by membership in a label set.
    ///
    /// Rows whose rendered text at `col_idx` equals any of `labels` land in
    /// the first returned dataset, all others in the second. Order and mode
    /// behave as in [`Dataset::split_rows_by_numeric`].
    ///
    /// # Errors
    ///
    /// [`DatasetError::ColumnIndexOutOfRange`] or
    /// [`DatasetError::InvalidColumnType`] when `col_idx` does not name a
    /// text column. On error the dataset is left untouched.
    pub fn split_rows_by_categorical(
        &mut self,
        col_idx: usize,
        labels: &[&str],
    ) -> Result<(Dataset, Dataset), DatasetError> {
        let coltype = self.column_type_for_split(col_idx)?;
        if !coltype.is_text() {
            return Err(DatasetError::InvalidColumnType {
                expected: "text",
                got: coltype,
            });
        }

        let orgmode = self.mode;
        if orgmode == DatasetMode::Columns {
            self.transpose_to_rows();
        }

        trace!("splitting column {col_idx} by {labels:?}");

        let mut split_in = self.clone_schema();
        let mut split_ex = self.clone_schema();

        for row in &self.rows.0 {
            let found = row
                .get(col_idx)
                .is_some_and(|value| labels.iter().any(|label| value.text_eq(label)));
            if found {
                split_in.push_row(row.clone());
            } else {
                split_ex.push_row(row.clone());
            }
        }

        match orgmode {
            DatasetMode::Columns => {
                self.transpose_to_columns();
                split_in.transpose_to_columns();
                split_ex.transpose_to_columns();
            }
            DatasetMode::Matrix => {
                split_in.transpose_to_columns();
                split_ex.transpose_to_columns();
            }
            DatasetMode::Rows => {}
        }

        Ok((split_in, split_ex))
    }

    /// Dispatches to the numeric or categorical split on the variant of
    /// `value`.
    ///
    /// # Errors
    ///
    /// Whatever the dispatched split returns.
    pub fn split_rows_by_value(
        &mut self,
        col_idx: usize,
        value: SplitValue<'_>,
    ) -> Result<(Dataset, Dataset), DatasetError> {
        match value {
            SplitValue::Numeric(threshold) => self.split_rows_by_numeric(col_idx, threshold),
            SplitValue::Categorical(labels) => self.split_rows_by_categorical(col_idx, labels),
        }
    }

    /// Projects a new dataset holding the columns named by `indices`, in
    /// that order. Out-of-range indices are skipped. The dataset's mode is
    /// restored before returning.
    pub fn select_columns_by_index(&mut self, indices: &[usize]) -> Dataset {
        let orgmode = self.mode;
        if orgmode == DatasetMode::Rows {
            self.transpose_to_columns();
        }

        let mut selected = Dataset::new(self.mode);

        // Columns append directly instead of merging by name, so selecting
        // two columns that share a name keeps them separate.
        for &idx in indices {
            if let Some(col) = self.columns.get(idx) {
                let col = col.clone();
                if selected.mode == DatasetMode::Matrix {
                    selected.push_column_to_rows(&col);
                }
                selected.columns.push(col);
            }
        }

        if orgmode == DatasetMode::Rows {
            self.transpose_to_rows();
            selected.transpose_to_rows();
        }

        selected
    }

    /// Selects all rows whose rendered text at `col_idx` equals `value`,
    /// preserving order, as a new dataset with this dataset's schema. The
    /// dataset's mode is restored before returning.
    pub fn select_rows_where(&mut self, col_idx: usize, value: &str) -> Dataset {
        let orgmode = self.mode;
        if orgmode == DatasetMode::Columns {
            self.transpose_to_rows();
        }

        let mut selected = self.clone_schema();
        selected.rows = self.rows.select_where(col_idx, value);

        match orgmode {
            DatasetMode::Columns => {
                self.transpose_to_columns();
                selected.transpose_to_columns();
            }
            DatasetMode::Matrix => {
                selected.transpose_to_columns();
            }
            DatasetMode::Rows => {}
        }

        selected
    }

    /// Reorders every column (and, in matrix mode, the rows) so position
    /// `i` holds the value previously at `sorted_idx[i]`. Row-major data
    /// transposes to column-major first and stays there.
    ///
    /// # Panics
    ///
    /// When an index in `sorted_idx` is out of range for the data.
    pub fn sort_columns_by_index(&mut self, sorted_idx: &[usize]) {
        if self.mode == DatasetMode::Rows {
            self.transpose_to_columns();
        }

        for col in &mut self.columns.0 {
            col.sort_values_by_index(sorted_idx);
        }

        if self.mode == DatasetMode::Matrix && !self.rows.is_empty() {
            self.rows = Rows(crate::sort::sort_by_index(&self.rows.0, sorted_idx));
        }
    }

    // =========================================================================
    // Sampling
    // =========================================================================

    /// Draws `n` rows uniformly, returning the picked and unpicked rows as
    /// full datasets together with their original indices. Without
    /// replacement `n` clamps to the row count. The dataset's mode is
    /// restored before returning, and both outputs share it.
    pub fn random_pick_rows<R: Rng>(
        &mut self,
        rng: &mut R,
        n: usize,
        with_replacement: bool,
    ) -> (Dataset, Dataset, Vec<usize>, Vec<usize>) {
        let orgmode = self.mode;
        if orgmode == DatasetMode::Columns {
            self.transpose_to_rows();
        }

        let mut picked = self.clone_schema();
        let mut unpicked = self.clone_schema();

        let (picked_rows, unpicked_rows, picked_idx, unpicked_idx) =
            self.rows.random_pick(rng, n, with_replacement);
        picked.rows = picked_rows;
        unpicked.rows = unpicked_rows;

        match orgmode {
            DatasetMode::Columns => {
                self.transpose_to_columns();
                picked.transpose_to_columns();
                unpicked.transpose_to_columns();
            }
            DatasetMode::Matrix => {
                picked.transpose_to_columns();
                unpicked.transpose_to_columns();
            }
            DatasetMode::Rows => {}
        }

        (picked, unpicked, picked_idx, unpicked_idx)
    }

    /// Draws `n` columns uniformly, never drawing indices in `exclude`
    /// (e.g. a label column). Returns the picked and unpicked columns as
    /// full datasets together with their original indices. Without
    /// replacement `n` clamps to the number of pickable columns. The
    /// dataset's mode is restored before returning, and both outputs share
    /// it.
    pub fn random_pick_columns<R: Rng>(
        &mut self,
        rng: &mut R,
        n: usize,
        with_replacement: bool,
        exclude: &[usize],
    ) -> (Dataset, Dataset, Vec<usize>, Vec<usize>) {
        let orgmode = self.mode;
        if orgmode == DatasetMode::Rows {
            self.transpose_to_columns();
        }

        let mut picked = Dataset::new(self.mode);
        let mut unpicked = Dataset::new(self.mode);

        let (picked_cols, unpicked_cols, picked_idx, unpicked_idx) =
            self.columns.random_pick(rng, n, with_replacement, exclude);
        picked.columns = picked_cols;
        unpicked.columns = unpicked_cols;

        match orgmode {
            DatasetMode::Rows => {
                self.transpose_to_rows();
                picked.transpose_to_rows();
                unpicked.transpose_to_rows();
            }
            DatasetMode::Matrix => {
                picked.transpose_to_rows();
                unpicked.transpose_to_rows();
            }
            DatasetMode::Columns => {}
        }

        (picked, unpicked, picked_idx, unpicked_idx)
    }

    // =========================================================================
    // Matrix interchange
    // =========================================================================

    /// Copies the table into a feature-major `[n_columns, n_rows]` float
    /// matrix. Text converts with the lossy missing-value policy; empty
    /// cells map to [`MISSING_REAL`]. The row count is the shortest column
    /// length. The dataset's mode is restored before returning.
    pub fn to_float_matrix(&mut self) -> Array2<f64> {
        let orgmode = self.mode;
        if orgmode == DatasetMode::Rows {
            self.transpose_to_columns();
        }

        let n_cols = self.columns.len();
        let (n_rows, _) = self.columns.min_max_len();

        let mut matrix = Array2::zeros((n_cols, n_rows));
        for (c, col) in self.columns.iter().enumerate() {
            for (r, cell) in col.values().iter().take(n_rows).enumerate() {
                matrix[[c, r]] = cell.as_ref().map_or(MISSING_REAL, Value::to_float);
            }
        }

        if orgmode == DatasetMode::Rows {
            self.transpose_to_rows();
        }

        matrix
    }

    /// Builds a matrix-mode dataset from a feature-major
    /// `[n_columns, n_rows]` float matrix, one real column per matrix row.
    pub fn from_float_matrix(features: ArrayView2<'_, f64>) -> Dataset {
        let mut ds = Dataset::new(DatasetMode::Matrix);
        ds.columns = Columns::from_types(&vec![ValueType::Real; features.nrows()]);

        for (c, feature) in features.rows().into_iter().enumerate() {
            for &v in feature.iter() {
                ds.columns.0[c].push(Value::Real(v));
            }
        }

        ds.transpose_to_rows();
        ds
    }
}
