//! tabular: an in-memory tabular dataset engine.
//!
//! A typed table that can be stored row-major, column-major, or in both
//! representations at once, with operations to transpose between layouts,
//! partition rows by value, subsample rows and columns, and sort columns
//! through an index-carrying merge sort.
//!
//! # Key Types
//!
//! - [`Dataset`] / [`DatasetMode`] - The mode-aware table and its layouts
//! - [`Row`] / [`Column`] - The two cell containers
//! - [`Value`] / [`ValueType`] - Typed scalar cells
//! - [`ClassDataset`] - Dataset with a designated class column
//! - [`SchemaConfig`] - JSON schema loader
//!
//! # Example
//!
//! ```
//! use tabular::{Dataset, DatasetMode, Row, Value, ValueType};
//!
//! let mut ds = Dataset::with_schema(
//!     DatasetMode::Matrix,
//!     &[ValueType::Integer, ValueType::Text],
//!     &["size", "class"],
//! );
//! for (size, class) in [(42, "spam"), (7, "ham"), (1024, "spam")] {
//!     ds.push_row(Row::from_values(vec![
//!         Value::Integer(size),
//!         Value::from(class),
//!     ]));
//! }
//!
//! let (small, large) = ds.split_rows_by_numeric(0, 10.0)?;
//! assert_eq!(small.n_rows(), 1);
//! assert_eq!(large.n_rows(), 2);
//! # Ok::<(), tabular::DatasetError>(())
//! ```

pub mod claset;
pub mod column;
pub mod dataset;
pub mod error;
pub mod row;
pub mod sampling;
pub mod schema;
pub mod sort;
pub mod value;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// The table and its layouts
pub use dataset::{Dataset, DatasetMode, SplitValue};

// Cell containers
pub use column::{Column, Columns};
pub use row::{Row, RowGroup, RowGroups, Rows};

// Typed scalar cells
pub use value::{Value, ValueType, MISSING_INTEGER, MISSING_REAL, MISSING_TEXT};

// Errors
pub use error::DatasetError;

// Class-attribute wrapper
pub use claset::ClassDataset;

// Schema configuration
pub use schema::{ColumnSpec, SchemaConfig, SchemaError};

// Algorithms
pub use sampling::random_pick;
pub use sort::{indirect_sort, sort_by_index};
