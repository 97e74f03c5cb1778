//! Headless state for the ZeTable data table: rows, column layout, row
//! selection and viewport observation. Nothing here depends on a UI toolkit.

pub mod column;
mod error;
pub mod row;
pub mod selection;
pub mod viewport;

pub use column::{
    CellSource, ColumnSpec, DEFAULT_MIN_WIDTH, ResolvedColumn, TextAlign, resolve_columns, span,
};
pub use error::{Error, Result};
pub use row::{Row, display_value, lookup, rows_from_json, rows_from_str};
pub use selection::{SelectAllPolicy, Selection, SelectionChange};
pub use viewport::{MOBILE_BREAKPOINT, ViewportMode, ViewportObserver, ViewportSubscription};
